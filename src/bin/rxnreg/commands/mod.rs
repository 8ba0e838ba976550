mod annotate;
mod inspect;

use annotate::run_annotate;
use inspect::run_inspect;

use anyhow::{Context as _, Result, bail};
use rxn_registry::Reaction;
use rxn_registry::io::{Format, read_reaction};

use crate::cli::{Command, IoOptions};
use crate::display::Context;
use crate::io::{infer_format, open_input, stdin_is_tty};

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Annotate(args) => run_annotate(args, ctx),
        Command::Inspect(args) => run_inspect(args, ctx),
    }
}

fn resolve_input_format(io: &IoOptions) -> Result<Format> {
    if let Some(fmt) = io.input_format {
        return Ok(fmt.into());
    }

    if let Some(path) = &io.input {
        if let Some(fmt) = infer_format(path) {
            return Ok(fmt);
        }
        bail!(
            "Cannot infer format from '{}'. Use --infmt to specify.",
            path.display()
        );
    }

    bail!("Reading from stdin requires --infmt");
}

fn read_input(io: &IoOptions) -> Result<(Reaction, Format)> {
    if io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: rxnreg <COMMAND> -i <INPUT> or pipe data via stdin."
        );
    }

    let format = resolve_input_format(io)?;
    let input = open_input(io.input.as_deref())?;
    let reaction =
        read_reaction(input, format).with_context(|| format!("Failed to read {format} input"))?;
    Ok((reaction, format))
}
