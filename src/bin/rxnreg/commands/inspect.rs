use std::io::{self, Write};

use anyhow::Result;
use rxn_registry::DatabaseReaction;

use super::read_input;
use crate::cli::InspectArgs;
use crate::display::{Context, Progress, print_participants, print_reaction_summary};

pub fn run_inspect(args: InspectArgs, ctx: Context) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, 1);

    progress.step("Reading reaction");
    let (reaction, format) = read_input(&args.io)?;
    let substep = format!("Parse {format} file");
    progress.complete_step("Reading reaction", &[substep.as_str()]);
    progress.finish();

    let record = DatabaseReaction::new(reaction);
    let mut out = io::stdout().lock();
    print_reaction_summary(&mut out, &record);
    print_participants(&mut out, &record);
    out.flush()?;

    Ok(())
}
