use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "rxnreg",
    about = "Attach registry identifiers and yields to chemical reactions",
    version,
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply registry ids and yield to a reaction and report the record
    #[command(visible_alias = "a")]
    Annotate(AnnotateArgs),

    /// Summarize a reaction and its participants
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

/// Input options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Input file (stdin if omitted, requires --infmt)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format (inferred from extension if not specified)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<FileFormat>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Registry values to attach; command-line values override the TOML file.
#[derive(Args)]
#[command(next_help_heading = "Registry Data")]
pub struct RegistryOptions {
    /// TOML file with reaction_id, yield and a [molecules] table
    #[arg(long = "registry", value_name = "TOML")]
    pub registry_file: Option<PathBuf>,

    /// Reaction registry id
    #[arg(long = "reaction-id", value_name = "ID", allow_hyphen_values = true)]
    pub reaction_id: Option<i64>,

    /// Reaction yield in percent (-1 for not available)
    #[arg(long = "yield", value_name = "PERCENT", allow_hyphen_values = true)]
    pub yield_percent: Option<i32>,

    /// Molecule registry id as SLOT=ID (zero-based slot), repeatable
    #[arg(
        long = "molecule-id",
        value_name = "SLOT=ID",
        value_parser = parse_molecule_id,
        action = clap::ArgAction::Append
    )]
    pub molecule_ids: Vec<(usize, i64)>,
}

#[derive(Args)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Output file(s), repeatable; "-" writes to stdout
    #[arg(short, long, value_name = "FILE", action = clap::ArgAction::Append)]
    pub output: Vec<PathBuf>,

    /// Output format for first/only output
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<FileFormat>,

    #[command(flatten)]
    pub registry: RegistryOptions,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub io: IoOptions,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FileFormat {
    /// MDL molfile (single molecule)
    #[value(alias = "sdf")]
    Mol,
    /// MDL RXN file
    Rxn,
}

fn parse_molecule_id(s: &str) -> Result<(usize, i64), String> {
    let (slot, id) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SLOT=ID, got '{s}'"))?;
    let slot = slot
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("slot '{}' is not a non-negative integer", slot.trim()))?;
    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("registry id '{}' is not an integer", id.trim()))?;
    Ok((slot, id))
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn molecule_id_pairs() {
        assert_eq!(parse_molecule_id("1=4711"), Ok((1, 4711)));
        assert_eq!(parse_molecule_id(" 0 = -3 "), Ok((0, -3)));
        assert!(parse_molecule_id("4711").is_err());
        assert!(parse_molecule_id("-1=5").is_err());
        assert!(parse_molecule_id("1=abc").is_err());
    }

    #[test]
    fn parses_annotate_flags() {
        let cli = Cli::try_parse_from([
            "rxnreg",
            "annotate",
            "-i",
            "in.rxn",
            "--reaction-id",
            "-1",
            "--yield",
            "87",
            "--molecule-id",
            "0=10",
            "--molecule-id",
            "2=12",
        ])
        .unwrap();
        let Command::Annotate(args) = cli.command else {
            panic!("expected annotate");
        };
        assert_eq!(args.registry.reaction_id, Some(-1));
        assert_eq!(args.registry.yield_percent, Some(87));
        assert_eq!(args.registry.molecule_ids, vec![(0, 10), (2, 12)]);
        assert!(args.output.is_empty());
    }
}
