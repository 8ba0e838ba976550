use std::io::{self, Write};

use anyhow::{Context as _, Result, bail};
use rxn_registry::io::{Format, write_reaction};
use rxn_registry::{DatabaseReaction, RegistryAnnotation};

use super::read_input;
use crate::cli::AnnotateArgs;
use crate::config::build_annotation;
use crate::display::{Context, Progress, print_participants, print_reaction_summary};
use crate::io::{OutputSpec, create_output, infer_format};

const TOTAL_STEPS: u8 = 3;

pub fn run_annotate(args: AnnotateArgs, ctx: Context) -> Result<()> {
    let output_specs = resolve_outputs(&args)?;
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading reaction");
    let (reaction, format) = read_input(&args.io)?;
    let read_substep = format!("Parse {format} file");
    progress.complete_step("Reading reaction", &[read_substep.as_str()]);

    progress.step("Applying registry data");
    let annotation = build_annotation(&args.registry)?;
    let mut record = DatabaseReaction::new(reaction);
    annotation
        .apply(&mut record)
        .context("Failed to apply registry data")?;
    let registry_substeps = build_registry_substeps(&annotation);
    let registry_substeps_ref: Vec<&str> = registry_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Applying registry data", &registry_substeps_ref);

    progress.step("Writing output");
    for spec in &output_specs {
        let mut writer = create_output(spec.path.as_deref())?;
        write_reaction(&mut writer, record.reaction(), spec.format)
            .context("Failed to write reaction file")?;
        writer.flush().context("Failed to flush output")?;
    }
    let write_substeps = build_write_substeps(&output_specs);
    let write_substeps_ref: Vec<&str> = write_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Writing output", &write_substeps_ref);

    progress.finish();

    if report_on_stdout(&output_specs) {
        let mut out = io::stdout().lock();
        print_reaction_summary(&mut out, &record);
        print_participants(&mut out, &record);
        out.flush()?;
    } else {
        let mut err = io::stderr().lock();
        print_reaction_summary(&mut err, &record);
        print_participants(&mut err, &record);
    }

    Ok(())
}

/// The record tables go to stdout unless the reaction itself is written there.
fn report_on_stdout(specs: &[OutputSpec]) -> bool {
    specs.iter().all(|spec| spec.path.is_some())
}

fn build_registry_substeps(annotation: &RegistryAnnotation) -> Vec<String> {
    let mut steps = Vec::new();
    if let Some(id) = annotation.reaction_id {
        steps.push(format!("Reaction registry id {id}"));
    }
    if let Some(y) = annotation.yield_percent {
        steps.push(format!("Yield {y}"));
    }
    if !annotation.molecules.is_empty() {
        steps.push(format!(
            "{} molecule registry id(s)",
            annotation.molecules.len()
        ));
    }
    if steps.is_empty() {
        steps.push("No registry data given".to_string());
    }
    steps
}

fn build_write_substeps(specs: &[OutputSpec]) -> Vec<String> {
    if specs.is_empty() {
        return vec!["No output requested".to_string()];
    }
    specs
        .iter()
        .map(|spec| match &spec.path {
            Some(path) => format!("{} → {}", spec.format, path.display()),
            None => format!("{} → stdout", spec.format),
        })
        .collect()
}

fn resolve_outputs(args: &AnnotateArgs) -> Result<Vec<OutputSpec>> {
    let mut specs = Vec::with_capacity(args.output.len());

    for (i, path) in args.output.iter().enumerate() {
        let to_stdout = path.as_os_str() == "-";
        let format = match (i, args.output_format) {
            (0, Some(fmt)) => fmt.into(),
            _ if to_stdout => Format::Rxn,
            _ => match infer_format(path) {
                Some(fmt) => fmt,
                None => bail!(
                    "Cannot infer format from '{}'. Use --outfmt or an explicit extension.",
                    path.display()
                ),
            },
        };
        specs.push(OutputSpec {
            path: (!to_stdout).then(|| path.clone()),
            format,
        });
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::Path;

    fn annotate_args(extra: &[&str]) -> AnnotateArgs {
        let argv = ["rxnreg", "annotate", "-i", "in.rxn"].iter().chain(extra).copied();
        let Command::Annotate(args) = Cli::try_parse_from(argv).unwrap().command else {
            panic!("expected annotate");
        };
        args
    }

    #[test]
    fn dash_output_is_rxn_on_stdout() {
        let specs = resolve_outputs(&annotate_args(&["-o", "-"])).unwrap();
        assert_eq!(specs.len(), 1);
        assert!(specs[0].path.is_none());
        assert_eq!(specs[0].format, Format::Rxn);
        assert!(!report_on_stdout(&specs));
    }

    #[test]
    fn output_formats_follow_extension_and_outfmt() {
        let specs = resolve_outputs(&annotate_args(&[
            "-o", "first.dat", "--outfmt", "mol", "-o", "second.rxn",
        ]))
        .unwrap();
        assert_eq!(specs[0].format, Format::Mol);
        assert_eq!(specs[0].path.as_deref(), Some(Path::new("first.dat")));
        assert_eq!(specs[1].format, Format::Rxn);
        assert!(report_on_stdout(&specs));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = resolve_outputs(&annotate_args(&["-o", "out.mol2"])).unwrap_err();
        assert!(err.to_string().contains("Cannot infer format from 'out.mol2'"));
    }

    #[test]
    fn no_outputs_reports_on_stdout() {
        let specs = resolve_outputs(&annotate_args(&[])).unwrap();
        assert!(specs.is_empty());
        assert!(report_on_stdout(&specs));
        assert_eq!(build_write_substeps(&specs), vec!["No output requested"]);
    }

    #[test]
    fn registry_substeps_describe_annotation() {
        let steps = build_registry_substeps(&RegistryAnnotation {
            reaction_id: Some(5),
            yield_percent: None,
            molecules: [(0, 1), (1, 2)].into_iter().collect(),
        });
        assert_eq!(steps, vec!["Reaction registry id 5", "2 molecule registry id(s)"]);
        assert_eq!(
            build_registry_substeps(&RegistryAnnotation::default()),
            vec!["No registry data given"]
        );
    }
}
