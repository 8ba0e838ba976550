use std::io::{self, Write};

use anyhow::Error;
use rxn_registry::RegistryError;
use rxn_registry::io::{Error as IoError, Format};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    if let Some(io_err) = err.downcast_ref::<IoError>() {
        io_hints(io_err, &mut hints);
    } else if let Some(reg_err) = err.downcast_ref::<RegistryError>() {
        registry_hints(reg_err, &mut hints);
    } else if let Some(std_err) = err.downcast_ref::<io::Error>() {
        std_io_hints(std_err, &mut hints);
    }

    hints
}

fn io_hints(err: &IoError, hints: &mut Vec<String>) {
    match err {
        IoError::Io { source } => std_io_hints(source, hints),
        IoError::Parse { format, line, .. } => {
            hints.push(format!(
                "Parser encountered an issue near line {line} in {format} format"
            ));
            hints.push("Inspect the file around that line for malformed entries".to_string());
            match format {
                Format::Mol => {
                    hints.push("Only V2000 molfiles are supported".to_string());
                }
                Format::Rxn => {
                    hints.push(
                        "The counts line must match the number of $MOL blocks".to_string(),
                    );
                    hints.push("Try --infmt mol if the file holds a single molecule".to_string());
                }
            }
        }
        IoError::NotSingleMolecule { .. } => {
            hints.push("Write the reaction with an .rxn extension or --outfmt rxn".to_string());
        }
    }
}

fn registry_hints(err: &RegistryError, hints: &mut Vec<String>) {
    match err {
        RegistryError::MoleculeIndexOutOfBounds { len, .. } => {
            hints.push(format!(
                "Molecule slots are zero-based; valid slots are 0..{len}"
            ));
            hints.push("Run `rxnreg inspect` to list the reaction's slots".to_string());
        }
        RegistryError::AnnotationParse(_) => {
            hints.push("Expected keys: reaction_id, yield, and a [molecules] table".to_string());
        }
        RegistryError::InvalidAnnotation(_) => {
            hints.push("Keys of [molecules] must be zero-based slot numbers".to_string());
        }
    }
}

fn std_io_hints(err: &io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match err.kind() {
        ErrorKind::NotFound => {
            hints.push("Check the path spelling and ensure the file exists".to_string());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Check file permissions with `ls -la`".to_string());
        }
        ErrorKind::InvalidData => {
            hints.push("The file is not valid UTF-8 text".to_string());
        }
        ErrorKind::BrokenPipe => {
            hints.push("Output consumer terminated early".to_string());
        }
        _ => {
            hints.push("Check file path, permissions, and disk space".to_string());
        }
    }
}
