mod infer;
mod spec;

pub use infer::format as infer_format;
pub use spec::OutputSpec;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

/// Opens the reaction input, falling back to stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdin().lock()));
    };
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Creates one output sink; `None` writes to stdout.
pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_output_reads_back() {
        let path = std::env::temp_dir().join(format!("rxnreg-io-{}.rxn", std::process::id()));
        {
            let mut out = create_output(Some(&path)).unwrap();
            writeln!(out, "$RXN").unwrap();
            out.flush().unwrap();
        }
        let mut input = open_input(Some(&path)).unwrap();
        let mut line = String::new();
        input.read_line(&mut line).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(line, "$RXN\n");
    }

    #[test]
    fn missing_input_names_the_path() {
        let err = open_input(Some(Path::new("/nonexistent/rxnreg/in.rxn"))).err().unwrap();
        assert!(err.to_string().contains("/nonexistent/rxnreg/in.rxn"));
    }
}
