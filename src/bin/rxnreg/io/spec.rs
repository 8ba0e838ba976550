use std::path::PathBuf;

use rxn_registry::io::Format;

#[derive(Debug, Clone)]
pub struct OutputSpec {
    /// Path to write to, or `None` for stdout.
    pub path: Option<PathBuf>,
    pub format: Format,
}
