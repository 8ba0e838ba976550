use rxn_registry::io::Format;

use crate::cli::FileFormat;

impl From<FileFormat> for Format {
    fn from(fmt: FileFormat) -> Self {
        match fmt {
            FileFormat::Mol => Format::Mol,
            FileFormat::Rxn => Format::Rxn,
        }
    }
}

/// Renders a per-molecule registry id, showing the unregistered sentinel as a dash.
pub fn registry_id_display(id: i64) -> String {
    if id == rxn_registry::UNREGISTERED {
        "—".to_string()
    } else {
        id.to_string()
    }
}

pub fn yield_display(yield_percent: Option<i32>) -> String {
    match yield_percent {
        Some(y) => format!("{y}%"),
        None => "n/a".to_string(),
    }
}
