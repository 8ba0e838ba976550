use std::path::Path;

use rxn_registry::io::Format;

pub fn format(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "rxn" => Some(Format::Rxn),
        "mol" | "sdf" | "sd" => Some(Format::Mol),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_from_extension() {
        assert_eq!(format(Path::new("esterification.RXN")), Some(Format::Rxn));
        assert_eq!(format(Path::new("dir/ethanol.mol")), Some(Format::Mol));
        assert_eq!(format(Path::new("ethanol.sdf")), Some(Format::Mol));
        assert_eq!(format(Path::new("ethanol.mol2")), None);
        assert_eq!(format(Path::new("noext")), None);
    }
}
