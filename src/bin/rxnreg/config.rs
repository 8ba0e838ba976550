use std::fs;

use anyhow::{Context, Result};
use rxn_registry::RegistryAnnotation;

use crate::cli::RegistryOptions;

/// Loads the `--registry` file, if any, and overlays the command-line values.
pub fn build_annotation(opts: &RegistryOptions) -> Result<RegistryAnnotation> {
    let mut annotation = match &opts.registry_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read registry file: {}", path.display()))?;
            RegistryAnnotation::from_toml_str(&text)
                .with_context(|| format!("Invalid registry file: {}", path.display()))?
        }
        None => RegistryAnnotation::default(),
    };

    annotation.merge(RegistryAnnotation {
        reaction_id: opts.reaction_id,
        yield_percent: opts.yield_percent,
        molecules: opts.molecule_ids.iter().copied().collect(),
    });

    Ok(annotation)
}
