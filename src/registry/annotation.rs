use std::collections::BTreeMap;

use serde::Deserialize;

use super::database::DatabaseReaction;
use super::error::Error;
use crate::model::reaction::MoleculeCount;

/// Registry data to attach to a reaction, usually loaded from TOML.
///
/// ```toml
/// reaction_id = 1024
/// yield = 87
///
/// [molecules]
/// 0 = 4711
/// 2 = 4713
/// ```
///
/// Molecule keys are zero-based slot indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryAnnotation {
    pub reaction_id: Option<i64>,
    pub yield_percent: Option<i32>,
    pub molecules: BTreeMap<usize, i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAnnotation {
    reaction_id: Option<i64>,
    #[serde(rename = "yield")]
    yield_percent: Option<i32>,
    #[serde(default)]
    molecules: BTreeMap<String, i64>,
}

impl RegistryAnnotation {
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let raw: RawAnnotation = toml::from_str(s)?;

        let mut molecules = BTreeMap::new();
        for (key, id) in raw.molecules {
            let index = key.trim().parse::<usize>().map_err(|_| {
                Error::InvalidAnnotation(format!(
                    "molecule key '{key}' is not a non-negative slot index"
                ))
            })?;
            molecules.insert(index, id);
        }

        Ok(Self {
            reaction_id: raw.reaction_id,
            yield_percent: raw.yield_percent,
            molecules,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.reaction_id.is_none() && self.yield_percent.is_none() && self.molecules.is_empty()
    }

    /// Overlays `other` on top of `self`; fields present in `other` win.
    pub fn merge(&mut self, other: RegistryAnnotation) {
        if other.reaction_id.is_some() {
            self.reaction_id = other.reaction_id;
        }
        if other.yield_percent.is_some() {
            self.yield_percent = other.yield_percent;
        }
        self.molecules.extend(other.molecules);
    }

    /// Writes every present field into `record`.
    ///
    /// Molecule ids are written in ascending slot order; the first slot outside
    /// the record's allocation aborts with the bounds error, leaving earlier
    /// writes in place.
    pub fn apply<R: MoleculeCount>(&self, record: &mut DatabaseReaction<R>) -> Result<(), Error> {
        if let Some(id) = self.reaction_id {
            record.set_reaction_registry_id(id);
        }
        if let Some(y) = self.yield_percent {
            record.set_reaction_yield(y);
        }
        for (&index, &id) in &self.molecules {
            record.set_molecule_registry_id(index, id)?;
        }
        Ok(())
    }
}
