//! Error types for registry bookkeeping.

use thiserror::Error;

/// Errors raised while attaching registry data to a reaction.
#[derive(Debug, Error)]
pub enum Error {
    /// A per-molecule registry id was written to a slot that does not exist.
    ///
    /// `len` is the length fixed when the per-molecule ids were first allocated,
    /// which may differ from the reaction's current molecule count.
    #[error("molecule index {index} is out of bounds for {len} registry slot(s)")]
    MoleculeIndexOutOfBounds {
        /// Requested slot index.
        index: usize,
        /// Number of allocated slots.
        len: usize,
    },

    /// Failed to parse a registry annotation TOML document.
    #[error("failed to parse registry annotation: {0}")]
    AnnotationParse(#[from] toml::de::Error),

    /// The annotation parsed but holds a value that cannot be applied.
    #[error("invalid registry annotation: {0}")]
    InvalidAnnotation(String),
}

impl Error {
    /// Creates a [`MoleculeIndexOutOfBounds`](Error::MoleculeIndexOutOfBounds) error.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::MoleculeIndexOutOfBounds { index, len }
    }
}
