//! Registry bookkeeping attached to an in-memory reaction.
//!
//! [`DatabaseReaction`] wraps any reaction implementing
//! [`MoleculeCount`](crate::MoleculeCount) and carries the reaction's registry id,
//! one registry id per molecule slot, and the reaction yield. Lookup, assignment
//! and persistence of these ids belong to whatever registry populates the record.

mod annotation;
mod database;
mod error;

pub use annotation::RegistryAnnotation;
pub use database::{DatabaseReaction, NOT_AVAILABLE, UNREGISTERED};
pub use error::Error;
