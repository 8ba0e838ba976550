//! In-memory registry bookkeeping for chemical reactions.
//!
//! A [`DatabaseReaction`] carries the identifiers an external reaction registry
//! assigns to a [`Reaction`] and to each of its participant molecules, plus an
//! optional experimental yield, without the reaction model itself knowing about
//! databases. Looking identifiers up, assigning them, and persisting them are the
//! job of whichever registry fills the record.
//!
//! # Quick Start
//!
//! ```
//! use rxn_registry::{DatabaseReaction, Molecule, Reaction, RegistryError};
//!
//! let mut reaction = Reaction::named("Fischer esterification");
//! reaction.add_reactant(Molecule::named("acetic acid"));
//! reaction.add_reactant(Molecule::named("ethanol"));
//! reaction.add_product(Molecule::named("ethyl acetate"));
//!
//! let mut record = DatabaseReaction::new(reaction);
//! record.set_reaction_registry_id(99);
//! record.set_reaction_yield(67);
//! record.set_molecule_registry_id(2, 4711)?;
//!
//! assert_eq!(record.reaction_registry_id(), Some(99));
//! assert_eq!(record.yield_percent(), Some(67));
//! assert_eq!(record.molecule_registry_id(2), 4711);
//!
//! // Writes past the slots allocated on first write are rejected...
//! assert!(record.set_molecule_registry_id(3, 1).is_err());
//! // ...while reads past them report "not available".
//! assert_eq!(record.molecule_registry_id(3), -1);
//! # Ok::<(), RegistryError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — MDL molfile and RXN reading and writing
//! - [`RegistryAnnotation`] — TOML-loadable registry data applied to a record
//!
//! # Data Types
//!
//! - [`Reaction`] — Ordered participant molecules with [`Role`]s
//! - [`Molecule`] — Connection table of [`Atom`]s and [`Bond`]s
//! - [`Element`] — Chemical element (H through Og)
//! - [`BondOrder`] — Bond order (Single, Double, Triple, Aromatic)
//! - [`MoleculeCount`] — The capability a wrapped reaction must provide

mod model;
mod registry;

pub mod io;

pub use model::atom::Atom;
pub use model::element::{Element, ParseElementError};
pub use model::molecule::{Bond, Molecule};
pub use model::reaction::{MoleculeCount, Participant, Reaction};
pub use model::types::{BondOrder, ParseBondOrderError, ParseRoleError, Role};

pub use registry::{DatabaseReaction, NOT_AVAILABLE, RegistryAnnotation, UNREGISTERED};

pub use registry::Error as RegistryError;
