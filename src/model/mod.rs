//! Chemistry data model for reactions and their participant molecules.
//!
//! - [`element`] – Periodic table elements with symbols and atomic masses.
//! - [`types`] – Bond orders and participant roles.
//! - [`atom`] – Atom with element, coordinates and formal charge.
//! - [`molecule`] – Connection table of one participant.
//! - [`reaction`] – Ordered participant list and the [`MoleculeCount`] capability.
//!
//! [`MoleculeCount`]: reaction::MoleculeCount

pub mod atom;
pub mod element;
pub mod molecule;
pub mod reaction;
pub mod types;
