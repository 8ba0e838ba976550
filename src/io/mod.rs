//! Reading and writing MDL CTfiles.
//!
//! - [`Format::Mol`] – a single V2000 molfile, read as a one-reactant reaction.
//! - [`Format::Rxn`] – a V2000 RXN file with reactant, product and agent blocks.

use std::fmt;
use std::io::{BufRead, Write};

use crate::model::molecule::Molecule;
use crate::model::reaction::{MoleculeCount, Reaction};

pub mod error;
pub mod util;

mod mol;
mod rxn;

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Mol,
    Rxn,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Mol => write!(f, "MOL"),
            Format::Rxn => write!(f, "RXN"),
        }
    }
}

pub fn read_molfile<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    mol::reader::read(reader)
}

pub fn write_molfile<W: Write>(writer: W, molecule: &Molecule) -> Result<(), Error> {
    mol::writer::write(writer, molecule)
}

pub fn read_rxn<R: BufRead>(reader: R) -> Result<Reaction, Error> {
    rxn::reader::read(reader)
}

pub fn write_rxn<W: Write>(writer: W, reaction: &Reaction) -> Result<(), Error> {
    rxn::writer::write(writer, reaction)
}

/// Reads a reaction in `format`. A molfile becomes a reaction with a single
/// reactant named after the molecule.
pub fn read_reaction<R: BufRead>(reader: R, format: Format) -> Result<Reaction, Error> {
    match format {
        Format::Rxn => read_rxn(reader),
        Format::Mol => {
            let molecule = read_molfile(reader)?;
            let mut reaction = Reaction::named(molecule.name.clone());
            reaction.add_reactant(molecule);
            Ok(reaction)
        }
    }
}

/// Writes a reaction in `format`. Molfile output requires exactly one molecule.
pub fn write_reaction<W: Write>(
    writer: W,
    reaction: &Reaction,
    format: Format,
) -> Result<(), Error> {
    match format {
        Format::Rxn => write_rxn(writer, reaction),
        Format::Mol => match reaction.participants.as_slice() {
            [only] => write_molfile(writer, &only.molecule),
            _ => Err(Error::NotSingleMolecule {
                format,
                count: reaction.molecule_count(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn molfile_reads_as_single_reactant() {
        let mut molecule = Molecule::named("benzene");
        molecule.atoms.push(crate::Atom::new(crate::Element::C, [0.0; 3]));
        let mut buf = Vec::new();
        write_molfile(&mut buf, &molecule).unwrap();

        let reaction = read_reaction(Cursor::new(buf), Format::Mol).unwrap();
        assert_eq!(reaction.name, "benzene");
        assert_eq!(reaction.molecule_count(), 1);
        assert_eq!(reaction.reactant_count(), 1);
    }

    #[test]
    fn molfile_output_needs_one_molecule() {
        let mut reaction = Reaction::new();
        reaction.add_reactant(Molecule::named("a"));
        reaction.add_product(Molecule::named("b"));
        let err = write_reaction(Vec::new(), &reaction, Format::Mol).unwrap_err();
        assert!(matches!(err, Error::NotSingleMolecule { count: 2, .. }));
        assert_eq!(
            err.to_string(),
            "the MOL format holds exactly one molecule, but the reaction has 2"
        );
    }

    #[test]
    fn format_display() {
        assert_eq!(Format::Mol.to_string(), "MOL");
        assert_eq!(Format::Rxn.to_string(), "RXN");
    }
}
