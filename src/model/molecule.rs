use std::collections::BTreeMap;
use std::fmt::Write;

use super::atom::Atom;
use super::element::Element;
use super::types::BondOrder;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(idx1: usize, idx2: usize, order: BondOrder) -> Self {
        if idx1 <= idx2 {
            Self { i: idx1, j: idx2, order }
        } else {
            Self { i: idx2, j: idx1, order }
        }
    }
}

/// A connection table for one reaction participant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub name: String,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Molecular formula in Hill order.
    ///
    /// Carbon comes first and hydrogen second when carbon is present; all other
    /// elements (and hydrogen, for carbon-free molecules) follow alphabetically.
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<Element, usize> = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element).or_insert(0) += 1;
        }

        let mut ordered: Vec<(Element, usize)> = Vec::with_capacity(counts.len());
        if let Some(c) = counts.remove(&Element::C) {
            ordered.push((Element::C, c));
            if let Some(h) = counts.remove(&Element::H) {
                ordered.push((Element::H, h));
            }
        }
        let mut rest: Vec<_> = counts.into_iter().collect();
        rest.sort_by(|a, b| a.0.symbol().cmp(b.0.symbol()));
        ordered.extend(rest);

        let mut out = String::new();
        for (element, count) in ordered {
            out.push_str(element.symbol());
            if count > 1 {
                let _ = write!(out, "{count}");
            }
        }
        out
    }

    /// Sum of standard atomic weights in g/mol.
    pub fn molecular_weight(&self) -> f64 {
        self.atoms.iter().map(|a| a.element.atomic_mass()).sum()
    }
}
