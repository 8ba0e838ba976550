use super::molecule::Molecule;
use super::types::Role;

/// Read access to the number of molecule slots of a reaction.
///
/// This is the only capability [`DatabaseReaction`](crate::DatabaseReaction) needs
/// from the reaction it wraps.
pub trait MoleculeCount {
    fn molecule_count(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub role: Role,
    pub molecule: Molecule,
}

/// A chemical reaction as an ordered list of participant molecules.
///
/// Slot indices are positions in insertion order, independent of role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reaction {
    pub name: String,
    pub comment: String,
    pub participants: Vec<Participant>,
}

impl Reaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends a participant and returns its slot index.
    pub fn add(&mut self, role: Role, molecule: Molecule) -> usize {
        self.participants.push(Participant { role, molecule });
        self.participants.len() - 1
    }

    pub fn add_reactant(&mut self, molecule: Molecule) -> usize {
        self.add(Role::Reactant, molecule)
    }

    pub fn add_product(&mut self, molecule: Molecule) -> usize {
        self.add(Role::Product, molecule)
    }

    pub fn add_agent(&mut self, molecule: Molecule) -> usize {
        self.add(Role::Agent, molecule)
    }

    /// Removes the participant at `index`, shifting later slots down.
    pub fn remove(&mut self, index: usize) -> Option<Participant> {
        (index < self.participants.len()).then(|| self.participants.remove(index))
    }

    pub fn molecule(&self, index: usize) -> Option<&Molecule> {
        self.participants.get(index).map(|p| &p.molecule)
    }

    pub fn role(&self, index: usize) -> Option<Role> {
        self.participants.get(index).map(|p| p.role)
    }

    pub fn reactants(&self) -> impl Iterator<Item = (usize, &Molecule)> {
        self.with_role(Role::Reactant)
    }

    pub fn products(&self) -> impl Iterator<Item = (usize, &Molecule)> {
        self.with_role(Role::Product)
    }

    pub fn agents(&self) -> impl Iterator<Item = (usize, &Molecule)> {
        self.with_role(Role::Agent)
    }

    pub fn reactant_count(&self) -> usize {
        self.reactants().count()
    }

    pub fn product_count(&self) -> usize {
        self.products().count()
    }

    pub fn agent_count(&self) -> usize {
        self.agents().count()
    }

    fn with_role(&self, role: Role) -> impl Iterator<Item = (usize, &Molecule)> {
        self.participants
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.role == role)
            .map(|(i, p)| (i, &p.molecule))
    }
}

impl MoleculeCount for Reaction {
    #[inline]
    fn molecule_count(&self) -> usize {
        self.participants.len()
    }
}
