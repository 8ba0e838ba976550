use super::error::Error;
use crate::model::reaction::{MoleculeCount, Reaction};

/// Yield value meaning "not available".
pub const NOT_AVAILABLE: i32 = -1;

/// Value returned for a molecule slot with no registry id on record.
pub const UNREGISTERED: i64 = -1;

/// A reaction carrying external registry identifiers and an optional yield.
///
/// The wrapped reaction is left untouched; registry data lives beside it.
/// Per-molecule ids are allocated on the first write, sized to the reaction's
/// molecule count at that moment, and never resized afterwards.
///
/// # Examples
///
/// ```
/// use rxn_registry::{DatabaseReaction, Molecule, Reaction};
///
/// let mut reaction = Reaction::named("hydrolysis");
/// reaction.add_reactant(Molecule::named("ester"));
/// reaction.add_reactant(Molecule::named("water"));
/// reaction.add_product(Molecule::named("acid"));
///
/// let mut record = DatabaseReaction::new(reaction);
/// record.set_molecule_registry_id(1, 4711)?;
///
/// assert_eq!(record.molecule_registry_id(0), 0);
/// assert_eq!(record.molecule_registry_id(1), 4711);
/// assert_eq!(record.molecule_registry_id(2), 0);
/// assert_eq!(record.molecule_registry_id(3), -1);
/// assert_eq!(record.reaction_yield(), -1);
/// assert_eq!(record.reaction_registry_id(), None);
/// # Ok::<(), rxn_registry::RegistryError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseReaction<R = Reaction> {
    reaction: R,
    reaction_registry_id: Option<i64>,
    molecule_registry_ids: Option<Box<[i64]>>,
    reaction_yield: i32,
}

impl<R: MoleculeCount> DatabaseReaction<R> {
    /// Wraps `reaction` with no registry ids and the yield not available.
    pub fn new(reaction: R) -> Self {
        Self {
            reaction,
            reaction_registry_id: None,
            molecule_registry_ids: None,
            reaction_yield: NOT_AVAILABLE,
        }
    }

    /// The wrapped reaction.
    pub fn reaction(&self) -> &R {
        &self.reaction
    }

    /// Mutable access to the wrapped reaction.
    ///
    /// Adding or removing participants after the per-molecule ids were allocated
    /// does not change the number of registry slots.
    pub fn reaction_mut(&mut self) -> &mut R {
        &mut self.reaction
    }

    /// Unwraps the reaction, dropping all registry data.
    pub fn into_inner(self) -> R {
        self.reaction
    }

    /// Assigns the reaction registry id, replacing any previous one.
    pub fn set_reaction_registry_id(&mut self, id: i64) {
        self.reaction_registry_id = Some(id);
    }

    /// Returns the reaction registry id, or `None` if it was never set.
    pub fn reaction_registry_id(&self) -> Option<i64> {
        self.reaction_registry_id
    }

    /// Forgets the reaction registry id.
    pub fn clear_reaction_registry_id(&mut self) {
        self.reaction_registry_id = None;
    }

    /// Stores the yield in percent as given; `-1` marks it as not available.
    pub fn set_reaction_yield(&mut self, reaction_yield: i32) {
        self.reaction_yield = reaction_yield;
    }

    /// The stored yield; [`NOT_AVAILABLE`] until one is set.
    pub fn reaction_yield(&self) -> i32 {
        self.reaction_yield
    }

    /// The yield, or `None` when it is [`NOT_AVAILABLE`].
    pub fn yield_percent(&self) -> Option<i32> {
        (self.reaction_yield != NOT_AVAILABLE).then_some(self.reaction_yield)
    }

    /// Writes the registry id of the molecule in slot `index`.
    ///
    /// The first call allocates one zeroed slot per molecule currently in the
    /// reaction. The allocation is kept even when this first write is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MoleculeIndexOutOfBounds`] when `index` is not below the
    /// number of allocated slots.
    pub fn set_molecule_registry_id(&mut self, index: usize, id: i64) -> Result<(), Error> {
        let count = self.reaction.molecule_count();
        let ids = self
            .molecule_registry_ids
            .get_or_insert_with(|| vec![0; count].into_boxed_slice());
        let len = ids.len();
        let slot = ids
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, len))?;
        *slot = id;
        Ok(())
    }

    /// Reads the registry id of the molecule in slot `index`.
    ///
    /// Returns [`UNREGISTERED`] when no ids were allocated yet or `index` is past
    /// the allocated slots. Allocated but unwritten slots read as `0`.
    pub fn molecule_registry_id(&self, index: usize) -> i64 {
        self.molecule_registry_ids
            .as_deref()
            .and_then(|ids| ids.get(index).copied())
            .unwrap_or(UNREGISTERED)
    }

    /// All per-molecule ids, or `None` before the first one is written.
    pub fn molecule_registry_ids(&self) -> Option<&[i64]> {
        self.molecule_registry_ids.as_deref()
    }

    /// Whether the per-molecule slots have been allocated.
    #[inline]
    pub fn has_molecule_registry_ids(&self) -> bool {
        self.molecule_registry_ids.is_some()
    }
}

impl<R: MoleculeCount> From<R> for DatabaseReaction<R> {
    fn from(reaction: R) -> Self {
        Self::new(reaction)
    }
}

impl<R> AsRef<R> for DatabaseReaction<R> {
    fn as_ref(&self) -> &R {
        &self.reaction
    }
}
