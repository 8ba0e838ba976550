use super::element::Element;

/// A single atom of a reaction participant.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    /// Cartesian coordinates in Å; all zeros for 2D-less connection tables.
    pub position: [f64; 3],
    pub formal_charge: i8,
}

impl Atom {
    pub fn new(element: Element, position: [f64; 3]) -> Self {
        Self {
            element,
            position,
            formal_charge: 0,
        }
    }

    pub fn with_charge(mut self, formal_charge: i8) -> Self {
        self.formal_charge = formal_charge;
        self
    }
}
