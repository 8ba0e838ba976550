use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bond order string: '{0}'")]
pub struct ParseBondOrderError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid participant role: '{0}'")]
pub struct ParseRoleError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    pub fn value(&self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BondOrder::Single => "Single",
            BondOrder::Double => "Double",
            BondOrder::Triple => "Triple",
            BondOrder::Aromatic => "Aromatic",
        };
        f.write_str(name)
    }
}

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "1" => Ok(BondOrder::Single),
            "double" | "2" => Ok(BondOrder::Double),
            "triple" | "3" => Ok(BondOrder::Triple),
            "aromatic" | "ar" => Ok(BondOrder::Aromatic),
            _ => Err(ParseBondOrderError(s.to_string())),
        }
    }
}

/// Part a molecule plays in a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Reactant,
    Product,
    /// Catalysts, solvents and other participants that are neither consumed nor formed.
    Agent,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Reactant => "Reactant",
            Role::Product => "Product",
            Role::Agent => "Agent",
        };
        f.write_str(name)
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reactant" | "r" => Ok(Role::Reactant),
            "product" | "p" => Ok(Role::Product),
            "agent" | "a" => Ok(Role::Agent),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn bondorder_from_str_variants() {
        assert_eq!(BondOrder::from_str("single").unwrap(), BondOrder::Single);
        assert_eq!(BondOrder::from_str("2").unwrap(), BondOrder::Double);
        assert_eq!(BondOrder::from_str("Triple").unwrap(), BondOrder::Triple);
        assert_eq!(BondOrder::from_str("AR").unwrap(), BondOrder::Aromatic);
    }

    #[test]
    fn bondorder_from_str_invalid() {
        let err = BondOrder::from_str("quad").unwrap_err();
        assert_eq!(err.to_string(), "invalid bond order string: 'quad'");
    }

    #[test]
    fn bondorder_value() {
        assert_eq!(BondOrder::Single.value(), 1.0);
        assert_eq!(BondOrder::Aromatic.value(), 1.5);
        assert_eq!(BondOrder::Triple.to_string(), "Triple");
    }

    #[test]
    fn role_parse_and_display() {
        assert_eq!(Role::from_str("Reactant").unwrap(), Role::Reactant);
        assert_eq!(Role::from_str("p").unwrap(), Role::Product);
        assert_eq!(Role::Agent.to_string(), "Agent");
        assert!(Role::from_str("solvent").is_err());
    }
}
