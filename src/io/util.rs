//! Field conversions shared by the MDL CTfile readers and writers.

use crate::model::element::Element;
use crate::model::types::BondOrder;

/// Resolves an atom-block symbol, tolerating upper-case input and the
/// `D`/`T` hydrogen isotope labels.
pub fn element_from_symbol(token: &str) -> Option<Element> {
    let token = token.trim();
    if let Ok(element) = token.parse::<Element>() {
        return Some(element);
    }
    match token {
        "D" | "T" => return Some(Element::H),
        "" => return None,
        _ => {}
    }
    let mut chars = token.chars();
    let first = chars.next()?.to_ascii_uppercase();
    let normalized: String = std::iter::once(first)
        .chain(chars.map(|c| c.to_ascii_lowercase()))
        .collect();
    normalized.parse().ok()
}

/// Returns the trimmed `n`-th three-character column of a counts or bond line,
/// or `None` when the line ends before it or the column is blank.
pub fn column(line: &str, n: usize) -> Option<&str> {
    let start = n * 3;
    let end = (start + 3).min(line.len());
    line.get(start..end)
        .map(str::trim)
        .filter(|field| !field.is_empty())
}

pub fn bond_order_from_ctfile(code: i32) -> Option<BondOrder> {
    match code {
        1 => Some(BondOrder::Single),
        2 => Some(BondOrder::Double),
        3 => Some(BondOrder::Triple),
        4 => Some(BondOrder::Aromatic),
        _ => None,
    }
}

pub fn bond_order_to_ctfile(order: BondOrder) -> i32 {
    match order {
        BondOrder::Single => 1,
        BondOrder::Double => 2,
        BondOrder::Triple => 3,
        BondOrder::Aromatic => 4,
    }
}

/// Decodes the atom-block `ccc` charge field. Code 4 (doublet radical) carries
/// no charge.
pub fn charge_from_ctfile(code: i32) -> Option<i8> {
    match code {
        0 | 4 => Some(0),
        1 => Some(3),
        2 => Some(2),
        3 => Some(1),
        5 => Some(-1),
        6 => Some(-2),
        7 => Some(-3),
        _ => None,
    }
}

/// Encodes a formal charge for the atom-block `ccc` field. Charges beyond ±3
/// encode as 0 and are carried by `M  CHG` lines only.
pub fn charge_to_ctfile(charge: i8) -> i32 {
    match charge {
        3 => 1,
        2 => 2,
        1 => 3,
        -1 => 5,
        -2 => 6,
        -3 => 7,
        _ => 0,
    }
}
