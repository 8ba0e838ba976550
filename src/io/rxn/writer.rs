use crate::io::error::Error;
use crate::io::mol::writer::{first_line, write_block};
use crate::model::reaction::Reaction;
use std::io::Write;

/// Writes `reaction` as a V2000 RXN file.
///
/// Molecules are grouped reactants, products, agents. The agent count is only
/// emitted when agents are present, keeping two-count readers compatible.
pub fn write<W: Write>(mut writer: W, reaction: &Reaction) -> Result<(), Error> {
    let reactant_count = reaction.reactant_count();
    let product_count = reaction.product_count();
    let agent_count = reaction.agent_count();

    writeln!(writer, "$RXN")?;
    writeln!(writer, "{}", first_line(&reaction.name))?;
    writeln!(writer, "  rxnreg")?;
    writeln!(writer, "{}", first_line(&reaction.comment))?;
    if agent_count > 0 {
        writeln!(writer, "{reactant_count:>3}{product_count:>3}{agent_count:>3}")?;
    } else {
        writeln!(writer, "{reactant_count:>3}{product_count:>3}")?;
    }

    let ordered = reaction
        .reactants()
        .chain(reaction.products())
        .chain(reaction.agents());
    for (_, molecule) in ordered {
        writeln!(writer, "$MOL")?;
        write_block(&mut writer, molecule)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rxn::reader;
    use crate::model::{
        atom::Atom,
        element::Element,
        molecule::{Bond, Molecule},
        types::{BondOrder, Role},
    };
    use std::io::Cursor;

    fn diatomic(name: &str, a: Element, b: Element, order: BondOrder) -> Molecule {
        let mut mol = Molecule::named(name);
        mol.atoms.push(Atom::new(a, [0.0, 0.0, 0.0]));
        mol.atoms.push(Atom::new(b, [1.1, 0.0, 0.0]));
        mol.bonds.push(Bond::new(0, 1, order));
        mol
    }

    #[test]
    fn groups_molecules_by_role() {
        let mut rxn = Reaction::named("water gas shift");
        rxn.comment = "Fe3O4 catalysed".to_string();
        rxn.add_product(diatomic("hydrogen", Element::H, Element::H, BondOrder::Single));
        rxn.add_reactant(diatomic("carbon monoxide", Element::C, Element::O, BondOrder::Triple));
        rxn.add_agent(Molecule::named("catalyst"));

        let mut buf = Vec::new();
        write(&mut buf, &rxn).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("$RXN\nwater gas shift\n  rxnreg\nFe3O4 catalysed\n  1  1  1\n"));

        let parsed = reader::read(Cursor::new(text)).unwrap();
        assert_eq!(parsed.name, rxn.name);
        assert_eq!(parsed.comment, rxn.comment);
        assert_eq!(parsed.role(0), Some(Role::Reactant));
        assert_eq!(parsed.molecule(0).unwrap().name, "carbon monoxide");
        assert_eq!(
            parsed.molecule(0).unwrap().bonds[0].order,
            BondOrder::Triple
        );
        assert_eq!(parsed.role(1), Some(Role::Product));
        assert_eq!(parsed.role(2), Some(Role::Agent));
        assert!(parsed.molecule(2).unwrap().is_empty());
    }

    #[test]
    fn large_participants_survive_writing() {
        let mut polymer = Molecule::named("polyethylene fragment");
        for k in 0..110 {
            polymer.atoms.push(Atom::new(Element::C, [k as f64, 0.0, 0.0]));
        }
        for k in 0..109 {
            polymer.bonds.push(Bond::new(k, k + 1, BondOrder::Single));
        }
        let mut rxn = Reaction::named("chain growth");
        rxn.add_reactant(polymer.clone());
        rxn.add_product(polymer);

        let mut buf = Vec::new();
        write(&mut buf, &rxn).unwrap();
        let parsed = reader::read(Cursor::new(buf)).unwrap();
        assert_eq!(parsed, rxn);
    }

    #[test]
    fn omits_agent_count_without_agents() {
        let mut rxn = Reaction::new();
        rxn.add_reactant(Molecule::named("x"));
        let mut buf = Vec::new();
        write(&mut buf, &rxn).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(4), Some("  1  0"));
    }
}
