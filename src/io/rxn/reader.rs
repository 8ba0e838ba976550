use crate::io::mol::reader::{Line, parse_block};
use crate::io::{Format, error::Error, util};
use crate::model::reaction::Reaction;
use crate::model::types::Role;
use std::io::BufRead;

pub fn read<R: BufRead>(reader: R) -> Result<Reaction, Error> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        lines.push((i + 1, line?));
    }

    let header = lines
        .first()
        .ok_or_else(|| Error::parse(Format::Rxn, 1, "empty input"))?;
    let tag = header.1.trim();
    if !tag.starts_with("$RXN") {
        return Err(Error::parse(Format::Rxn, header.0, "file must start with $RXN"));
    }
    if tag.contains("V3000") {
        return Err(Error::parse(Format::Rxn, header.0, "V3000 is not supported"));
    }
    if lines.len() < 5 {
        return Err(Error::parse(
            Format::Rxn,
            lines.last().map(|(ln, _)| *ln).unwrap_or(1),
            "RXN header must contain name, program, comment and counts lines",
        ));
    }

    let roles = parse_counts(&lines[4])?;

    let mut reaction = Reaction {
        name: lines[1].1.trim().to_string(),
        comment: lines[3].1.trim().to_string(),
        participants: Vec::with_capacity(roles.len()),
    };

    let blocks = split_mol_blocks(&lines[5..]);
    if blocks.len() != roles.len() {
        return Err(Error::parse(
            Format::Rxn,
            lines[4].0,
            format!(
                "counts line declares {} molecule(s) but {} $MOL block(s) follow",
                roles.len(),
                blocks.len()
            ),
        ));
    }

    for (role, block) in roles.into_iter().zip(blocks) {
        let molecule = parse_block(block, Format::Rxn)?;
        reaction.add(role, molecule);
    }

    Ok(reaction)
}

/// Expands the `rrrppp[aaa]` counts line into one role per `$MOL` block.
fn parse_counts((line_no, line): &Line) -> Result<Vec<Role>, Error> {
    let count = |n: usize| -> Result<Option<usize>, Error> {
        util::column(line, n)
            .map(|field| {
                field
                    .parse::<usize>()
                    .map_err(|_| Error::parse(Format::Rxn, *line_no, "invalid molecule count"))
            })
            .transpose()
    };

    let (Some(reactants), Some(products)) = (count(0)?, count(1)?) else {
        return Err(Error::parse(
            Format::Rxn,
            *line_no,
            "counts line must contain reactant and product counts",
        ));
    };
    let agents = count(2)?.unwrap_or(0);

    let mut roles = Vec::with_capacity(reactants + products + agents);
    roles.extend(std::iter::repeat_n(Role::Reactant, reactants));
    roles.extend(std::iter::repeat_n(Role::Product, products));
    roles.extend(std::iter::repeat_n(Role::Agent, agents));
    Ok(roles)
}

fn split_mol_blocks(lines: &[Line]) -> Vec<&[Line]> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, (_, l))| l.trim_end() == "$MOL")
        .map(|(i, _)| i)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(k, &start)| {
            let end = starts.get(k + 1).copied().unwrap_or(lines.len());
            &lines[start + 1..end]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::Element;
    use crate::model::reaction::MoleculeCount;
    use std::io::Cursor;

    fn block(name: &str, symbol: &str) -> String {
        format!(
            "$MOL\n{name}\n  test\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 {symbol:<3} 0  0  0  0  0  0  0  0  0  0  0  0\nM  END\n"
        )
    }

    fn rxn_text(counts: &str, blocks: &[(&str, &str)]) -> String {
        let mut text = format!("$RXN\nchlorination\n  test\nradical substitution\n{counts}\n");
        for (name, symbol) in blocks {
            text.push_str(&block(name, symbol));
        }
        text
    }

    #[test]
    fn reads_reactants_then_products() {
        let text = rxn_text(
            "  2  2",
            &[("methane", "C"), ("chlorine", "Cl"), ("chloromethane", "C"), ("hcl", "Cl")],
        );
        let rxn = read(Cursor::new(text)).unwrap();
        assert_eq!(rxn.name, "chlorination");
        assert_eq!(rxn.comment, "radical substitution");
        assert_eq!(rxn.molecule_count(), 4);
        assert_eq!(rxn.role(1), Some(Role::Reactant));
        assert_eq!(rxn.role(2), Some(Role::Product));
        assert_eq!(rxn.molecule(1).unwrap().atoms[0].element, Element::Cl);
        assert_eq!(rxn.molecule(3).unwrap().name, "hcl");
    }

    #[test]
    fn reads_optional_agent_count() {
        let text = rxn_text("  1  1  1", &[("a", "C"), ("b", "C"), ("light", "H")]);
        let rxn = read(Cursor::new(text)).unwrap();
        assert_eq!(rxn.agent_count(), 1);
        assert_eq!(rxn.role(2), Some(Role::Agent));
    }

    #[test]
    fn counts_line_is_positional() {
        let blocks: Vec<(String, &str)> = (0..102).map(|k| (format!("m{k}"), "C")).collect();
        let refs: Vec<(&str, &str)> = blocks.iter().map(|(n, s)| (n.as_str(), *s)).collect();
        let rxn = read(Cursor::new(rxn_text("100  2", &refs))).unwrap();
        assert_eq!(rxn.reactant_count(), 100);
        assert_eq!(rxn.product_count(), 2);
        assert_eq!(rxn.role(100), Some(Role::Product));
    }

    #[test]
    fn rejects_missing_product_count() {
        let err = read(Cursor::new(rxn_text("  1", &[("a", "C")]))).unwrap_err();
        assert!(err.to_string().contains("reactant and product counts"));
    }

    #[test]
    fn rejects_block_count_mismatch() {
        let text = rxn_text("  2  1", &[("a", "C"), ("b", "C")]);
        let err = read(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 5, .. }));
    }

    #[test]
    fn rejects_missing_header() {
        let err = read(Cursor::new("$MOL\n")).unwrap_err();
        assert!(err.to_string().contains("$RXN"));
        let err = read(Cursor::new("")).unwrap_err();
        assert!(err.to_string().contains("empty input"));
        let err = read(Cursor::new("$RXN V3000\n")).unwrap_err();
        assert!(err.to_string().contains("V3000"));
    }

    #[test]
    fn empty_reaction_is_allowed() {
        let text = rxn_text("  0  0", &[]);
        let rxn = read(Cursor::new(text)).unwrap();
        assert_eq!(rxn.molecule_count(), 0);
    }
}
