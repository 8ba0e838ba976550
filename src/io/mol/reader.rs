use crate::io::{Format, error::Error, util};
use crate::model::{
    atom::Atom,
    molecule::{Bond, Molecule},
};
use std::io::BufRead;

pub type Line = (usize, String);

pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let lines = collect_first_record(reader)?;
    parse_block(&lines, Format::Mol)
}

/// Collects numbered lines up to the first `$$$$` record separator.
fn collect_first_record<R: BufRead>(reader: R) -> Result<Vec<Line>, Error> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let content = line?;
        if content.trim() == "$$$$" && !lines.is_empty() {
            break;
        }
        lines.push((i + 1, content));
    }
    Ok(lines)
}

/// Parses one V2000 connection table: three header lines, the counts line, the
/// atom and bond blocks, then properties up to `M  END`.
pub(crate) fn parse_block(lines: &[Line], format: Format) -> Result<Molecule, Error> {
    if lines.len() < 4 {
        let line = lines.last().map(|(ln, _)| *ln).unwrap_or(1);
        return Err(Error::parse(
            format,
            line,
            "molfile block must contain three header lines and a counts line",
        ));
    }

    let name = lines[0].1.trim().to_string();
    let (counts_line_no, counts_line) = (lines[3].0, &lines[3].1);
    if counts_line.contains("V3000") {
        return Err(Error::parse(
            format,
            counts_line_no,
            "V3000 is not supported",
        ));
    }

    let (atom_count, bond_count) = parse_counts(counts_line, counts_line_no, format)?;
    let atom_start = 4;
    let bond_start = atom_start + atom_count;
    let props_start = bond_start + bond_count;

    if lines.len() < props_start {
        return Err(Error::parse(
            format,
            lines.last().map(|(ln, _)| *ln).unwrap_or(counts_line_no),
            "molfile block ended before atoms/bonds were fully specified",
        ));
    }

    let mut atoms = parse_atoms(&lines[atom_start..bond_start], format)?;
    let bonds = parse_bonds(&lines[bond_start..props_start], atom_count, format)?;
    apply_properties(&lines[props_start..], &mut atoms, format)?;

    Ok(Molecule { name, atoms, bonds })
}

fn parse_counts(line: &str, line_no: usize, format: Format) -> Result<(usize, usize), Error> {
    let count = |n: usize, what: &str| -> Result<usize, Error> {
        util::column(line, n)
            .ok_or_else(|| {
                Error::parse(format, line_no, "counts line must contain atom and bond counts")
            })?
            .parse::<usize>()
            .map_err(|_| Error::parse(format, line_no, format!("invalid {what} count")))
    };
    Ok((count(0, "atom")?, count(1, "bond")?))
}

fn parse_atoms(lines: &[Line], format: Format) -> Result<Vec<Atom>, Error> {
    let mut atoms = Vec::with_capacity(lines.len());
    for (ln, raw) in lines {
        if !raw.is_ascii() {
            return Err(Error::parse(format, *ln, "atom line contains non-ASCII text"));
        }
        let padded = format!("{raw:<39}");
        let coord = |range: std::ops::Range<usize>, axis: &str| {
            padded[range].trim().parse::<f64>().map_err(|_| {
                Error::parse(format, *ln, format!("invalid {axis} coordinate in atom line"))
            })
        };
        let x = coord(0..10, "x")?;
        let y = coord(10..20, "y")?;
        let z = coord(20..30, "z")?;

        let element = util::element_from_symbol(&padded[31..34])
            .ok_or_else(|| Error::parse(format, *ln, "unable to infer element symbol"))?;

        let charge_field = padded[36..39].trim();
        let formal_charge = if charge_field.is_empty() {
            0
        } else {
            charge_field
                .parse::<i32>()
                .ok()
                .and_then(util::charge_from_ctfile)
                .ok_or_else(|| Error::parse(format, *ln, "invalid charge field in atom line"))?
        };

        atoms.push(Atom::new(element, [x, y, z]).with_charge(formal_charge));
    }
    Ok(atoms)
}

fn parse_bonds(lines: &[Line], atom_count: usize, format: Format) -> Result<Vec<Bond>, Error> {
    let mut bonds = Vec::with_capacity(lines.len());
    for (ln, raw) in lines {
        let field = |n: usize, what: &str| -> Result<i64, Error> {
            util::column(raw, n)
                .ok_or_else(|| Error::parse(format, *ln, "invalid bond line"))?
                .parse::<i64>()
                .map_err(|_| Error::parse(format, *ln, format!("invalid {what} in bond line")))
        };
        let a1 = field(0, "first atom index")?;
        let a2 = field(1, "second atom index")?;
        let order_val = field(2, "bond order value")?;

        let order = i32::try_from(order_val)
            .ok()
            .and_then(util::bond_order_from_ctfile)
            .ok_or_else(|| Error::parse(format, *ln, "unsupported bond order in bond line"))?;

        let in_range = |a: i64| usize::try_from(a).ok().filter(|&a| a >= 1 && a <= atom_count);
        let (Some(a1), Some(a2)) = (in_range(a1), in_range(a2)) else {
            return Err(Error::parse(
                format,
                *ln,
                "bond references atom outside declared range",
            ));
        };

        bonds.push(Bond::new(a1 - 1, a2 - 1, order));
    }
    Ok(bonds)
}

/// Applies `M  CHG` lines. Their presence supersedes every atom-block charge.
fn apply_properties(lines: &[Line], atoms: &mut [Atom], format: Format) -> Result<(), Error> {
    let mut reset = false;
    for (ln, raw) in lines {
        if raw.starts_with("M  END") {
            break;
        }
        if !raw.starts_with("M  CHG") {
            continue;
        }
        if !reset {
            atoms.iter_mut().for_each(|a| a.formal_charge = 0);
            reset = true;
        }

        let values = raw[6..]
            .split_whitespace()
            .map(|t| t.parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::parse(format, *ln, "invalid number in M  CHG line"))?;
        let Some((&n, pairs)) = values.split_first() else {
            return Err(Error::parse(format, *ln, "M  CHG line is missing its entry count"));
        };
        if n < 0 || pairs.len() != 2 * n as usize {
            return Err(Error::parse(format, *ln, "M  CHG entry count does not match its pairs"));
        }

        for pair in pairs.chunks_exact(2) {
            let atom = usize::try_from(pair[0])
                .ok()
                .and_then(|idx| idx.checked_sub(1))
                .and_then(|idx| atoms.get_mut(idx))
                .ok_or_else(|| {
                    Error::parse(format, *ln, "M  CHG references atom outside declared range")
                })?;
            atom.formal_charge = i8::try_from(pair[1])
                .map_err(|_| Error::parse(format, *ln, "formal charge out of range"))?;
        }
    }
    Ok(())
}
