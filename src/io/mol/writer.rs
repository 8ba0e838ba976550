use crate::io::{error::Error, util};
use crate::model::molecule::Molecule;
use std::io::Write;

const PROGRAM_LINE: &str = "  rxnreg";

/// `M  CHG` lines hold at most eight atom/charge pairs.
const CHG_PER_LINE: usize = 8;

pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    write_block(&mut writer, molecule)
}

pub(crate) fn write_block<W: Write>(writer: &mut W, molecule: &Molecule) -> Result<(), Error> {
    writeln!(writer, "{}", first_line(&molecule.name))?;
    writeln!(writer, "{PROGRAM_LINE}")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{:>3}{:>3}  0  0  0  0  0  0  0  0999 V2000",
        molecule.atom_count(),
        molecule.bond_count()
    )?;

    for atom in &molecule.atoms {
        writeln!(
            writer,
            "{:>10.4}{:>10.4}{:>10.4} {:<3} 0{:>3}  0  0  0  0  0  0  0  0  0  0",
            atom.position[0],
            atom.position[1],
            atom.position[2],
            atom.element.symbol(),
            util::charge_to_ctfile(atom.formal_charge)
        )?;
    }

    for bond in &molecule.bonds {
        writeln!(
            writer,
            "{:>3}{:>3}{:>3}  0  0  0  0",
            bond.i + 1,
            bond.j + 1,
            util::bond_order_to_ctfile(bond.order)
        )?;
    }

    let charged: Vec<(usize, i8)> = molecule
        .atoms
        .iter()
        .enumerate()
        .filter(|(_, a)| a.formal_charge != 0)
        .map(|(i, a)| (i + 1, a.formal_charge))
        .collect();
    for chunk in charged.chunks(CHG_PER_LINE) {
        write!(writer, "M  CHG{:>3}", chunk.len())?;
        for (idx, charge) in chunk {
            write!(writer, " {idx:>3} {charge:>3}")?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "M  END")?;
    Ok(())
}

/// Header lines cannot span multiple lines.
pub(crate) fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
