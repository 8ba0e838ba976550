use std::io::Write;

use rxn_registry::{DatabaseReaction, MoleculeCount};

use crate::util::convert::{registry_id_display, yield_display};
use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_reaction_summary(out: &mut impl Write, record: &DatabaseReaction) {
    let reaction = record.reaction();

    let mut rows = vec![
        ("Name", display_or_dash(&reaction.name)),
        ("Molecules", reaction.molecule_count().to_string()),
        ("Reactants", reaction.reactant_count().to_string()),
        ("Products", reaction.product_count().to_string()),
    ];
    if reaction.agent_count() > 0 {
        rows.push(("Agents", reaction.agent_count().to_string()));
    }
    rows.push((
        "Registry ID",
        record
            .reaction_registry_id()
            .map_or_else(|| "not set".to_string(), |id| id.to_string()),
    ));
    rows.push(("Yield", yield_display(record.yield_percent())));

    if let Some(ids) = record.molecule_registry_ids()
        && ids.len() != reaction.molecule_count()
    {
        rows.push(("Registry Slots", ids.len().to_string()));
    }

    print_kv_table(out, "Reaction Summary", &rows);
}

pub fn print_participants(out: &mut impl Write, record: &DatabaseReaction) {
    let reaction = record.reaction();
    if reaction.molecule_count() == 0 {
        return;
    }

    let slot_w = 4usize;
    let role_w = 8usize;
    let formula_w = 10usize;
    let id_w = 9usize;
    let sep_overhead = 16;
    let name_w = SAFE_TABLE_WIDTH.saturating_sub(slot_w + role_w + formula_w + id_w + sep_overhead);

    let line = |l: char, m: char, r: char| {
        format!(
            "{INDENT}{l}{}{m}{}{m}{}{m}{}{m}{}{r}",
            "─".repeat(slot_w + 2),
            "─".repeat(role_w + 2),
            "─".repeat(name_w + 2),
            "─".repeat(formula_w + 2),
            "─".repeat(id_w + 2),
        )
    };

    let _ = writeln!(out, "{INDENT}┌─ Participants ─┐");
    let _ = writeln!(out, "{}", line('┌', '┬', '┐'));
    let _ = writeln!(
        out,
        "{INDENT}│ {:>slot_w$} │ {:<role_w$} │ {:<name_w$} │ {:<formula_w$} │ {:>id_w$} │",
        "Slot", "Role", "Name", "Formula", "Registry"
    );
    let _ = writeln!(out, "{}", line('├', '┼', '┤'));

    for (slot, participant) in reaction.participants.iter().enumerate() {
        let _ = writeln!(
            out,
            "{INDENT}│ {:>slot_w$} │ {:<role_w$} │ {:<name_w$} │ {:<formula_w$} │ {:>id_w$} │",
            slot,
            participant.role.to_string(),
            truncate(&display_or_dash(&participant.molecule.name), name_w),
            truncate(&participant.molecule.formula(), formula_w),
            truncate(&registry_id_display(record.molecule_registry_id(slot)), id_w),
        );
    }

    let _ = writeln!(out, "{}", line('└', '┴', '┘'));
    let _ = writeln!(out);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);
    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(
        out,
        "{INDENT}┌─ {} ─┐",
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{INDENT}┌{k_line}┬{v_line}┐");
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }
    let _ = writeln!(out, "{INDENT}└{k_line}┴{v_line}┘");
    let _ = writeln!(out);
}

fn display_or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        "—".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rxn_registry::{Atom, Element, Molecule, Reaction};

    fn record() -> DatabaseReaction {
        let mut water = Molecule::named("water");
        water.atoms.push(Atom::new(Element::O, [0.0; 3]));
        water.atoms.push(Atom::new(Element::H, [0.0; 3]));
        water.atoms.push(Atom::new(Element::H, [0.0; 3]));

        let mut reaction = Reaction::named("hydration");
        reaction.add_reactant(Molecule::named("ethene"));
        reaction.add_reactant(water);
        reaction.add_product(Molecule::named("ethanol"));
        DatabaseReaction::new(reaction)
    }

    fn render(f: impl Fn(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_reports_unset_fields() {
        let record = record();
        let text = render(|out| print_reaction_summary(out, &record));
        assert!(text.contains("hydration"));
        assert!(text.contains("not set"));
        assert!(text.contains("n/a"));
        assert!(!text.contains("Registry Slots"));
    }

    #[test]
    fn summary_reports_stale_slot_count() {
        let mut record = record();
        record.set_reaction_registry_id(12);
        record.set_reaction_yield(90);
        record.set_molecule_registry_id(0, 1).unwrap();
        record.reaction_mut().add_product(Molecule::named("heat"));
        let text = render(|out| print_reaction_summary(out, &record));
        assert!(text.contains("12"));
        assert!(text.contains("90%"));
        assert!(text.contains("Registry Slots"));
    }

    #[test]
    fn participants_show_registry_ids() {
        let mut record = record();
        record.set_molecule_registry_id(1, 4711).unwrap();
        let text = render(|out| print_participants(out, &record));
        let rows: Vec<&str> = text.lines().filter(|l| l.contains("│")).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[2].contains("H2O") && rows[2].contains("4711"));
        assert!(rows[1].trim_end().ends_with("0 │"));
    }

    #[test]
    fn participants_without_allocation_show_dashes() {
        let record = record();
        let text = render(|out| print_participants(out, &record));
        assert_eq!(text.matches("—").count(), 3);
    }
}
