/// Greedy word wrap; words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        let fits = |line: &String| line.chars().count() + 1 + word.chars().count() <= width;
        if let Some(line) = lines.last_mut().filter(|l| fits(l)) {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(word.to_string());
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    match max_len {
        0 => String::new(),
        n => s.chars().take(n - 1).chain(std::iter::once('…')).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(wrap("failed to read RXN input", 12), vec!["failed to", "read RXN", "input"]);
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        assert_eq!(wrap("a supercalifragilistic b", 5), vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("ethanol", 10), "ethanol");
        assert_eq!(truncate("ethyl acetate", 8), "ethyl a…");
        assert_eq!(truncate("ethanol", 1), "…");
        assert_eq!(truncate("ethanol", 0), "");
        assert_eq!(truncate("β-alanine", 3), "β-…");
    }
}
