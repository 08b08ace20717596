//! Text pagination for terminal display.
//!
//! Reflows arbitrary text into fixed-width lines by greedy word packing.

/// Default terminal width in columns.
pub const DEFAULT_WIDTH: usize = 80;

/// Reflow `text` into lines of at most [`DEFAULT_WIDTH`] columns, each
/// left-padded with `indent` spaces.
pub fn paginate(text: &str, indent: usize) -> String {
    paginate_width(text, DEFAULT_WIDTH, indent)
}

/// Reflow `text` into lines such that `indent + line length <= width`.
///
/// Words are packed greedily. A line that has no words yet always accepts
/// the next word, so a single word longer than the width occupies its own
/// line unmodified. Every line, the first included, gets the indent.
/// Empty or whitespace-only input yields an empty string.
pub fn paginate_width(text: &str, width: usize, indent: usize) -> String {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let budget = width.saturating_sub(indent);
    let pad = " ".repeat(indent);

    let mut lines = Vec::new();
    let mut current = first.to_string();

    for word in words {
        if current.len() + 1 + word.len() > budget {
            lines.push(current);
            current = word.to_string();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    lines.push(current);

    lines
        .iter()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(paginate("", 0), "");
        assert_eq!(paginate("   \n\t ", 0), "");
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(paginate("hello world", 0), "hello world");
    }

    #[test]
    fn lines_respect_width_bound() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(10);
        let out = paginate_width(&text, 40, 0);
        for line in out.lines() {
            assert!(line.len() <= 40, "line too long: {line:?}");
        }
    }

    #[test]
    fn width_bound_includes_indent() {
        let text = "one two three four five six seven eight nine ten".repeat(3);
        let out = paginate_width(&text, 40, 8);
        for line in out.lines() {
            assert!(line.len() <= 40, "line too long: {line:?}");
            assert!(line.starts_with("        "), "missing indent: {line:?}");
        }
    }

    #[test]
    fn overlong_word_occupies_its_own_line() {
        let long = "a".repeat(100);
        let out = paginate_width(&format!("start {long} end"), 40, 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["start", long.as_str(), "end"]);
    }

    #[test]
    fn first_line_is_indented_like_the_rest() {
        let out = paginate_width("alpha beta gamma delta epsilon zeta eta", 20, 4);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.starts_with("    ")));
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(paginate("a\n\nb\t c", 0), "a b c");
    }
}
