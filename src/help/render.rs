//! Plain-text help layout

use super::HelpPage;
use super::sections::HelpRow;

/// Layout constants for text help
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpStyle {
    /// Maximum line width
    pub width: usize,
    /// Indentation of section bodies
    pub indent: usize,
    /// Widest first column before descriptions move to their own line
    pub col_max: usize,
    /// Gap between the two columns
    pub col_spacing: usize,
}

impl Default for HelpStyle {
    #[inline]
    fn default() -> Self {
        Self {
            width: 78,
            indent: 2,
            col_max: 30,
            col_spacing: 2,
        }
    }
}

/// Render a help page as text
#[must_use]
#[inline]
pub fn render_text(page: &HelpPage, style: &HelpStyle) -> String {
    let mut out = format!("Usage: {}\n", page.usage);

    if !page.description.trim().is_empty() {
        out.push('\n');
        let pad = " ".repeat(style.indent);
        let text_width = style.width.saturating_sub(style.indent).max(10);
        for line in wrap_text(&page.description, text_width) {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("{pad}{line}\n"));
            }
        }
    }

    write_section(&mut out, "Options", &page.options, style);
    write_section(&mut out, "main commands", &page.main_commands, style);
    for section in &page.sections {
        write_section(
            &mut out,
            &format!("{} commands", section.name),
            &section.commands,
            style,
        );
    }

    out
}

/// Write a headed definition list; empty lists write nothing
fn write_section(out: &mut String, heading: &str, rows: &[HelpRow], style: &HelpStyle) {
    if rows.is_empty() {
        return;
    }
    out.push_str(&format!("\n{heading}:\n"));
    write_dl(out, rows, style);
}

/// Write two aligned columns, wrapping the second
#[inline]
pub fn write_dl(out: &mut String, rows: &[HelpRow], style: &HelpStyle) {
    let widest = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0);
    let first_col = widest.min(style.col_max) + style.col_spacing;
    let text_width = style.width.saturating_sub(first_col + 2).max(10);
    let indent = " ".repeat(style.indent);
    let continuation = " ".repeat(first_col + style.indent);

    for row in rows {
        out.push_str(&indent);
        out.push_str(&row.name);

        if row.help.trim().is_empty() {
            out.push('\n');
            continue;
        }

        let name_len = row.name.chars().count();
        if name_len <= first_col - style.col_spacing {
            out.push_str(&" ".repeat(first_col - name_len));
        } else {
            out.push('\n');
            out.push_str(&continuation);
        }

        let mut lines = wrap_text(&row.help, text_width).into_iter();
        out.push_str(&lines.next().unwrap_or_default());
        out.push('\n');
        for line in lines {
            if !line.is_empty() {
                out.push_str(&continuation);
                out.push_str(&line);
            }
            out.push('\n');
        }
    }
}

/// Greedy word wrap; blank lines separate paragraphs and are kept
#[must_use]
#[inline]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for (index, paragraph) in text.split("\n\n").enumerate() {
        if index > 0 {
            lines.push(String::new());
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(core::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_second_column() {
        let rows = vec![
            HelpRow::new("build", "Build an app"),
            HelpRow::new("inspect", "Inspect commands"),
        ];
        let mut out = String::new();
        write_dl(&mut out, &rows, &HelpStyle::default());

        assert_eq!(out, "  build    Build an app\n  inspect  Inspect commands\n");
    }

    #[test]
    fn long_names_push_help_to_next_line() {
        let long = "x".repeat(32);
        let rows = vec![HelpRow::new(long.as_str(), "Help")];
        let mut out = String::new();
        write_dl(&mut out, &rows, &HelpStyle::default());

        assert_eq!(out, format!("  {long}\n{}Help\n", " ".repeat(34)));
    }

    #[test]
    fn wraps_long_help() {
        let style = HelpStyle {
            width: 30,
            ..HelpStyle::default()
        };
        let rows = vec![HelpRow::new("cmd", "one two three four five six seven")];
        let mut out = String::new();
        write_dl(&mut out, &rows, &style);

        // first column is 5 wide, leaving 23 columns of text
        assert_eq!(out, "  cmd  one two three four five\n       six seven\n");
    }

    #[test]
    fn wrap_keeps_paragraph_breaks() {
        assert_eq!(
            wrap_text("first para\n\nsecond", 40),
            vec!["first para".to_owned(), String::new(), "second".to_owned()]
        );
        assert!(wrap_text("", 40).is_empty());
    }
}
