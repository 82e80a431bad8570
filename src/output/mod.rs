//! Output formatting for CLI display
//!
//! Renders picker panes, selection diffs and match lists. Every formatter
//! takes a `quiet` flag that drops decoration for use in scripts.

use colored::Colorize;

use crate::label::Label;
use crate::present::Presentable;
use crate::selection::LabelDiff;

/// Parse a `rrggbb` colour, ignoring a leading `#`
fn parse_hex(colour: &str) -> Option<(u8, u8, u8)> {
    let hex = colour.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Coloured swatch for a label
#[must_use]
pub fn swatch(label: &Label) -> String {
    match parse_hex(label.colour()) {
        Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        None => "●".to_string(),
    }
}

/// One label line of a picker pane
///
/// Selected labels get a tick, removed ones are struck through, faded ones
/// dimmed and the highlighted one underlined.
#[must_use]
pub fn label_item(item: &Presentable<Label>, quiet: bool) -> String {
    let name = item.value.full_name();
    if quiet {
        return name.to_string();
    }

    let marker = if item.selected { "✓" } else { " " };
    let mut styled = name.normal();
    if item.removed {
        styled = styled.strikethrough();
    }
    if item.faded {
        styled = styled.dimmed();
    }
    if item.highlighted {
        styled = styled.underline().bold();
    }

    format!("  {} {} {styled}", marker.green(), swatch(&item.value))
}

/// A whole pane, one label per line
#[must_use]
pub fn label_pane(items: &[Presentable<Label>], quiet: bool) -> String {
    items
        .iter()
        .map(|item| label_item(item, quiet))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Changes a confirmed selection applies to the issue
#[must_use]
pub fn diff_lines(diff: &LabelDiff, quiet: bool) -> Vec<String> {
    let added = diff.added.iter().map(|name| {
        if quiet {
            format!("+{name}")
        } else {
            format!("  {} {}", "+".green().bold(), name.green())
        }
    });
    let removed = diff.removed.iter().map(|name| {
        if quiet {
            format!("-{name}")
        } else {
            format!("  {} {}", "-".red().bold(), name.red())
        }
    });
    added.chain(removed).collect()
}

/// Label names separated for display
#[must_use]
pub fn label_list<'a>(names: impl IntoIterator<Item = &'a String>, quiet: bool) -> String {
    let names: Vec<&str> = names.into_iter().map(String::as_str).collect();
    if quiet {
        names.join("\n")
    } else if names.is_empty() {
        "(no labels)".dimmed().to_string()
    } else {
        names.join(", ")
    }
}
