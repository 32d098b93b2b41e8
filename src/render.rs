//! Plain-text rendering of preference tables, pairings and proposal logs.

use std::fmt::{Display, Write};

use crate::types::{Matching, PreferenceTable, ProposalEvent, Response};

/// English ordinal for a 1-based position: 1st, 2nd, 3rd, 4th, 11th, 21st...
pub fn ordinal(position: usize) -> String {
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{position}{suffix}")
}

/// Render a preference table with aligned columns.
///
/// ```
/// use stable_match::render;
/// use stable_match::types::PreferenceTable;
///
/// let table: PreferenceTable<_, _> = [("x", ["a", "b"]), ("yy", ["b", "a"])]
///     .into_iter()
///     .collect();
///
/// assert_eq!(
///     render::preferences("Proposers", &table),
///     "Proposers\n   | 1st | 2nd\nx  | a   | b\nyy | b   | a\n"
/// );
/// ```
pub fn preferences<O: Display, T: Display>(title: &str, table: &PreferenceTable<O, T>) -> String {
    let owners: Vec<String> = table.owners().map(ToString::to_string).collect();
    let rows: Vec<Vec<String>> = table
        .iter()
        .map(|(_, prefs)| prefs.iter().map(ToString::to_string).collect())
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let name_width = owners.iter().map(String::len).max().unwrap_or(0);
    let headers: Vec<String> = (1..=columns).map(ordinal).collect();
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|row| row.get(c))
                .map(String::len)
                .chain(std::iter::once(headers[c].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    push_row(&mut out, "", &headers, name_width, &widths);
    for (owner, row) in owners.iter().zip(&rows) {
        push_row(&mut out, owner, row, name_width, &widths);
    }
    out
}

fn push_row(out: &mut String, name: &str, cells: &[String], name_width: usize, widths: &[usize]) {
    let mut line = format!("{name:<name_width$}");
    for (cell, &width) in cells.iter().zip(widths) {
        let _ = write!(line, " | {cell:<width$}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render `(proposer, receiver)` pairs, one per line.
pub fn pairs<'a, P, R, I>(title: &str, pairs: I) -> String
where
    P: Display + 'a,
    R: Display + 'a,
    I: IntoIterator<Item = (&'a P, &'a R)>,
{
    let lines: Vec<(String, String)> = pairs
        .into_iter()
        .map(|(p, r)| (p.to_string(), r.to_string()))
        .collect();
    let width = lines.iter().map(|(p, _)| p.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for (p, r) in &lines {
        let _ = writeln!(out, "{p:<width$} - {r}");
    }
    out
}

/// Render the pairs of a matching.
pub fn matching<P: Display, R: Display>(title: &str, matching: &Matching<P, R>) -> String {
    pairs(title, matching.iter())
}

/// Render a proposal log, one proposal per line.
pub fn events<P: Display, R: Display>(events: &[ProposalEvent<P, R>]) -> String {
    let mut out = String::new();
    for (step, event) in events.iter().enumerate() {
        let _ = write!(out, "{:>3}. {} -> {}: ", step + 1, event.proposer, event.receiver);
        let _ = match &event.response {
            Response::Accepted => writeln!(out, "accepted"),
            Response::Replaced { displaced } => writeln!(out, "accepted, {displaced} freed"),
            Response::Rejected => writeln!(out, "rejected"),
        };
    }
    out
}
