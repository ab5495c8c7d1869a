//! ASCII table rendering.

use crate::width::{pad_right, visual_width};

/// Render rows (and an optional header) as an ASCII table.
///
/// Column widths come from the widest cell in each column, measured
/// without color codes, so colored cells line up with plain ones. The
/// border is built from the first row; rows with a different number of
/// cells are rendered as they are and will not line up.
///
/// ```
/// let table = termkit::layout::render_table(
///     &[vec!["1", "22"]],
///     &["A", "BB"],
/// );
/// assert_eq!(
///     table,
///     "+---+----+\n| A | BB |\n+---+----+\n| 1 | 22 |\n+---+----+\n"
/// );
/// ```
pub fn render_table<R, S, H>(rows: &[R], header: &[H]) -> String
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    H: AsRef<str>,
{
    let has_header = !header.is_empty();

    let mut table_rows: Vec<Vec<&str>> = Vec::with_capacity(rows.len() + 1);
    if has_header {
        table_rows.push(header.iter().map(AsRef::as_ref).collect());
    }
    for row in rows {
        table_rows.push(row.as_ref().iter().map(AsRef::as_ref).collect());
    }

    if table_rows.is_empty() {
        return String::new();
    }

    let widths = column_widths(&table_rows);
    let padded: Vec<Vec<String>> = table_rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| pad_right(cell, *width))
                .collect()
        })
        .collect();

    let border = border_line(&padded[0]);
    let last = padded.len() - 1;
    let mut table = String::new();

    for (i, row) in padded.iter().enumerate() {
        if i == 0 {
            table.push_str(&border);
            table.push('\n');
        }

        table.push_str("| ");
        table.push_str(&row.join(" | "));
        table.push_str(" |\n");

        if (i == 0 && has_header) || i == last {
            table.push_str(&border);
            table.push('\n');
        }
    }

    table
}

/// Widest visual width seen in each column, across all rows.
pub fn column_widths<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            let width = visual_width(Some(cell.as_ref()));
            match widths.get_mut(column) {
                Some(max) => *max = (*max).max(width),
                None => widths.push(width),
            }
        }
    }
    widths
}

fn border_line(first_row: &[String]) -> String {
    let mut border = String::from("+");
    for cell in first_row {
        border.push_str(&"-".repeat(visual_width(Some(cell)) + 2));
        border.push('+');
    }
    border
}
