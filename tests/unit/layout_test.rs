//! Unit tests for tables and wrapping

use termkit::layout::{column_widths, wrap_lines};
use termkit::{colorize, render_table, visual_width, wrap_with_terminal_width};

#[test]
fn table_with_header_has_five_lines() {
    let table = render_table(&[vec!["1", "22"]], &["A", "BB"]);
    insta::assert_snapshot!(table, @r###"
    +---+----+
    | A | BB |
    +---+----+
    | 1 | 22 |
    +---+----+
    "###);
}

#[test]
fn table_without_header_has_no_separator() {
    let table = render_table(&[vec!["x", "y"], vec!["long", "z"]], &[] as &[&str]);
    assert_eq!(
        table,
        "+------+---+\n| x    | y |\n| long | z |\n+------+---+\n"
    );
}

#[test]
fn empty_table_is_empty() {
    let rows: Vec<Vec<String>> = Vec::new();
    assert_eq!(render_table(&rows, &[] as &[&str]), "");
}

#[test]
fn header_only_table() {
    let rows: Vec<Vec<String>> = Vec::new();
    assert_eq!(render_table(&rows, &["id"]), "+----+\n| id |\n+----+\n");
}

#[test]
fn colored_cells_align_with_plain_cells() {
    let ok = colorize("ok", "green", None, None).unwrap();
    let rows = vec![vec![ok.clone(), "1".to_string()], vec!["fail".to_string(), "2".to_string()]];
    let table = render_table(&rows, &["status", "n"]);

    let widths: Vec<usize> = table.lines().map(|l| visual_width(Some(l))).collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{:?}", widths);
    assert!(table.contains(&format!("| {}     | 1 |", ok)));
}

#[test]
fn column_widths_take_the_widest_cell() {
    let rows = vec![vec!["a", "bbb"], vec!["cccc", "d"]];
    assert_eq!(column_widths(&rows), vec![4, 3]);
}

#[test]
fn wrapped_lines_fit_the_width() {
    let text = "the quick brown fox jumps over the lazy dog";
    for line in wrap_lines(text, 10) {
        assert!(visual_width(Some(&line)) <= 10, "{:?}", line);
    }
}

#[test]
fn hanging_indent_keeps_lines_within_max() {
    let out = wrap_with_terminal_width(Some("alpha beta gamma delta"), 12, 4, 80);
    assert_eq!(out, "alpha\n    beta\n    gamma\n    delta");
    for line in out.lines() {
        assert!(line.len() <= 12);
    }
}
