//! Tests for the table component.

use super::border::{ASCII, NONE, ROUNDED, SIMPLE};
use super::*;
use std::collections::{BTreeMap, HashMap};

type Row = BTreeMap<String, String>;

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn people() -> Vec<Row> {
    vec![
        row(&[("name", "Alice"), ("city", "Paris")]),
        row(&[("name", "Bob"), ("city", "Oslo")]),
        row(&[("name", "Christina"), ("city", "Rome")]),
    ]
}

fn columns() -> Vec<Column<Row>> {
    vec![Column::new("name", "Name"), Column::new("city", "City")]
}

fn table(selectable: bool) -> Model<Row> {
    new(Options::default()
        .with_columns(columns())
        .with_rows(people())
        .with_selectable(selectable))
}

#[test]
fn test_new_default_values() {
    let t: Model<Row> = new(Options::default());
    assert!(t.columns().is_empty());
    assert!(t.rows().is_empty());
    assert_eq!(t.border, border::border("single").unwrap());
    assert!(t.show_header);
    assert!(t.show_header_separator);
    assert_eq!(t.padding, 1);
    assert!(!t.selectable());
    assert_eq!(t.selected_index(), None);
    assert_eq!(t.cursor, ">");
}

#[test]
fn test_single_border_render_contains_glyphs() {
    let t = new(Options::default()
        .with_columns(vec![Column::new("name", "Name")])
        .with_rows(vec![row(&[("name", "Alice")])]));
    let out = t.view();
    for needle in ["┌", "└", "│", "Name", "Alice"] {
        assert!(out.contains(needle), "missing {needle} in\n{out}");
    }
}

#[test]
fn test_full_render() {
    let expected = "\
┌───────────┬───────┐
│ Name      │ City  │
├───────────┼───────┤
│ Alice     │ Paris │
│ Bob       │ Oslo  │
│ Christina │ Rome  │
└───────────┴───────┘";
    assert_eq!(table(false).view(), expected);
}

#[test]
fn test_column_widths_from_title_and_cells() {
    assert_eq!(table(false).column_widths(), [9, 5]);
}

#[test]
fn test_missing_cell_renders_empty() {
    let t = new(Options::default()
        .with_columns(columns())
        .with_rows(vec![row(&[("name", "Zed")])]));
    assert_eq!(t.column_widths(), [4, 4]);
    assert!(t.view().contains("│ Zed  │      │"));
}

#[test]
fn test_fixed_width_truncates() {
    let cols = vec![Column::new("name", "Name").with_width(3), Column::new("city", "City")];
    let t = new(Options::default().with_columns(cols).with_rows(people()));
    assert_eq!(t.column_widths(), [3, 5]);
    assert!(t.view().contains("│ Chr │ Rome  │"));
    assert!(t.view().contains("│ Nam │ City  │"));
}

#[test]
fn test_min_and_max_width_clamp() {
    let cols = vec![
        Column::new("name", "Name").with_max_width(6),
        Column::new("city", "City").with_min_width(8),
    ];
    let t = new(Options::default().with_columns(cols).with_rows(people()));
    assert_eq!(t.column_widths(), [6, 8]);
    assert!(t.view().contains("│ Christ │ Rome     │"));
}

#[test]
fn test_width_grows_with_content() {
    let t = table(false);
    let before = t.column_widths()[1];
    let mut rows = people();
    rows[1].insert("city".to_string(), "Saint Petersburg".to_string());
    let t = t.set_rows(rows);
    assert!(t.column_widths()[1] >= before);
    assert_eq!(t.column_widths()[1], 16);
}

#[test]
fn test_widths_recomputed_when_rows_shrink() {
    let t = table(false).set_rows(vec![row(&[("name", "Al"), ("city", "X")])]);
    assert_eq!(t.column_widths(), [4, 4]);
}

#[test]
fn test_alignment() {
    let cols = vec![
        Column::new("name", "Name").with_align(Align::Right),
        Column::new("city", "City").with_align(Align::Center),
    ];
    let t = new(Options::default()
        .with_columns(cols)
        .with_rows(vec![row(&[("name", "Bo"), ("city", "Oslo!")])]));
    // name width 4, city width 5
    assert!(t.view().contains("│   Bo │ Oslo! │"));
    assert!(t.view().contains("│ Name │ City  │"));
}

#[test]
fn test_center_favors_left() {
    assert_eq!(Align::Center.fit("a", 4), " a  ");
    assert_eq!(Align::Center.fit("ab", 4), " ab ");
    assert_eq!(Align::Center.fit("", 3), "   ");
}

#[test]
fn test_custom_format_receives_value_and_row() {
    let cols = vec![
        Column::new("name", "Name"),
        Column::new("city", "Where").with_format(|value: Option<&String>, row: &Row| {
            format!(
                "{}/{}",
                value.map(String::as_str).unwrap_or("?"),
                row.get("name").map(String::as_str).unwrap_or("")
            )
        }),
    ];
    let t = new(Options::default()
        .with_columns(cols)
        .with_rows(vec![row(&[("name", "Al"), ("city", "Oz")]), row(&[("name", "Bo")])]));
    assert_eq!(t.columns()[1].render_cell(&t.rows()[0]), "Oz/Al");
    assert_eq!(t.columns()[1].render_cell(&t.rows()[1]), "?/Bo");
    assert_eq!(t.column_widths(), [4, 5]);
}

#[test]
fn test_numeric_values_display() {
    let rows = vec![HashMap::from([("n".to_string(), 1234)])];
    let t = new(Options::default()
        .with_columns(vec![Column::new("n", "N").with_align(Align::Right)])
        .with_rows(rows));
    assert!(t.view().contains("│ 1234 │"));
}

#[test]
fn test_header_toggles() {
    let no_sep = new(Options::default()
        .with_columns(columns())
        .with_rows(people())
        .with_header_separator(false));
    assert!(!no_sep.view().contains('├'));
    assert!(no_sep.view().contains("Name"));

    let no_header = new(Options::default()
        .with_columns(columns())
        .with_rows(people())
        .with_header(false));
    assert!(!no_header.view().contains("Name"));
    assert!(!no_header.view().contains('├'));
    assert_eq!(no_header.view().lines().count(), 5);
}

#[test]
fn test_borderless_skips_rules() {
    let t = new(Options::default()
        .with_columns(vec![Column::new("name", "Name")])
        .with_rows(vec![row(&[("name", "Al")])])
        .with_border(NONE.clone()));
    assert_eq!(t.view(), " Name \n Al   ");
}

#[test]
fn test_simple_border() {
    let t = new(Options::default()
        .with_columns(columns())
        .with_rows(vec![row(&[("name", "Al"), ("city", "Oz")])])
        .with_border(SIMPLE.clone())
        .with_padding(0));
    assert_eq!(t.view(), "Name City\n──── ────\nAl   Oz  ");
}

#[test]
fn test_rounded_and_ascii_corners() {
    let t = table(false).set_rows(Vec::new());
    let rounded = Model { border: ROUNDED.clone(), ..t.clone() };
    assert!(rounded.view().starts_with('╭'));
    assert!(rounded.view().ends_with('╯'));

    let ascii = Model { border: ASCII.clone(), ..t };
    assert_eq!(
        ascii.view(),
        "+------+------+\n| Name | City |\n+------+------+\n+------+------+"
    );
}

#[test]
fn test_padding() {
    let t = new(Options::default()
        .with_columns(vec![Column::new("name", "Name")])
        .with_rows(vec![row(&[("name", "Al")])])
        .with_padding(2));
    assert!(t.view().starts_with("┌────────┐"));
    assert!(t.view().contains("│  Al    │"));
}

#[test]
fn test_selectable_defaults_to_first_row() {
    let t = table(true);
    assert_eq!(t.selected_index(), Some(0));
    assert_eq!(
        t.selected_row().and_then(|r| r.get("name")).map(String::as_str),
        Some("Alice")
    );
}

#[test]
fn test_selection_wraps() {
    let t = table(true);
    let t = t.move_up();
    assert_eq!(t.selected_index(), Some(2));
    let t = t.move_down();
    assert_eq!(t.selected_index(), Some(0));
    let t = t.move_down().move_down();
    assert_eq!(t.selected_index(), Some(2));
}

#[test]
fn test_selection_noop_when_not_selectable() {
    let t = table(false);
    assert_eq!(t.clone().move_down(), t);
    assert_eq!(t.clone().move_up(), t);
    assert_eq!(t.clone().select(1), t);
    assert!(t.selected_row().is_none());
}

#[test]
fn test_selection_noop_when_empty() {
    let t = table(true).set_rows(Vec::new());
    assert_eq!(t.selected_index(), None);
    assert_eq!(t.clone().move_down(), t);
    assert_eq!(t.clone().move_up(), t);
}

#[test]
fn test_select_fails_closed() {
    let t = table(true);
    assert_eq!(t.clone().select(3), t);
    assert_eq!(t.select(2).selected_index(), Some(2));
}

#[test]
fn test_set_rows_clamps_selection() {
    let t = table(true).select(2).set_rows(vec![row(&[("name", "Solo")])]);
    assert_eq!(t.selected_index(), Some(0));

    let t = t.set_rows(Vec::new()).set_rows(people());
    assert_eq!(t.selected_index(), Some(0));
}

#[test]
fn test_initial_selected_is_clamped() {
    let t = new(Options::default()
        .with_columns(columns())
        .with_rows(people())
        .with_selectable(true)
        .with_selected(10));
    assert_eq!(t.selected_index(), Some(2));
}

#[test]
fn test_selectable_render_prefix() {
    let t = new(Options::default()
        .with_columns(vec![Column::new("name", "Name")])
        .with_rows(vec![row(&[("name", "Al")]), row(&[("name", "Bo")])])
        .with_selectable(true))
    .move_down();
    let expected = "\
  ┌──────┐
  │ Name │
  ├──────┤
  │ Al   │
> │ Bo   │
  └──────┘";
    assert_eq!(t.view(), expected);
}

#[test]
fn test_set_columns_recomputes() {
    let t = table(false).set_columns(vec![Column::new("city", "Town")]);
    assert_eq!(t.column_widths(), [5]);
    assert!(!t.view().contains("Alice"));
}

#[test]
fn test_transitions_leave_original_untouched() {
    let original = table(true);
    let moved = original.clone().move_down();
    assert_eq!(original.selected_index(), Some(0));
    assert_eq!(moved.selected_index(), Some(1));
}
