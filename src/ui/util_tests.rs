#![allow(clippy::unwrap_used)]

use super::util::*;

fn cursor(selected: usize, offset: usize) -> TableCursor {
    TableCursor { selected, offset }
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_two_decimals() {
    assert_eq!(format_amount(5.0), "5.00");
    assert_eq!(format_amount(12.5), "12.50");
    assert_eq!(format_amount(0.1 + 0.2), "0.30");
}

#[test]
fn test_format_amount_has_no_symbol_or_grouping() {
    assert_eq!(format_amount(1234567.891), "1234567.89");
}

#[test]
fn test_format_amount_reads_back_as_number() {
    let cell = format_amount(42.25);
    assert_eq!(cell.parse::<f64>().unwrap(), 42.25);
}

// ── TableCursor ───────────────────────────────────────────────

#[test]
fn test_down_scrolls_once_past_the_page() {
    let mut c = cursor(2, 0);
    c.down(10, 3);
    assert_eq!(c, cursor(3, 1));
}

#[test]
fn test_down_stays_on_last_row() {
    let mut c = cursor(4, 2);
    c.down(5, 3);
    assert_eq!(c, cursor(4, 2));
}

#[test]
fn test_up_pulls_offset_along() {
    let mut c = cursor(3, 3);
    c.up();
    assert_eq!(c, cursor(2, 2));
    c.top();
    c.up();
    assert_eq!(c, cursor(0, 0));
}

#[test]
fn test_bottom_shows_the_newest_row() {
    let mut c = TableCursor::default();
    c.bottom(10, 4);
    assert_eq!(c, cursor(9, 6));
    c.bottom(0, 4);
    assert_eq!(c.selected, 0);
}

#[test]
fn test_select_above_the_page_moves_offset_up() {
    let mut c = cursor(9, 6);
    c.select(1, 4);
    assert_eq!(c, cursor(1, 1));
}

#[test]
fn test_clamp_after_rows_removed() {
    let mut c = cursor(9, 6);
    c.clamp(3);
    assert_eq!(c, cursor(2, 2));
    c.clamp(0);
    assert_eq!(c, cursor(0, 0));
}
