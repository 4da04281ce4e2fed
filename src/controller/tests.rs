#![allow(clippy::unwrap_used)]

use super::*;

/// Records everything the controller pushes, in call order.
#[derive(Default)]
struct RecordingView {
    rows: Vec<Transaction>,
    undo_enabled: Option<bool>,
    add_results: Vec<bool>,
    refreshes: usize,
}

impl TransactionView for RecordingView {
    fn display_transactions(&mut self, rows: &[Transaction]) {
        self.rows = rows.to_vec();
        self.refreshes += 1;
    }

    fn set_undo_enabled(&mut self, enabled: bool) {
        self.undo_enabled = Some(enabled);
    }

    fn report_add_result(&mut self, ok: bool) {
        self.add_results.push(ok);
    }
}

fn setup() -> Controller<RecordingView> {
    Controller::new(TransactionList::new(), RecordingView::default())
}

fn len(c: &Controller<RecordingView>) -> usize {
    c.model().len()
}

// ── Construction ──────────────────────────────────────────────

#[test]
fn test_new_pushes_initial_state() {
    let c = setup();
    assert_eq!(c.view().refreshes, 1);
    assert!(c.view().rows.is_empty());
    assert_eq!(c.view().undo_enabled, Some(false));
    assert!(!c.can_undo());
}

// ── add_transaction ───────────────────────────────────────────

#[test]
fn test_add_valid_transaction() {
    let mut c = setup();
    assert!(c.add_transaction(50.0, "food"));

    assert_eq!(len(&c), 1);
    let txn = &c.model().transactions()[0];
    assert_eq!(txn.amount(), 50.0);
    assert_eq!(txn.category(), "food");
    assert!((c.model().total_cost() - 50.0).abs() < 0.01);
}

#[test]
fn test_add_sets_can_undo_and_refreshes() {
    let mut c = setup();
    c.add_transaction(50.0, "food");

    assert!(c.can_undo());
    assert_eq!(c.view().undo_enabled, Some(true));
    assert_eq!(c.view().rows.len(), 1);
    assert_eq!(c.view().add_results, vec![true]);
    assert_eq!(
        c.undo_state(),
        &UndoState::PendingUndo(c.model().transactions()[0].clone())
    );
}

#[test]
fn test_add_invalid_amount_changes_nothing() {
    let mut c = setup();
    c.add_transaction(50.0, "food");
    let before = c.model().transactions().to_vec();

    assert!(!c.add_transaction(-21.0, "food"));
    assert!(!c.add_transaction(0.0, "food"));
    assert!(!c.add_transaction(f64::NAN, "food"));

    assert_eq!(c.model().transactions(), before.as_slice());
    assert_eq!(c.view().add_results, vec![true, false, false, false]);
}

#[test]
fn test_add_invalid_category_changes_nothing() {
    let mut c = setup();
    c.add_transaction(50.0, "food");

    assert!(!c.add_transaction(50.0, "mcdonald's"));
    assert!(!c.add_transaction(50.0, ""));
    assert!(!c.add_transaction(50.0, "Food"));

    assert_eq!(len(&c), 1);
    assert!((c.model().total_cost() - 50.0).abs() < 0.01);
}

#[test]
fn test_rejected_add_keeps_previous_undo() {
    let mut c = setup();
    c.add_transaction(50.0, "food");
    let pending = c.undo_state().clone();

    c.add_transaction(-1.0, "food");
    assert_eq!(c.undo_state(), &pending);
    assert!(c.can_undo());
}

#[test]
fn test_add_input_reports_which_field_failed() {
    let mut c = setup();
    assert_eq!(
        c.add_transaction_input("-5", "food"),
        Err(ValidationError::InvalidAmount)
    );
    assert_eq!(
        c.add_transaction_input("5", "rent"),
        Err(ValidationError::InvalidCategory)
    );
    assert!(c.model().is_empty());
    assert_eq!(c.view().add_results, vec![false, false]);

    c.add_transaction_input("5", "bills").unwrap();
    assert_eq!(len(&c), 1);
    assert_eq!(c.view().add_results, vec![false, false, true]);
}

#[test]
fn test_add_transaction_input_parses_text() {
    let mut c = setup();
    c.add_transaction_input(" 12.50 ", "travel").unwrap();
    assert_eq!(c.model().transactions()[0].amount(), 12.5);

    assert_eq!(
        c.add_transaction_input("twelve", "travel"),
        Err(ValidationError::InvalidAmount)
    );
    assert_eq!(len(&c), 1);
    assert_eq!(c.view().add_results, vec![true, false]);
}

// ── undo ──────────────────────────────────────────────────────

#[test]
fn test_undo_after_add() {
    let mut c = setup();
    c.add_transaction(10.0, "travel");
    c.add_transaction(50.0, "food");

    assert!(c.undo());
    assert_eq!(len(&c), 1);
    assert_eq!(c.model().transactions()[0].amount(), 10.0);
    assert!(!c.can_undo());
    assert_eq!(c.view().undo_enabled, Some(false));
    assert_eq!(c.view().rows.len(), 1);
}

#[test]
fn test_undo_is_single_step() {
    let mut c = setup();
    c.add_transaction(10.0, "travel");
    c.add_transaction(50.0, "food");

    assert!(c.undo());
    assert!(!c.undo());
    assert_eq!(len(&c), 1);
}

#[test]
fn test_undo_without_pending_is_noop() {
    let mut c = setup();
    let refreshes = c.view().refreshes;

    assert!(!c.undo());
    assert_eq!(len(&c), 0);
    assert_eq!(c.view().undo_enabled, Some(false));
    assert_eq!(c.view().refreshes, refreshes);
}

#[test]
fn test_undo_removes_only_one_of_identical_rows() {
    let mut c = setup();
    c.add_transaction(5.0, "food");
    c.add_transaction(5.0, "food");

    assert!(c.undo());
    assert_eq!(len(&c), 1);
    assert_eq!(c.model().transactions()[0].amount(), 5.0);
}

#[test]
fn test_undo_keeps_earlier_identical_row_in_place() {
    let mut c = setup();
    c.add_transaction(5.0, "food");
    c.add_transaction(3.0, "bills");
    let before = c.model().transactions().to_vec();

    c.add_transaction(5.0, "food");
    assert!(c.undo());

    assert_eq!(c.model().transactions(), before.as_slice());
    assert_eq!(c.view().rows, before);
}

// ── remove_transaction ────────────────────────────────────────

#[test]
fn test_remove_clears_undo() {
    let mut c = setup();
    c.add_transaction(10.0, "travel");
    c.add_transaction(50.0, "food");
    let first = c.model().transactions()[0].clone();

    assert!(c.remove_transaction(&first));
    assert_eq!(len(&c), 1);
    assert!(!c.can_undo());
    assert_eq!(c.view().undo_enabled, Some(false));
    assert!(!c.undo());
    assert_eq!(len(&c), 1);
}

#[test]
fn test_remove_missing_leaves_list_unchanged() {
    let mut c = setup();
    c.add_transaction(10.0, "travel");
    let before = c.model().transactions().to_vec();

    let stranger = Transaction::with_timestamp(99.0, "other", "01-01-2000 00:00");
    assert!(!c.remove_transaction(&stranger));
    assert_eq!(c.model().transactions(), before.as_slice());
}

#[test]
fn test_add_then_remove_round_trip() {
    let mut c = setup();
    c.add_transaction(10.0, "travel");
    c.add_transaction(20.0, "bills");
    let before = c.model().transactions().to_vec();

    c.add_transaction(30.0, "other");
    let txn = c.model().transactions()[2].clone();
    c.remove_transaction(&txn);

    assert_eq!(c.model().transactions(), before.as_slice());
}

// ── Filters ───────────────────────────────────────────────────

#[test]
fn test_apply_filter_without_filter_returns_all() {
    let mut c = setup();
    c.add_transaction(10.0, "travel");
    c.add_transaction(20.0, "food");
    assert_eq!(c.apply_filter(), c.model().transactions().to_vec());
}

#[test]
fn test_set_filter_does_not_refresh() {
    let mut c = setup();
    c.add_transaction(10.0, "travel");
    c.add_transaction(20.0, "food");
    let refreshes = c.view().refreshes;

    c.set_filter(TransactionFilter::Category("food".into()));
    assert_eq!(c.view().refreshes, refreshes);
    assert_eq!(c.view().rows.len(), 2);

    c.refresh();
    assert_eq!(c.view().rows.len(), 1);
    assert_eq!(c.view().rows[0].category(), "food");
}

#[test]
fn test_filter_by_amount() {
    let mut c = setup();
    c.add_transaction(50.0, "food");
    c.add_transaction(30.0, "travel");
    c.add_transaction(50.0, "bills");

    c.set_filter(TransactionFilter::Amount(50.0));
    let rows = c.apply_filter();
    let cats: Vec<&str> = rows.iter().map(|t| t.category()).collect();
    assert_eq!(cats, vec!["food", "bills"]);
}

#[test]
fn test_filter_by_category() {
    let mut c = setup();
    c.add_transaction(50.0, "food");
    c.add_transaction(30.0, "travel");
    c.add_transaction(15.0, "food");

    c.set_filter(TransactionFilter::Category("food".into()));
    let rows = c.apply_filter();
    let amounts: Vec<f64> = rows.iter().map(|t| t.amount()).collect();
    assert_eq!(amounts, vec![50.0, 15.0]);
}

#[test]
fn test_filter_applies_to_later_adds() {
    let mut c = setup();
    c.set_filter(TransactionFilter::Category("food".into()));
    c.add_transaction(30.0, "travel");
    c.add_transaction(15.0, "food");

    assert_eq!(c.view().rows.len(), 1);
    assert_eq!(len(&c), 2);
}

#[test]
fn test_filter_does_not_change_undo_state() {
    let mut c = setup();
    c.add_transaction(30.0, "travel");

    c.set_filter(TransactionFilter::Amount(1.0));
    let _ = c.apply_filter();
    c.refresh();
    assert!(c.can_undo());
    assert!(c.view().rows.is_empty());

    c.clear_filter();
    c.refresh();
    assert!(c.can_undo());
    assert_eq!(c.view().rows.len(), 1);
}

#[test]
fn test_clear_filter() {
    let mut c = setup();
    c.set_filter(TransactionFilter::Amount(1.0));
    c.clear_filter();
    assert_eq!(c.filter(), &TransactionFilter::None);
}

#[test]
fn test_undo_with_filter_active() {
    let mut c = setup();
    c.set_filter(TransactionFilter::Category("food".into()));
    c.add_transaction(15.0, "food");
    assert_eq!(c.view().rows.len(), 1);

    c.undo();
    assert!(c.view().rows.is_empty());
    assert_eq!(c.filter(), &TransactionFilter::Category("food".into()));
}

#[test]
fn test_view_mut_gives_access_to_display() {
    let mut c = setup();
    c.view_mut().add_results.clear();
    c.add_transaction(1.0, "other");
    assert_eq!(c.view().add_results, vec![true]);
}
