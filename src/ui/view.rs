use crate::controller::TransactionView;
use crate::models::{total_cost, Transaction};

/// What the controller last pushed; the TUI draws it and the CLI prints it.
#[derive(Debug, Default)]
pub(crate) struct TableView {
    pub(crate) rows: Vec<Transaction>,
    pub(crate) undo_enabled: bool,
    /// `None` until the first add attempt, and again after the feedback is consumed.
    pub(crate) last_add: Option<bool>,
}

impl TableView {
    pub(crate) fn total(&self) -> f64 {
        total_cost(&self.rows)
    }
}

impl TransactionView for TableView {
    fn display_transactions(&mut self, rows: &[Transaction]) {
        self.rows = rows.to_vec();
    }

    fn set_undo_enabled(&mut self, enabled: bool) {
        self.undo_enabled = enabled;
    }

    fn report_add_result(&mut self, ok: bool) {
        self.last_add = Some(ok);
    }
}
