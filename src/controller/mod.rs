use log::{debug, info};

use crate::filter::TransactionFilter;
use crate::models::{Transaction, TransactionList};
use crate::validation::{self, ValidationError};

/// Everything the controller pushes out to whatever is drawing the table.
pub(crate) trait TransactionView {
    /// Rows to show, already filtered.
    fn display_transactions(&mut self, rows: &[Transaction]);
    fn set_undo_enabled(&mut self, enabled: bool);
    /// Outcome of the latest add attempt, for inline feedback.
    fn report_add_result(&mut self, ok: bool);
}

/// The single reversible action, if there is one.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum UndoState {
    #[default]
    NoPendingUndo,
    PendingUndo(Transaction),
}

pub(crate) struct Controller<V: TransactionView> {
    model: TransactionList,
    view: V,
    filter: TransactionFilter,
    undo: UndoState,
}

impl<V: TransactionView> Controller<V> {
    pub(crate) fn new(model: TransactionList, view: V) -> Self {
        let mut controller = Self {
            model,
            view,
            filter: TransactionFilter::None,
            undo: UndoState::NoPendingUndo,
        };
        controller.refresh();
        controller
    }

    /// Validate, append and make undoable. Returns `false` without touching
    /// the list when either field is invalid.
    pub(crate) fn add_transaction(&mut self, amount: f64, category: &str) -> bool {
        if let Err(e) = validation::validate(amount, category) {
            debug!("rejected transaction ({amount}, {category:?}): {e}");
            self.view.report_add_result(false);
            return false;
        }

        let txn = Transaction::new(amount, category);
        info!("added transaction {amount} {category} at {}", txn.timestamp());
        self.model.add_transaction(txn.clone());
        self.undo = UndoState::PendingUndo(txn);
        self.refresh();
        self.view.report_add_result(true);
        true
    }

    /// Add from the raw amount text the user typed, saying which field was
    /// rejected.
    pub(crate) fn add_transaction_input(
        &mut self,
        raw_amount: &str,
        category: &str,
    ) -> Result<(), ValidationError> {
        let checked = validation::parse_amount(raw_amount)
            .and_then(|amount| validation::validate(amount, category).map(|()| amount));
        match checked {
            Ok(amount) => {
                self.add_transaction(amount, category);
                Ok(())
            }
            Err(e) => {
                debug!("rejected input ({raw_amount:?}, {category:?}): {e}");
                self.view.report_add_result(false);
                Err(e)
            }
        }
    }

    /// Remove the first transaction equal to `txn`. Removal is never undoable,
    /// so any pending undo is dropped even if nothing matched.
    pub(crate) fn remove_transaction(&mut self, txn: &Transaction) -> bool {
        let removed = self.model.remove_transaction(txn);
        if removed {
            info!("removed transaction {} {}", txn.amount(), txn.category());
        } else {
            debug!("remove: no matching transaction");
        }
        self.undo = UndoState::NoPendingUndo;
        self.refresh();
        removed
    }

    /// Take back the last add. Returns `false` when there is nothing to undo.
    pub(crate) fn undo(&mut self) -> bool {
        match std::mem::take(&mut self.undo) {
            UndoState::PendingUndo(txn) => {
                // The pending add is always the newest row
                self.model.remove_last_match(&txn);
                info!("undid transaction {} {}", txn.amount(), txn.category());
                self.refresh();
                true
            }
            UndoState::NoPendingUndo => {
                debug!("undo: nothing pending");
                false
            }
        }
    }

    /// Replace the active filter. Call [`refresh`](Self::refresh) to show it.
    pub(crate) fn set_filter(&mut self, filter: TransactionFilter) {
        debug!("filter set to {filter}");
        self.filter = filter;
    }

    pub(crate) fn clear_filter(&mut self) {
        self.set_filter(TransactionFilter::None);
    }

    pub(crate) fn apply_filter(&self) -> Vec<Transaction> {
        self.filter.apply(self.model.transactions())
    }

    pub(crate) fn refresh(&mut self) {
        let rows = self.apply_filter();
        self.view.display_transactions(&rows);
        self.view.set_undo_enabled(self.can_undo());
    }

    pub(crate) fn can_undo(&self) -> bool {
        matches!(self.undo, UndoState::PendingUndo(_))
    }

    pub(crate) fn undo_state(&self) -> &UndoState {
        &self.undo
    }

    pub(crate) fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    pub(crate) fn model(&self) -> &TransactionList {
        &self.model
    }

    pub(crate) fn view(&self) -> &V {
        &self.view
    }

    pub(crate) fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

#[cfg(test)]
mod tests;
