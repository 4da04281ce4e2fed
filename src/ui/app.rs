use crate::controller::Controller;
use crate::models::{Transaction, TransactionList};
use crate::ui::util::{format_amount, TableCursor};
use crate::ui::view::TableView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    RemoveTransaction { txn: Transaction },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) controller: Controller<TableView>,
    pub(crate) cursor: TableCursor,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            controller: Controller::new(TransactionList::new(), TableView::default()),
            cursor: TableCursor::default(),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Rows currently on screen, as last pushed by the controller.
    pub(crate) fn rows(&self) -> &[Transaction] {
        &self.controller.view().rows
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.rows().get(self.cursor.selected)
    }

    /// Keep the cursor on a real row after the visible list shrinks.
    pub(crate) fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        self.cursor.clamp(len);
    }

    /// Ask for y/N before running `action`.
    pub(crate) fn request_confirm(&mut self, action: PendingAction, message: String) {
        self.pending_action = Some(action);
        self.confirm_message = message;
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn confirm_pending(&mut self) {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::RemoveTransaction { txn } => {
                    if self.controller.remove_transaction(&txn) {
                        self.set_status(format!(
                            "Removed: {} {}",
                            format_amount(txn.amount()),
                            txn.category()
                        ));
                    } else {
                        self.set_status("Transaction no longer in the list");
                    }
                    self.clamp_cursor();
                }
            }
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
