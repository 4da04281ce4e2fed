/// Amounts are shown as plain numbers with two decimals, no symbol or
/// grouping, so a cell reads back as the value that was entered.
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Selected row of the transaction table and the first row drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TableCursor {
    pub(crate) selected: usize,
    pub(crate) offset: usize,
}

impl TableCursor {
    pub(crate) fn down(&mut self, rows: usize, page: usize) {
        if self.selected + 1 < rows {
            self.selected += 1;
            self.reveal(page);
        }
    }

    pub(crate) fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.offset = self.offset.min(self.selected);
    }

    pub(crate) fn top(&mut self) {
        *self = Self::default();
    }

    /// Jump to the newest row.
    pub(crate) fn bottom(&mut self, rows: usize, page: usize) {
        self.select(rows.saturating_sub(1), page);
    }

    pub(crate) fn select(&mut self, row: usize, page: usize) {
        self.selected = row;
        self.offset = self.offset.min(row);
        self.reveal(page);
    }

    /// Pull the cursor back onto a real row after the table shrinks.
    pub(crate) fn clamp(&mut self, rows: usize) {
        self.selected = self.selected.min(rows.saturating_sub(1));
        self.offset = self.offset.min(self.selected);
    }

    fn reveal(&mut self, page: usize) {
        let page = page.max(1);
        if self.selected >= self.offset + page {
            self.offset = self.selected + 1 - page;
        }
    }
}
