use super::Transaction;

/// Ordered, in-memory list of transactions.
///
/// Insertion order is preserved and identical transactions may appear more
/// than once. The only way to change the contents is through
/// [`add_transaction`](Self::add_transaction) and
/// [`remove_transaction`](Self::remove_transaction).
#[derive(Debug, Clone, Default)]
pub struct TransactionList {
    transactions: Vec<Transaction>,
}

impl TransactionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end. Does not validate.
    pub fn add_transaction(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Remove the first transaction equal to `txn`. Returns `false` when
    /// nothing matched, leaving the list untouched.
    pub fn remove_transaction(&mut self, txn: &Transaction) -> bool {
        match self.transactions.iter().position(|t| t == txn) {
            Some(idx) => {
                self.transactions.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove the last transaction equal to `txn`, leaving earlier
    /// duplicates where they are.
    pub fn remove_last_match(&mut self, txn: &Transaction) -> bool {
        match self.transactions.iter().rposition(|t| t == txn) {
            Some(idx) => {
                self.transactions.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of every amount in the list.
    pub fn total_cost(&self) -> f64 {
        total_cost(&self.transactions)
    }
}

/// Sum of the amounts in `txns`.
pub fn total_cost(txns: &[Transaction]) -> f64 {
    txns.iter().map(Transaction::amount).sum()
}
