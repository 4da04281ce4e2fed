use crate::models::Transaction;

/// Selects the transactions to show. `None` lets everything through.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TransactionFilter {
    #[default]
    None,
    /// Exact `f64` equality on the amount, no tolerance.
    Amount(f64),
    /// Exact, case-sensitive match on the category label.
    Category(String),
}

impl TransactionFilter {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    #[allow(clippy::float_cmp)]
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::None => true,
            Self::Amount(threshold) => txn.amount() == *threshold,
            Self::Category(category) => txn.category() == category,
        }
    }

    /// New list of the matching transactions, in their original order.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            // Unrounded, since matching is exact
            Self::Amount(amount) => write!(f, "amount = {amount}"),
            Self::Category(category) => write!(f, "category = {category}"),
        }
    }
}
