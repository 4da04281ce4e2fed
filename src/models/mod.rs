mod category;
mod transaction;
mod transaction_list;

pub use category::{allowed_list, find_allowed, ALLOWED_CATEGORIES};
pub use transaction::{Transaction, TIMESTAMP_FORMAT};
pub use transaction_list::{total_cost, TransactionList};
