mod transaction;

pub use transaction::{CategoryTotal, Transaction, TransactionKind};
