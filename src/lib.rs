//! Pocketbook: the core of a personal finance tracker.
//!
//! Holds the in-memory transaction store and the pure functions the
//! presentation layer builds on: category spending aggregation, date
//! sorting, compound-interest projections, and a debouncer for search
//! input. No UI and no storage I/O; callers own both ends.

mod debounce;
mod interest;
mod models;
mod report;
mod store;

pub use debounce::{debounce, Debouncer};
pub use interest::compound_interest;
pub use models::{CategoryTotal, Transaction, TransactionKind};
pub use report::{
    expense_breakdown, group_by_category, sort_by_date_descending, summarize, CategoryShare,
    Summary,
};
pub use store::{page_window, TransactionStore, DEFAULT_PAGE_SIZE};
