use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Page size the transaction list renders with.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Category suggestions a fresh store starts with. Advisory only; a
/// transaction may carry any label.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Bills",
];

/// The authoritative in-memory transaction list, plus the advisory
/// category suggestions.
///
/// All mutation goes through the named operations here; readers take
/// snapshot views. Persistence is the caller's problem: [`Self::to_json`]
/// and [`Self::from_json`] give a blob the surrounding app can stash in
/// whatever key-value storage it has.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    categories: Vec<String>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    // ── Mutations ─────────────────────────────────────────────

    /// Validate and prepend a transaction (display order is newest-first).
    pub fn insert(&mut self, txn: Transaction) -> Result<()> {
        txn.validate()?;
        if self.transactions.iter().any(|t| t.id == txn.id) {
            anyhow::bail!("A transaction with id {} already exists", txn.id);
        }
        tracing::debug!(id = %txn.id, amount = txn.amount, "insert transaction");
        self.transactions.insert(0, txn);
        Ok(())
    }

    /// Remove the transaction with the given id.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| anyhow::anyhow!("No transaction with id {id}"))?;
        self.transactions.remove(pos);
        tracing::debug!(id = %id, "delete transaction");
        Ok(())
    }

    /// Swap in a whole replacement record, matched by id. Amount, kind,
    /// and date are never edited in place.
    pub fn replace(&mut self, txn: Transaction) -> Result<()> {
        txn.validate()?;
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == txn.id)
            .ok_or_else(|| anyhow::anyhow!("No transaction with id {}", txn.id))?;
        tracing::debug!(id = %txn.id, "replace transaction");
        self.transactions[pos] = txn;
        Ok(())
    }

    pub fn add_category(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let lower = name.to_lowercase();
        if self.categories.iter().any(|c| c.to_lowercase() == lower) {
            return;
        }
        self.categories.push(name.to_string());
    }

    // ── Reads ─────────────────────────────────────────────────

    /// Snapshot of the full list, in stored order (newest insertions
    /// first).
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Case-insensitive substring search over description and category.
    /// A blank query matches everything. This is the path the debounced
    /// search box calls into.
    pub fn search(&self, query: &str) -> Vec<Transaction> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.transactions.clone();
        }
        let matches: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| {
                t.description.to_lowercase().contains(&query)
                    || t.category.to_lowercase().contains(&query)
            })
            .cloned()
            .collect();
        tracing::debug!(query = %query, count = matches.len(), "search");
        matches
    }

    // ── Snapshot blob ─────────────────────────────────────────

    /// Serialize the store to the JSON blob the app persists.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize store snapshot")
    }

    /// Restore a store from a persisted blob, re-checking every record
    /// invariant and id uniqueness.
    pub fn from_json(blob: &str) -> Result<Self> {
        let store: Self =
            serde_json::from_str(blob).context("Failed to parse store snapshot")?;
        let mut seen = HashSet::new();
        for txn in &store.transactions {
            txn.validate()
                .with_context(|| format!("Invalid transaction {} in snapshot", txn.id))?;
            if !seen.insert(txn.id.as_str()) {
                anyhow::bail!("Duplicate transaction id {} in snapshot", txn.id);
            }
        }
        Ok(store)
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Cumulative page window for incremental list rendering: everything up
/// to and including `page` (1-based), clamped to the list length. Page 0
/// shows nothing.
pub fn page_window(transactions: &[Transaction], page: usize, per_page: usize) -> &[Transaction] {
    let end = page.saturating_mul(per_page).min(transactions.len());
    &transactions[..end]
}
