use std::collections::HashMap;

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-category totals produced by aggregation. Keys carry no ordering
/// guarantee.
pub type CategoryTotal = HashMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn all() -> &'static [TransactionKind] {
        &[Self::Income, Self::Expense]
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded income or expense event. Immutable once stored;
/// edits replace the whole record by id.
///
/// Direction is carried by `kind`, never by a negative amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
    /// Record creation timestamp (RFC 3339), distinct from `date`.
    pub created_at: String,
}

impl Transaction {
    /// Build a transaction from form input, assigning a fresh id and
    /// creation timestamp.
    pub fn new(
        amount: f64,
        category: String,
        description: String,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            category,
            description,
            kind,
            date,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check the record invariants the add-transaction form enforces.
    /// Id uniqueness is checked by the store, not here.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            anyhow::bail!("Transaction id must not be empty");
        }
        if !self.amount.is_finite() {
            anyhow::bail!("Amount must be a valid number");
        }
        if self.amount <= 0.0 {
            anyhow::bail!("Amount must be greater than 0");
        }
        if self.description.trim().is_empty() {
            anyhow::bail!("Description is required");
        }
        if self.category.trim().is_empty() {
            anyhow::bail!("Category is required");
        }
        Ok(())
    }
}
