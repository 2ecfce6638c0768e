use crate::models::{CategoryTotal, Transaction};

/// Sum transaction amounts per category.
///
/// Covers exactly the subset passed in; callers filter by kind first
/// (e.g. expenses only for the spending chart). Categories absent from
/// the input never appear as zero entries. O(n) time, O(k) space for k
/// distinct categories. Plain `f64` addition with no rounding; formatting
/// happens at presentation time.
pub fn group_by_category(transactions: &[Transaction]) -> CategoryTotal {
    let mut totals = CategoryTotal::new();
    for txn in transactions {
        *totals.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
    }
    totals
}

/// Return a new vector ordered by date descending (newest first).
///
/// The input slice is left untouched. The sort is stable, so
/// transactions sharing a date keep their original relative order.
pub fn sort_by_date_descending(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Income, expense, and net totals over a snapshot (the dashboard cards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub income: f64,
    pub expenses: f64,
}

impl Summary {
    pub fn net_balance(&self) -> f64 {
        self.income - self.expenses
    }
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let income = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expenses = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();
    Summary { income, expenses }
}

/// One slice of the spending chart: a category's total and its share of
/// all expense spending, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    pub share: f64,
}

/// Rank expense spending by category, largest first.
///
/// Income transactions are ignored. Ties on total break by category name
/// so the chart feed is deterministic.
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let expenses: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.is_expense())
        .cloned()
        .collect();
    let totals = group_by_category(&expenses);
    let total_spend: f64 = totals.values().sum();

    let mut breakdown: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, total)| {
            let share = if total_spend > 0.0 {
                total / total_spend
            } else {
                0.0
            };
            CategoryShare {
                category,
                total,
                share,
            }
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown
}
