use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ledger::{normalize_category, DateWindow, Expense};

/// Spend attributed to one category within a window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryBucket {
    pub category: String,
    pub total: i64,
}

/// Dashboard rollup for a date window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodSummary {
    pub window: DateWindow,
    pub total: i64,
    /// Largest bucket first; equal totals ordered by category name.
    pub by_category: Vec<CategoryBucket>,
}

pub struct SummaryService;

impl SummaryService {
    /// Totals the expenses falling inside the window and buckets them by
    /// normalized category. Pure and idempotent; calling it twice with
    /// the same arguments yields the same summary, bucket order included.
    pub fn summarize(expenses: &[Expense], window: DateWindow) -> PeriodSummary {
        let mut total = 0i64;
        let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
        for expense in expenses
            .iter()
            .filter(|expense| window.contains(expense.occurred_at))
        {
            total += expense.amount;
            *buckets
                .entry(normalize_category(&expense.category))
                .or_insert(0) += expense.amount;
        }

        let mut by_category: Vec<CategoryBucket> = buckets
            .into_iter()
            .map(|(category, total)| CategoryBucket { category, total })
            .collect();
        by_category.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        PeriodSummary {
            window,
            total,
            by_category,
        }
    }
}
