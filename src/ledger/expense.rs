use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::{normalize_category, GENERAL_CATEGORY};

/// A shared expense. Immutable once ledgered; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    /// Positive amount in minor currency units (cents).
    pub amount: i64,
    pub paid_by: Uuid,
    /// Members the amount is split between. Sorted and deduplicated by
    /// construction; the payer need not be included.
    pub split_between: BTreeSet<Uuid>,
    pub category: String,
    pub occurred_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Audit only, never used in computation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
}

impl Expense {
    pub fn new(
        title: impl Into<String>,
        amount: i64,
        paid_by: Uuid,
        split_between: impl IntoIterator<Item = Uuid>,
        occurred_at: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            paid_by,
            split_between: split_between.into_iter().collect(),
            category: GENERAL_CATEGORY.to_string(),
            occurred_at,
            notes: None,
            created_by: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = normalize_category(category);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_created_by(mut self, member: Uuid) -> Self {
        self.created_by = Some(member);
        self
    }

    /// Splits the amount into one integer share per participant.
    ///
    /// Equal floor-division shares; the remainder is handed out one minor
    /// unit at a time to the first participants in ascending id order, so
    /// the shares always sum back to the amount. No floating point is
    /// involved at any step.
    pub fn shares(&self) -> Vec<(Uuid, i64)> {
        let count = self.split_between.len() as i64;
        if count == 0 {
            return Vec::new();
        }
        let base = self.amount / count;
        let remainder = self.amount % count;
        self.split_between
            .iter()
            .enumerate()
            .map(|(index, member)| {
                let extra = i64::from((index as i64) < remainder);
                (*member, base + extra)
            })
            .collect()
    }
}
