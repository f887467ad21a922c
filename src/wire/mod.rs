//! Response shapes consumed by the web layer.
//!
//! The engine works over opaque member ids; these DTOs resolve ids to the
//! emails the UI displays and mirror the field names it already consumes.
//! Display formatting (decimal points, currency signs) stays upstream —
//! amounts cross this boundary as integer minor units.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::{canonical_label, Flat};
use crate::services::{Balance, PeriodSummary, Transfer};

/// One roster row of the balance endpoint. Positive net = owed money.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRow {
    pub member_id: Uuid,
    pub email: String,
    pub net: i64,
}

/// One settlement instruction, keyed by email like the UI expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementRow {
    pub from: String,
    pub to: String,
    pub amount: i64,
}

/// Body of the balance endpoint: per-member totals plus the transfer plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceResponse {
    pub totals: Vec<BalanceRow>,
    pub settlements: Vec<SettlementRow>,
}

impl BalanceResponse {
    /// Resolves engine output against the flat's roster. Ids without a
    /// roster entry are dropped rather than guessed at.
    pub fn project(flat: &Flat, balances: &[Balance], transfers: &[Transfer]) -> Self {
        let email_of = |id: Uuid| flat.member(id).map(|member| member.email.clone());

        let totals = balances
            .iter()
            .filter_map(|balance| {
                email_of(balance.member_id).map(|email| BalanceRow {
                    member_id: balance.member_id,
                    email,
                    net: balance.net,
                })
            })
            .collect();

        let settlements = transfers
            .iter()
            .filter_map(|transfer| match (email_of(transfer.from), email_of(transfer.to)) {
                (Some(from), Some(to)) => Some(SettlementRow {
                    from,
                    to,
                    amount: transfer.amount,
                }),
                _ => None,
            })
            .collect();

        Self {
            totals,
            settlements,
        }
    }
}

/// Dashboard payload: window total plus labeled category buckets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: i64,
    pub by_category: Vec<DashboardBucket>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardBucket {
    pub category: String,
    pub label: String,
    pub total: i64,
}

impl DashboardSummary {
    pub fn from_summary(summary: &PeriodSummary) -> Self {
        Self {
            total: summary.total,
            by_category: summary
                .by_category
                .iter()
                .map(|bucket| DashboardBucket {
                    category: bucket.category.clone(),
                    label: canonical_label(&bucket.category).to_string(),
                    total: bucket.total,
                })
                .collect(),
        }
    }
}
