use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::ledger::{Expense, Member};

use super::{ServiceError, ServiceResult};

/// How [`BalanceService::compute_balances`] treats a malformed expense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// The first invalid expense aborts the whole batch.
    #[default]
    Strict,
    /// Invalid expenses are skipped and reported; the rest still settle.
    SkipInvalid,
}

/// A member's signed net position in minor units. Positive means the
/// member is owed money.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balance {
    pub member_id: Uuid,
    pub net: i64,
}

/// Outcome of a balance computation over one expense batch.
#[derive(Debug, Clone, Default)]
pub struct BalanceSheet {
    /// One entry per roster member, ascending by member id. Members with
    /// no activity carry a zero net.
    pub balances: Vec<Balance>,
    /// Expenses rejected under [`ValidationPolicy::SkipInvalid`].
    pub rejected: Vec<ValidationError>,
}

impl BalanceSheet {
    /// Net position for a member, zero when the member is unknown.
    pub fn net_of(&self, member_id: Uuid) -> i64 {
        self.balances
            .iter()
            .find(|balance| balance.member_id == member_id)
            .map(|balance| balance.net)
            .unwrap_or(0)
    }
}

pub struct BalanceService;

impl BalanceService {
    /// Computes each member's net balance over the given expenses.
    ///
    /// Every expense credits its payer with the full amount and debits
    /// each participant an integer share (see [`Expense::shares`]). Shares
    /// of one expense sum back to its amount, so the sheet as a whole nets
    /// to exactly zero. The result does not depend on the order of
    /// `expenses`.
    pub fn compute_balances(
        members: &[Member],
        expenses: &[Expense],
        policy: ValidationPolicy,
    ) -> ServiceResult<BalanceSheet> {
        let roster: BTreeSet<Uuid> = members.iter().map(|member| member.id).collect();
        let mut net: BTreeMap<Uuid, i64> = roster.iter().map(|id| (*id, 0)).collect();
        let mut rejected = Vec::new();

        for expense in expenses {
            match Self::validate(expense, &roster) {
                Ok(()) => {
                    *net.entry(expense.paid_by).or_insert(0) += expense.amount;
                    for (participant, share) in expense.shares() {
                        *net.entry(participant).or_insert(0) -= share;
                    }
                }
                Err(error) => match policy {
                    ValidationPolicy::Strict => return Err(ServiceError::Validation(error)),
                    ValidationPolicy::SkipInvalid => {
                        tracing::warn!("Skipping invalid expense: {error}");
                        rejected.push(error);
                    }
                },
            }
        }

        let balances = net
            .into_iter()
            .map(|(member_id, net)| Balance { member_id, net })
            .collect();
        Ok(BalanceSheet { balances, rejected })
    }

    fn validate(expense: &Expense, roster: &BTreeSet<Uuid>) -> Result<(), ValidationError> {
        if expense.amount <= 0 {
            return Err(ValidationError::NonPositiveAmount {
                expense: expense.id,
                amount: expense.amount,
            });
        }
        if expense.split_between.is_empty() {
            return Err(ValidationError::EmptyParticipants {
                expense: expense.id,
            });
        }
        if !roster.contains(&expense.paid_by) {
            return Err(ValidationError::UnknownPayer {
                expense: expense.id,
                member: expense.paid_by,
            });
        }
        if let Some(unknown) = expense
            .split_between
            .iter()
            .find(|participant| !roster.contains(participant))
        {
            return Err(ValidationError::UnknownParticipant {
                expense: expense.id,
                member: *unknown,
            });
        }
        Ok(())
    }
}
