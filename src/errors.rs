use thiserror::Error;
use uuid::Uuid;

/// Rejection raised for a malformed expense record.
///
/// The engine never coerces bad data: a rejected expense contributes
/// nothing to anyone's balance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expense {expense}: amount must be positive, got {amount}")]
    NonPositiveAmount { expense: Uuid, amount: i64 },
    #[error("expense {expense}: participant set is empty")]
    EmptyParticipants { expense: Uuid },
    #[error("expense {expense}: payer {member} is not in the roster")]
    UnknownPayer { expense: Uuid, member: Uuid },
    #[error("expense {expense}: participant {member} is not in the roster")]
    UnknownParticipant { expense: Uuid, member: Uuid },
}

impl ValidationError {
    /// Id of the expense the rejection refers to.
    pub fn expense_id(&self) -> Uuid {
        match self {
            Self::NonPositiveAmount { expense, .. }
            | Self::EmptyParticipants { expense }
            | Self::UnknownPayer { expense, .. }
            | Self::UnknownParticipant { expense, .. } => *expense,
        }
    }
}

/// Error type that captures flat failures outside expense validation.
#[derive(Debug, Error)]
pub enum FlatError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
