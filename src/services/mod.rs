pub mod balance_service;
pub mod chore_service;
pub mod roster_service;
pub mod settlement_service;
pub mod summary_service;

pub use balance_service::{Balance, BalanceService, BalanceSheet, ValidationPolicy};
pub use chore_service::ChoreService;
pub use roster_service::RosterService;
pub use settlement_service::{SettlementService, Transfer};
pub use summary_service::{CategoryBucket, PeriodSummary, SummaryService};

use crate::errors::{FlatError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Flat(#[from] FlatError),
    #[error("{0}")]
    Invalid(String),
}
