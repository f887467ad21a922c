use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::balance_service::Balance;

/// A single point-to-point repayment in minor units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transfer {
    pub from: Uuid,
    pub to: Uuid,
    pub amount: i64,
}

/// Open position while matching: the magnitude still owed or expected.
///
/// Ordered so a max-heap yields the largest magnitude first and, among
/// equal magnitudes, the lower member id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenPosition {
    magnitude: i64,
    member: Uuid,
}

impl Ord for OpenPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude
            .cmp(&other.magnitude)
            .then_with(|| other.member.cmp(&self.member))
    }
}

impl PartialOrd for OpenPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub struct SettlementService;

impl SettlementService {
    /// Turns net balances into transfers that zero every position.
    ///
    /// Greedy matching: repeatedly pair the largest remaining creditor
    /// with the largest remaining debtor and settle the smaller of the two
    /// magnitudes. Each transfer closes at least one side, so a plan never
    /// exceeds `nonzero positions - 1` transfers. Transfers are returned
    /// in generation order, which the tie-break above makes deterministic.
    pub fn plan(balances: &[Balance]) -> Vec<Transfer> {
        let mut creditors = BinaryHeap::new();
        let mut debtors = BinaryHeap::new();
        for balance in balances {
            match balance.net.cmp(&0) {
                Ordering::Greater => creditors.push(OpenPosition {
                    magnitude: balance.net,
                    member: balance.member_id,
                }),
                Ordering::Less => debtors.push(OpenPosition {
                    magnitude: -balance.net,
                    member: balance.member_id,
                }),
                Ordering::Equal => {}
            }
        }

        let mut transfers = Vec::new();
        while let (Some(mut creditor), Some(mut debtor)) = (creditors.pop(), debtors.pop()) {
            let amount = creditor.magnitude.min(debtor.magnitude);
            transfers.push(Transfer {
                from: debtor.member,
                to: creditor.member,
                amount,
            });
            creditor.magnitude -= amount;
            debtor.magnitude -= amount;
            if creditor.magnitude > 0 {
                creditors.push(creditor);
            }
            if debtor.magnitude > 0 {
                debtors.push(debtor);
            }
        }
        transfers
    }
}
