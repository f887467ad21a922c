//! Property checks for the money-handling invariants: conservation,
//! apportionment exactness, order independence, and settlement soundness.

mod common;

use std::collections::BTreeMap;

use common::{member, sample_date};
use flatshare_core::ledger::{Expense, Member};
use flatshare_core::services::{BalanceService, SettlementService, ValidationPolicy};
use proptest::prelude::*;
use uuid::Uuid;

fn arb_inputs() -> impl Strategy<Value = (Vec<Member>, Vec<Expense>)> {
    prop::collection::btree_set(1u128..1_000_000, 1..8).prop_flat_map(|ids| {
        let members: Vec<Member> = ids.into_iter().map(member).collect();
        let count = members.len();
        let pool = members.clone();
        let arb_expense = (
            1i64..50_000,
            0..count,
            prop::collection::btree_set(0..count, 1..=count),
            1u32..29,
        )
            .prop_map(move |(amount, payer, participants, day)| {
                Expense::new(
                    "Shared",
                    amount,
                    pool[payer].id,
                    participants.iter().map(|index| pool[*index].id),
                    sample_date(2025, 3, day),
                )
            });
        (Just(members), prop::collection::vec(arb_expense, 0..12))
    })
}

fn arb_permuted_inputs() -> impl Strategy<Value = (Vec<Member>, Vec<Expense>, Vec<Expense>)> {
    arb_inputs().prop_flat_map(|(members, expenses)| {
        let permuted = Just(expenses.clone()).prop_shuffle();
        (Just(members), Just(expenses), permuted)
    })
}

proptest! {
    #[test]
    fn balances_conserve_to_zero((members, expenses) in arb_inputs()) {
        let sheet =
            BalanceService::compute_balances(&members, &expenses, ValidationPolicy::Strict)
                .unwrap();
        let total: i64 = sheet.balances.iter().map(|balance| balance.net).sum();
        prop_assert_eq!(total, 0);
        prop_assert_eq!(sheet.balances.len(), members.len());
    }

    #[test]
    fn shares_sum_back_to_the_amount((_, expenses) in arb_inputs()) {
        for expense in &expenses {
            let total: i64 = expense.shares().iter().map(|(_, share)| share).sum();
            prop_assert_eq!(total, expense.amount);
            let spread = expense.shares();
            let min = spread.iter().map(|(_, share)| *share).min().unwrap();
            let max = spread.iter().map(|(_, share)| *share).max().unwrap();
            prop_assert!(max - min <= 1);
        }
    }

    #[test]
    fn any_permutation_yields_identical_balances(
        (members, expenses, permuted) in arb_permuted_inputs()
    ) {
        let forward =
            BalanceService::compute_balances(&members, &expenses, ValidationPolicy::Strict)
                .unwrap();
        let shuffled =
            BalanceService::compute_balances(&members, &permuted, ValidationPolicy::Strict)
                .unwrap();
        prop_assert_eq!(forward.balances, shuffled.balances);
    }

    #[test]
    fn settlement_plans_are_sound((members, expenses) in arb_inputs()) {
        let sheet =
            BalanceService::compute_balances(&members, &expenses, ValidationPolicy::Strict)
                .unwrap();
        let plan = SettlementService::plan(&sheet.balances);

        let mut nets: BTreeMap<Uuid, i64> = sheet
            .balances
            .iter()
            .map(|balance| (balance.member_id, balance.net))
            .collect();
        for transfer in &plan {
            prop_assert!(transfer.amount > 0);
            prop_assert_ne!(transfer.from, transfer.to);
            *nets.get_mut(&transfer.from).unwrap() += transfer.amount;
            *nets.get_mut(&transfer.to).unwrap() -= transfer.amount;
        }
        prop_assert!(nets.values().all(|net| *net == 0));

        let nonzero = sheet
            .balances
            .iter()
            .filter(|balance| balance.net != 0)
            .count();
        prop_assert!(plan.len() <= nonzero.saturating_sub(1));
    }
}
