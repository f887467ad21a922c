mod common;

use std::collections::BTreeMap;

use common::{expense, roster};
use flatshare_core::services::{
    Balance, BalanceService, SettlementService, Transfer, ValidationPolicy,
};
use uuid::Uuid;

fn apply(balances: &[Balance], transfers: &[Transfer]) -> BTreeMap<Uuid, i64> {
    let mut nets: BTreeMap<Uuid, i64> = balances
        .iter()
        .map(|balance| (balance.member_id, balance.net))
        .collect();
    for transfer in transfers {
        *nets.get_mut(&transfer.from).unwrap() += transfer.amount;
        *nets.get_mut(&transfer.to).unwrap() -= transfer.amount;
    }
    nets
}

#[test]
fn equal_split_settles_with_two_transfers_to_the_payer() {
    let members = roster(3);
    let (a, b, c) = (&members[0], &members[1], &members[2]);
    let expenses = vec![expense(300, a, &[a, b, c])];
    let sheet =
        BalanceService::compute_balances(&members, &expenses, ValidationPolicy::Strict).unwrap();

    let plan = SettlementService::plan(&sheet.balances);

    assert_eq!(
        plan,
        vec![
            Transfer {
                from: b.id,
                to: a.id,
                amount: 100,
            },
            Transfer {
                from: c.id,
                to: a.id,
                amount: 100,
            },
        ]
    );
}

#[test]
fn applying_the_plan_zeroes_every_balance() {
    let members = roster(5);
    let (a, b, c, d, e) = (
        &members[0],
        &members[1],
        &members[2],
        &members[3],
        &members[4],
    );
    let expenses = vec![
        expense(10_000, a, &[a, b, c, d, e]),
        expense(7_301, b, &[c, d]),
        expense(421, c, &[a, b]),
        expense(89, e, &[a, b, c, d, e]),
    ];
    let sheet =
        BalanceService::compute_balances(&members, &expenses, ValidationPolicy::Strict).unwrap();

    let plan = SettlementService::plan(&sheet.balances);
    let nets = apply(&sheet.balances, &plan);

    assert!(nets.values().all(|net| *net == 0));
}

#[test]
fn transfer_count_is_bounded_by_nonzero_members() {
    let members = roster(6);
    let refs: Vec<_> = members.iter().collect();
    let expenses = vec![
        expense(999, refs[0], &refs),
        expense(5_000, refs[3], &[refs[1], refs[2]]),
        expense(260, refs[5], &[refs[0]]),
    ];
    let sheet =
        BalanceService::compute_balances(&members, &expenses, ValidationPolicy::Strict).unwrap();

    let plan = SettlementService::plan(&sheet.balances);
    let nonzero = sheet
        .balances
        .iter()
        .filter(|balance| balance.net != 0)
        .count();

    assert!(plan.len() <= nonzero.saturating_sub(1));
}

#[test]
fn already_settled_flats_need_no_plan() {
    let members = roster(3);
    let a = &members[0];
    let expenses = vec![expense(50, a, &[a])];
    let sheet =
        BalanceService::compute_balances(&members, &expenses, ValidationPolicy::Strict).unwrap();

    assert!(SettlementService::plan(&sheet.balances).is_empty());
    assert!(SettlementService::plan(&[]).is_empty());
}

#[test]
fn transfers_never_name_the_same_member_twice() {
    let members = roster(4);
    let refs: Vec<_> = members.iter().collect();
    let expenses = vec![
        expense(1_003, refs[0], &refs),
        expense(77, refs[1], &[refs[2], refs[3]]),
    ];
    let sheet =
        BalanceService::compute_balances(&members, &expenses, ValidationPolicy::Strict).unwrap();

    for transfer in SettlementService::plan(&sheet.balances) {
        assert_ne!(transfer.from, transfer.to);
        assert!(transfer.amount > 0);
    }
}
