#![allow(dead_code)]

use chrono::NaiveDate;
use flatshare_core::ledger::{Expense, Member};
use uuid::Uuid;

/// Deterministic member whose id sorts the same way as `raw`, so
/// tie-break assertions stay readable.
pub fn member(raw: u128) -> Member {
    Member {
        id: Uuid::from_u128(raw),
        name: None,
        email: format!("m{raw}@flat.test"),
    }
}

pub fn roster(count: u128) -> Vec<Member> {
    (1..=count).map(member).collect()
}

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn expense(amount: i64, payer: &Member, participants: &[&Member]) -> Expense {
    Expense::new(
        "Shared",
        amount,
        payer.id,
        participants.iter().map(|member| member.id),
        sample_date(2025, 3, 10),
    )
}
