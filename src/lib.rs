#![doc(test(attr(deny(warnings))))]

//! Flatshare Core offers the ledger, settlement, and reporting primitives
//! that power a shared-flat workspace: who paid, who owes whom, and where
//! the money went.

pub mod errors;
pub mod ledger;
pub mod services;
pub mod utils;
pub mod wire;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Flatshare Core tracing initialized.");
    });
}
