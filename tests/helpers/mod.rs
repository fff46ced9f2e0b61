// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for bigamount integration tests
//!
//! Shared unit scales and a tracing subscriber that writes through the test
//! harness, so `RUST_LOG=bigamount=trace cargo test` shows pipeline steps.

#![allow(dead_code)]

use bigamount::{Amount, Unit, Units};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber once per test binary
///
/// Safe to call from every test; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `S`, `kS`, `MS` with 0, 3 and 6 decimals
pub fn some_units() -> Units {
    Units::new(vec![
        Unit::new(0, "Some", "S"),
        Unit::new(3, "Kilo Some", "kS"),
        Unit::new(6, "Mega Some", "MS"),
    ])
    .unwrap()
}

/// `S` and `MS` only, same base as [`some_units`] but a different scale
pub fn sparse_units() -> Units {
    Units::new(vec![Unit::new(0, "Some", "S"), Unit::new(6, "Mega Some", "MS")]).unwrap()
}

/// Six units, 0 to 15 decimals in steps of three
pub fn wide_units() -> Units {
    Units::new(vec![
        Unit::new(0, "Some", "S"),
        Unit::new(3, "Kilosome", "kS"),
        Unit::new(6, "Megasome", "MS"),
        Unit::new(9, "Gigasome", "GS"),
        Unit::new(12, "Terasome", "TS"),
        Unit::new(15, "Pegasome", "PS"),
    ])
    .unwrap()
}

/// Amount of `value` base units in [`some_units`]
pub fn some(value: i64) -> Amount {
    Amount::new(value, &some_units())
}
