//! Emission Tracker library
//!
//! This module exposes the calculation-and-aggregation engine for use in
//! tests and as a library.

pub mod aggregator;
pub mod calculator;
pub mod catalog;
pub mod core;
pub mod i18n;
pub mod ledger;
pub mod session;
