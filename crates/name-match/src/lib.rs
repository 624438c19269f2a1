//! Identity reconciliation by person-name and email similarity.

pub mod config;
pub mod customers;
pub mod error;
pub mod matching;
pub mod telemetry;
