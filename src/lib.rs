//! Financial calculations for collective savings groups ("natilleras").
//!
//! Every calculator is a pure function over records already fetched from the
//! group's backend: contribution totals and shares, simple-interest loan
//! balances, ledger filtering, raffle ticket counts and peso formatting. The [`report`] module loads
//! those records from a directory of backend responses and renders CSV reports.

pub mod contributions;
pub mod currency;
pub mod ledger;
pub mod loans;
pub mod models;
pub mod raffle;
pub mod report;
pub mod types;
