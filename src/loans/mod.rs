mod balance;
mod portfolio;

pub use balance::{compute_balance, LoanBalance};
pub use portfolio::{LoanPortfolio, PaymentSummary};
