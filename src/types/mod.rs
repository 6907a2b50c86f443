mod amount;
mod errors;
mod timestamp;

pub use amount::{accumulate, coerce_decimal, coerce_f64, lenient_decimal, lenient_optional_decimal, parse_decimal};
pub use errors::AmountError;
pub use timestamp::{lenient_date, lenient_timestamp, parse_timestamp};

pub type MemberId = u32;
pub type GroupId = u32;
pub type ContributionId = u32;
pub type LoanId = u32;
pub type PaymentId = u32;
pub type TransactionId = u32;
pub type RaffleId = u32;
pub type TicketId = u32;
