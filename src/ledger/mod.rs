mod filter;

pub use filter::{actor_names, filter, TransactionCriteria, ALL};
