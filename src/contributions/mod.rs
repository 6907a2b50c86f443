mod aggregator;
#[cfg(test)]
mod tests;

pub use aggregator::{aggregate, member_share, MemberContribution, MemberShare};
