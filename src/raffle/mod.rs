mod summary;
#[cfg(test)]
mod tests;

pub use summary::{RaffleSummary, TICKETS_PER_RAFFLE};
