use std::collections::BTreeMap;

use crate::models::RaffleTicket;
use crate::types::RaffleId;

/// Every raffle is drawn over the numbers 00 to 99.
pub const TICKETS_PER_RAFFLE: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaffleSummary {
    pub tickets: usize,
    pub available: usize,
    pub taken: usize,
    pub paid: usize,
    pub pending_payment: usize
}

impl RaffleSummary {
    pub fn from_tickets<'a, I>(tickets: I) -> Self
    where
        I: IntoIterator<Item = &'a RaffleTicket>,
    {
        let mut summary = Self::default();

        for ticket in tickets {
            summary.tickets += 1;

            if ticket.is_taken() {
                summary.taken += 1;
            } else {
                summary.available += 1;
            }

            //NOTE: Paid is counted on its own, whatever state the ticket is in
            if ticket.paid {
                summary.paid += 1;
            }

            if ticket.awaits_payment() {
                summary.pending_payment += 1;
            }
        }

        summary
    }

    /// One summary per raffle, ordered by raffle id.
    pub fn by_raffle(tickets: &[RaffleTicket]) -> Vec<(RaffleId, RaffleSummary)> {
        let mut raffles: BTreeMap<RaffleId, Vec<&RaffleTicket>> = BTreeMap::new();

        for ticket in tickets {
            raffles.entry(ticket.raffle_id).or_default().push(ticket);
        }

        raffles.into_iter()
            .map(|(raffle_id, tickets)| (raffle_id, Self::from_tickets(tickets)))
            .collect()
    }

    pub fn availability(&self) -> String {
        format!("{} / {}", self.available, TICKETS_PER_RAFFLE)
    }
}
