use super::{RaffleSummary, TICKETS_PER_RAFFLE};

use anyhow::Result;

use crate::models::{RaffleTicket, TicketState};
use crate::types::{RaffleId, TicketId};

fn create_ticket(id: TicketId, raffle_id: RaffleId, state: TicketState, paid: bool) -> RaffleTicket {
    RaffleTicket {
        id,
        raffle_id,
        number: format!("{:02}", id % 100),
        state,
        taken_by: (state == TicketState::Taken).then_some(1),
        taken_at: None,
        paid,
        holder: None
    }
}

#[test]
fn test_summary_counts_each_ticket_state() {
    let tickets = vec![
        create_ticket(1, 1, TicketState::Available, false),
        create_ticket(2, 1, TicketState::Taken, true),
        create_ticket(3, 1, TicketState::Taken, false),
        create_ticket(4, 1, TicketState::Taken, false),
        create_ticket(5, 1, TicketState::Available, false),
    ];

    let summary = RaffleSummary::from_tickets(&tickets);

    assert_eq!(summary, RaffleSummary {
        tickets: 5,
        available: 2,
        taken: 3,
        paid: 1,
        pending_payment: 2
    });
    assert_eq!(summary.availability(), "2 / 100");
}

#[test]
fn test_full_raffle_starts_with_every_ticket_available() {
    let tickets: Vec<RaffleTicket> = (0..TICKETS_PER_RAFFLE as TicketId)
        .map(|id| create_ticket(id, 7, TicketState::Available, false))
        .collect();

    let summary = RaffleSummary::from_tickets(&tickets);

    assert_eq!(summary.available, TICKETS_PER_RAFFLE);
    assert_eq!(summary.taken, 0);
    assert_eq!(summary.availability(), "100 / 100");
}

#[test]
fn test_empty_raffle() {
    let no_tickets: Vec<RaffleTicket> = Vec::new();

    assert_eq!(RaffleSummary::from_tickets(&no_tickets), RaffleSummary::default());
    assert!(RaffleSummary::by_raffle(&no_tickets).is_empty());
}

#[test]
fn test_summaries_are_grouped_and_ordered_by_raffle() {
    let tickets = vec![
        create_ticket(1, 9, TicketState::Taken, true),
        create_ticket(2, 3, TicketState::Available, false),
        create_ticket(3, 9, TicketState::Taken, false),
    ];

    let raffles = RaffleSummary::by_raffle(&tickets);

    assert_eq!(raffles.len(), 2);
    assert_eq!(raffles[0].0, 3);
    assert_eq!(raffles[0].1.available, 1);
    assert_eq!(raffles[1].0, 9);
    assert_eq!(raffles[1].1.taken, 2);
    assert_eq!(raffles[1].1.pending_payment, 1);
}

#[test]
fn test_ticket_decodes_from_backend_payload() -> Result<()> {
    let tickets: Vec<RaffleTicket> = serde_json::from_str(r#"[
        {"id": 1, "sorteo_id": 2, "numero": "07", "estado": "tomado", "tomado_por": 3,
         "fecha_tomado": "2024-03-01T10:00:00", "pagado": false,
         "usuario": {"id": 3, "full_name": "Carla Ruiz", "username": "carla", "email": ""}},
        {"id": 2, "sorteo_id": 2, "numero": "08", "estado": "disponible"}
    ]"#)?;

    assert_eq!(tickets[0].number, "07");
    assert_eq!(tickets[0].taken_by, Some(3));
    assert!(tickets[0].awaits_payment());
    assert_eq!(tickets[0].holder.as_ref().map(|member| member.display_name()), Some("Carla Ruiz"));
    assert!(!tickets[1].is_taken());
    assert!(!tickets[1].paid);

    Ok(())
}
