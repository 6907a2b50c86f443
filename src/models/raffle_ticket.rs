use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::models::Member;
use crate::types::{lenient_timestamp, MemberId, RaffleId, TicketId};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Deserialize)]
pub enum TicketState {
    #[default]
    #[serde(rename = "disponible", alias = "available")]
    Available,
    #[serde(rename = "tomado", alias = "taken")]
    Taken
}

/// One numbered ticket of a group raffle ("billete").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RaffleTicket {
    pub id: TicketId,
    #[serde(rename = "sorteo_id")]
    pub raffle_id: RaffleId,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "estado", default)]
    pub state: TicketState,
    #[serde(rename = "tomado_por", default)]
    pub taken_by: Option<MemberId>,
    #[serde(rename = "fecha_tomado", default, deserialize_with = "lenient_timestamp")]
    pub taken_at: Option<NaiveDateTime>,
    #[serde(rename = "pagado", default)]
    pub paid: bool,
    #[serde(rename = "usuario", default)]
    pub holder: Option<Member>
}

impl RaffleTicket {
    pub fn is_taken(&self) -> bool {
        self.state == TicketState::Taken
    }

    /// Taken by someone who has not paid for it yet.
    pub fn awaits_payment(&self) -> bool {
        self.is_taken() && !self.paid
    }
}
