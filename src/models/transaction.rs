use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Member, TransactionType};
use crate::types::{lenient_decimal, lenient_timestamp, GroupId, MemberId, TransactionId};

/// Actor name shown for ledger entries with no member or creator attached.
pub const SYSTEM_ACTOR: &str = "Sistema";

/// An append-only entry in the group's ledger ("transacción").
///
/// The backend sends `monto` as a string; it is coerced to a decimal when the
/// record is decoded, so an unreadable amount is already zero here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "natillera_id")]
    pub group_id: GroupId,
    #[serde(rename = "tipo")]
    pub transaction_type: TransactionType,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "monto", default, deserialize_with = "lenient_decimal")]
    pub amount: Decimal,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "fecha", default, deserialize_with = "lenient_timestamp")]
    pub date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "creado_por", default)]
    pub actor_id: Option<MemberId>,
    /// Member the entry concerns, if any (e.g. the contributor or borrower).
    #[serde(rename = "miembro", default)]
    pub member: Option<Member>,
    /// User who recorded the entry.
    #[serde(rename = "creador", default)]
    pub creator: Option<Member>
}

impl Transaction {
    /// When the entry happened: `fecha` if present, otherwise `created_at`.
    pub fn occurred_at(&self) -> Option<NaiveDateTime> {
        self.date.or(self.created_at)
    }

    pub fn actor_name(&self) -> &str {
        [&self.member, &self.creator].into_iter()
            .flatten()
            .map(|member| member.full_name.as_str())
            .find(|name| !name.is_empty())
            .unwrap_or(SYSTEM_ACTOR)
    }

    pub fn signed_amount(&self) -> Decimal {
        if self.transaction_type.is_inflow() {
            self.amount
        } else {
            -self.amount
        }
    }
}
