use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::RecordStatus;
use crate::types::{lenient_decimal, lenient_timestamp, ContributionId, GroupId, MemberId};

/// A member's periodic deposit into the group ("aporte").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contribution {
    pub id: ContributionId,
    #[serde(rename = "user_id")]
    pub member_id: MemberId,
    #[serde(rename = "natillera_id")]
    pub group_id: GroupId,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Decimal,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub month: u8,
    #[serde(default)]
    pub year: i32
}

impl Contribution {
    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }
}
