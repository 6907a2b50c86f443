use serde::Deserialize;

use crate::types::MemberId;

/// A registered user as returned by the backend.
///
/// Only the identity fields are kept; anything else the backend sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub id: MemberId,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String
}

impl Member {
    pub fn new(id: MemberId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            username: String::new(),
            email: String::new()
        }
    }

    /// Placeholder for a member id that shows up in records but not in the roster.
    pub fn unlisted(id: MemberId) -> Self {
        Self::new(id, "")
    }

    /// Name to show for this member, falling back to the username.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}
