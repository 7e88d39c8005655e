use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// A tenant known to an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Linked login account, when the tenant has one.
    #[serde(default)]
    pub user_id: Option<EntityId>,
}

impl Tenant {
    #[must_use]
    pub fn full_name(&self) -> String {
        crate::format::full_name(&self.first_name, &self.last_name)
    }
}
