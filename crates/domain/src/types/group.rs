//! Customer group types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named group of customer profiles, managed by the merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable fields of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupFields {
    pub name: String,
}

impl GroupFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
