use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ValidationError, validate_cost};

pub type EntryId = Uuid;

/// One recurring service and what it costs per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionEntry {
    pub id: EntryId,
    pub name: String,
    pub cost: f64,
    pub added_at: DateTime<Utc>,
}

impl SubscriptionEntry {
    /// Build a validated entry. The name is trimmed and checked before the cost.
    pub fn new(name: &str, cost: f64) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        let cost = validate_cost(cost)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            cost,
            added_at: Utc::now(),
        })
    }
}

pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}
