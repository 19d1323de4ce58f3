//! Employee Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::id_matches;

/// Keys the server stamps itself; client-sent values are discarded
pub const SERVER_STAMPED_FIELDS: [&str; 3] = ["id", "created_by", "updated_at"];

/// Row of the `employees` table as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Employee(Map<String, Value>);

impl Employee {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn has_id(&self, id: &str) -> bool {
        id_matches(&self.0, id)
    }

    pub fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }
}

/// Insert payload
#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub created_by: UserId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Update payload; the id travels separately as the row filter
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeChanges {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub updated_at: DateTime<Utc>,
}
