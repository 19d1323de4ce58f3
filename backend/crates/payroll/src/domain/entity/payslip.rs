//! Payslip Entity

use chrono::{DateTime, FixedOffset, Utc};
use kernel::id::EmployeeId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Keys the server stamps itself; client-sent values are discarded
pub const SERVER_STAMPED_FIELDS: [&str; 2] = ["id", "date"];

/// Row of the `payslips` table as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payslip(Map<String, Value>);

impl Payslip {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// `date` column, when it is an RFC 3339 timestamp
    pub fn date(&self) -> Option<DateTime<FixedOffset>> {
        self.get("date")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

/// Insert payload
#[derive(Debug, Clone, Serialize)]
pub struct NewPayslip {
    pub employee_id: EmployeeId,
    /// Kept as sent so integral amounts stay integral
    pub amount: Number,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
