//! Backend-owned rows
//!
//! Rows of the open tables are carried as the JSON object the backend
//! returned. Columns are never re-typed, so nullable and numeric values
//! reach the client exactly as stored.

use serde_json::{Map, Value};

/// True when the row's `id` column equals `id`, whether stored as text or number
pub fn id_matches(row: &Map<String, Value>, id: &str) -> bool {
    match row.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}
