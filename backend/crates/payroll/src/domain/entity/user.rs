//! User records
//!
//! `AuthUser` is what the backend's auth API returns for a signed-in
//! account; `UserRecord` is the row in the `users` table holding its role.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::UserRole;

/// Account returned by the backend auth API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
}

/// Row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Kept raw so unknown codes degrade to the default role
    #[serde(default)]
    pub role: Option<String>,
}

impl UserRecord {
    pub fn role(&self) -> UserRole {
        UserRole::from_stored(self.role.as_deref())
    }
}

/// Insert payload for the `users` table
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}
