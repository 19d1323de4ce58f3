//! Session User
//!
//! Identity carried by the signed session cookie for the lifetime of a
//! request. The sole input to authorization decisions.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::UserRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
}

impl SessionUser {
    pub fn new(id: UserId, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
