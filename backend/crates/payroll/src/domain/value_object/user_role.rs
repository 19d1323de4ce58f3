use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Viewer,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Viewer => "viewer",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(UserRole::Admin),
            "viewer" => Some(UserRole::Viewer),
            _ => None,
        }
    }

    /// Role stored in the `users` table, `viewer` when absent or unknown
    pub fn from_stored(code: Option<&str>) -> Self {
        match code {
            None => UserRole::default(),
            Some(code) => Self::from_code(code).unwrap_or_else(|| {
                tracing::warn!(role = code, "Unknown role code, falling back to viewer");
                UserRole::default()
            }),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("viewer"), Some(UserRole::Viewer));
        assert_eq!(UserRole::from_code("Admin"), None);
    }

    #[test]
    fn test_user_role_from_stored_defaults_to_viewer() {
        assert_eq!(UserRole::from_stored(None), UserRole::Viewer);
        assert_eq!(UserRole::from_stored(Some("superuser")), UserRole::Viewer);
        assert_eq!(UserRole::from_stored(Some("admin")), UserRole::Admin);
    }

    #[test]
    fn test_user_role_serde() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let role: UserRole = serde_json::from_str("\"viewer\"").unwrap();
        assert_eq!(role, UserRole::Viewer);
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(UserRole::Viewer.to_string(), "viewer");
    }
}
