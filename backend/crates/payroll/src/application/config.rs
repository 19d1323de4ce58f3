//! Application Configuration
//!
//! Configuration for the Payroll application layer. Built once at startup
//! and shared read-only.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Payroll application configuration
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime (12 hours)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Deployment environment name, reported by the health check
    pub environment: String,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "payroll_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600), // 12 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            environment: "production".to_string(),
        }
    }
}

impl PayrollConfig {
    /// Create config whose signing key is derived from an operator secret
    pub fn with_secret(secret: &str) -> Self {
        Self {
            session_secret: platform::crypto::derive_key(secret),
            ..Default::default()
        }
    }

    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            environment: "development".to_string(),
            ..Self::with_random_secret()
        }
    }

    /// Cookie attributes for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }

    /// Session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PayrollConfig::default();
        assert_eq!(config.session_cookie_name, "payroll_session");
        assert!(config.cookie_secure);
        assert_eq!(config.session_ttl_ms(), 12 * 3600 * 1000);
    }

    #[test]
    fn test_with_secret_is_deterministic() {
        let a = PayrollConfig::with_secret("s3cret");
        let b = PayrollConfig::with_secret("s3cret");
        assert_eq!(a.session_secret, b.session_secret);
        assert_ne!(a.session_secret, [0u8; 32]);
    }

    #[test]
    fn test_development_config() {
        let config = PayrollConfig::development();
        assert!(!config.cookie_secure);
        assert_eq!(config.environment, "development");
        assert_ne!(config.session_secret, [0u8; 32]);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = PayrollConfig::default()
            .session_cookie()
            .build_set_cookie("token");
        assert!(cookie.starts_with("payroll_session=token"));
        assert!(cookie.contains("Max-Age=43200"));
        assert!(cookie.contains("Secure"));
    }
}
