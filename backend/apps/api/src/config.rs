//! Server configuration loaded from the environment

use anyhow::{Context, bail};
use payroll::PayrollConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENVIRONMENT: &str = "production";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub session_secret: String,
    pub port: u16,
    pub environment: String,
    pub cookie_secure: bool,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> anyhow::Result<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .with_context(|| format!("{key} must be set in environment"))
        };

        let supabase_url = required("SUPABASE_URL")?;
        let supabase_key = required("SUPABASE_KEY")?;
        let session_secret = required("SESSION_SECRET")?;

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {port}"))?,
            None => DEFAULT_PORT,
        };

        let environment = lookup("APP_ENV")
            .map(|env| env.trim().to_lowercase())
            .filter(|env| !env.is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(value) => parse_bool(&value)
                .with_context(|| format!("COOKIE_SECURE must be true or false, got {value}"))?,
            None => environment != "development",
        };

        Ok(Self {
            supabase_url,
            supabase_key,
            session_secret,
            port,
            environment,
            cookie_secure,
        })
    }

    pub fn payroll_config(&self) -> PayrollConfig {
        PayrollConfig {
            cookie_secure: self.cookie_secure,
            environment: self.environment.clone(),
            ..PayrollConfig::with_secret(&self.session_secret)
        }
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised boolean {other:?}"),
    }
}
