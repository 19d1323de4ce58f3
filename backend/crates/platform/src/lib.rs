//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC signing, Base64)
//! - Cookie management
//! - Request latency logging middleware

pub mod cookie;
pub mod crypto;
pub mod latency;
