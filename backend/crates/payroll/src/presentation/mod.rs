//! Presentation Layer
//!
//! HTTP handlers, session middleware, DTOs and the router.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;
