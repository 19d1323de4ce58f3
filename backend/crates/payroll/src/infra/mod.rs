//! Infrastructure Layer
//!
//! Backend implementations of the repository traits.

#[cfg(test)]
pub mod memory;
pub mod supabase;
