//! Authorization Guards
//!
//! Pure predicates over session state. They reject, nothing more.

use crate::domain::entity::SessionUser;
use crate::error::{PayrollError, PayrollResult};

/// Any logged-in user
pub fn require_session(session: Option<SessionUser>) -> PayrollResult<SessionUser> {
    session.ok_or(PayrollError::Unauthenticated)
}

/// Logged-in user whose role is `admin`
pub fn require_admin(session: &SessionUser) -> PayrollResult<()> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(PayrollError::Forbidden)
    }
}
