//! Sign In Use Case
//!
//! Verifies credentials with the backend and resolves the session role.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::SessionUser;
use crate::domain::repository::{AuthGateway, UserRepository};
use crate::domain::value_object::UserRole;
use crate::error::{BackendResult, PayrollError, PayrollResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<A, U>
where
    A: AuthGateway,
    U: UserRepository,
{
    auth: Arc<A>,
    users: Arc<U>,
}

impl<A, U> SignInUseCase<A, U>
where
    A: AuthGateway,
    U: UserRepository,
{
    pub fn new(auth: Arc<A>, users: Arc<U>) -> Self {
        Self { auth, users }
    }

    pub async fn execute(&self, input: SignInInput) -> PayrollResult<SessionUser> {
        let email = input.email.trim();
        // Blank credentials fail like wrong ones.
        if email.is_empty() || input.password.is_empty() {
            return Err(PayrollError::LoginFailed(
                "Email and password are required".to_string(),
            ));
        }

        let account = self
            .auth
            .sign_in_with_password(email, &input.password)
            .await
            .map_err(|e| PayrollError::from(e).login_failed())?;

        let role = resolve_role(self.users.as_ref(), &account.id)
            .await
            .map_err(|e| PayrollError::from(e).login_failed())?;

        tracing::info!(user_id = %account.id, role = %role, "User signed in");

        Ok(SessionUser::new(
            account.id,
            account.email.unwrap_or_else(|| email.to_string()),
            role,
        ))
    }
}

/// Role from the `users` table, `viewer` when the row is missing
pub(crate) async fn resolve_role<U>(users: &U, user_id: &UserId) -> BackendResult<UserRole>
where
    U: UserRepository,
{
    let record = users.find_by_id(user_id).await?;

    if record.is_none() {
        tracing::debug!(user_id = %user_id, "No users row, defaulting role");
    }

    Ok(record.map(|r| r.role()).unwrap_or_default())
}
