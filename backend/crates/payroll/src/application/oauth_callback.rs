//! OAuth Callback Use Case
//!
//! Turns an authorization code from the backend's OAuth flow into a
//! session user.

use std::sync::Arc;

use crate::application::sign_in::resolve_role;
use crate::domain::entity::SessionUser;
use crate::domain::repository::{AuthGateway, UserRepository};
use crate::error::{PayrollError, PayrollResult};

pub struct OAuthCallbackUseCase<A, U>
where
    A: AuthGateway,
    U: UserRepository,
{
    auth: Arc<A>,
    users: Arc<U>,
}

impl<A, U> OAuthCallbackUseCase<A, U>
where
    A: AuthGateway,
    U: UserRepository,
{
    pub fn new(auth: Arc<A>, users: Arc<U>) -> Self {
        Self { auth, users }
    }

    pub async fn execute(&self, code: &str) -> PayrollResult<SessionUser> {
        if code.is_empty() {
            return Err(PayrollError::InvalidInput("Missing code".to_string()));
        }

        let account = self.auth.exchange_code_for_session(code).await?;
        let role = resolve_role(self.users.as_ref(), &account.id).await?;

        tracing::info!(user_id = %account.id, role = %role, "OAuth sign in completed");

        Ok(SessionUser::new(
            account.id,
            account.email.unwrap_or_default(),
            role,
        ))
    }
}
