//! Password Use Case
//!
//! Recovery and change are both proxied to the backend auth API.

use std::sync::Arc;

use crate::domain::entity::SessionUser;
use crate::domain::repository::AuthGateway;
use crate::error::{PayrollError, PayrollResult};

pub struct PasswordUseCase<A>
where
    A: AuthGateway,
{
    auth: Arc<A>,
}

impl<A> PasswordUseCase<A>
where
    A: AuthGateway,
{
    pub fn new(auth: Arc<A>) -> Self {
        Self { auth }
    }

    /// Ask the backend to send a recovery email
    pub async fn reset(&self, email: &str) -> PayrollResult<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(PayrollError::InvalidInput("Email is required".to_string()));
        }

        self.auth
            .send_password_reset(email)
            .await
            .map_err(|e| PayrollError::from(e).rejected())?;

        tracing::info!("Password reset requested");
        Ok(())
    }

    /// Change the password of the session's account
    pub async fn update(&self, user: &SessionUser, new_password: &str) -> PayrollResult<()> {
        if new_password.is_empty() {
            return Err(PayrollError::InvalidInput(
                "New password is required".to_string(),
            ));
        }

        self.auth
            .update_password(&user.id, new_password)
            .await
            .map_err(|e| PayrollError::from(e).rejected())?;

        tracing::info!(user_id = %user.id, "Password updated");
        Ok(())
    }
}
