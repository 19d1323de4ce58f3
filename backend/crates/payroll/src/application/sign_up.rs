//! Sign Up Use Case
//!
//! Registers the account with the backend and records it in `users` with
//! the default role.

use std::sync::Arc;

use crate::domain::entity::{NewUser, SessionUser};
use crate::domain::repository::{AuthGateway, UserRepository};
use crate::domain::value_object::UserRole;
use crate::error::{PayrollError, PayrollResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<A, U>
where
    A: AuthGateway,
    U: UserRepository,
{
    auth: Arc<A>,
    users: Arc<U>,
}

impl<A, U> SignUpUseCase<A, U>
where
    A: AuthGateway,
    U: UserRepository,
{
    pub fn new(auth: Arc<A>, users: Arc<U>) -> Self {
        Self { auth, users }
    }

    pub async fn execute(&self, input: SignUpInput) -> PayrollResult<SessionUser> {
        let name = input.name.trim();
        let email = input.email.trim();

        if name.is_empty() || email.is_empty() || input.password.is_empty() {
            return Err(PayrollError::InvalidInput(
                "Name, email and password are required".to_string(),
            ));
        }

        let account = self
            .auth
            .sign_up(name, email, &input.password)
            .await
            .map_err(|e| PayrollError::from(e).rejected())?;

        let email = account.email.clone().unwrap_or_else(|| email.to_string());

        let user = NewUser {
            id: account.id.clone(),
            email: email.clone(),
            name: name.to_string(),
            role: UserRole::default(),
        };

        self.users
            .create(&user)
            .await
            .map_err(|e| PayrollError::from(e).rejected())?;

        tracing::info!(user_id = %account.id, "User signed up");

        Ok(SessionUser::new(account.id, email, user.role))
    }
}
