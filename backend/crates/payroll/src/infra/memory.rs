//! In-Memory Backend
//!
//! A stand-in for the Supabase service that keeps every table in process.
//! It answers with the same error shapes as the real service, can be
//! switched into an outage, and counts delete calls so tests can check
//! that a rejected request never reached the backend.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{EmployeeId, UserId};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entity::{
    AuthUser, Employee, EmployeeChanges, NewEmployee, NewPayslip, NewUser, Payslip, UserRecord,
};
use crate::domain::repository::{
    AuthGateway, EmployeeRepository, HealthCheck, PayslipRepository, UserRepository,
};
use crate::domain::value_object::UserRole;
use crate::error::{BackendError, BackendResult};

#[derive(Debug, Clone)]
struct Account {
    id: UserId,
    email: String,
    password: String,
}

#[derive(Debug, Default)]
struct MemoryState {
    accounts: Vec<Account>,
    oauth_codes: HashMap<String, UserId>,
    users: Vec<UserRecord>,
    employees: Vec<Employee>,
    payslips: Vec<Payslip>,
    reset_requests: Vec<String>,
    delete_calls: usize,
    unavailable: bool,
}

impl MemoryState {
    fn available(&self) -> BackendResult<()> {
        if self.unavailable {
            Err(BackendError::api(503, "Service unavailable"))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account; `role` also creates its `users` row
    pub async fn add_account(&self, email: &str, password: &str, role: Option<UserRole>) -> UserId {
        let id: UserId = Uuid::new_v4().to_string().into();
        let mut state = self.state.lock().await;

        state.accounts.push(Account {
            id: id.clone(),
            email: email.to_string(),
            password: password.to_string(),
        });

        if let Some(role) = role {
            state.users.push(UserRecord {
                id: id.clone(),
                email: Some(email.to_string()),
                name: None,
                role: Some(role.code().to_string()),
            });
        }

        id
    }

    /// Make `code` redeemable for the account `user_id`
    pub async fn add_oauth_code(&self, code: &str, user_id: &UserId) {
        let mut state = self.state.lock().await;
        state.oauth_codes.insert(code.to_string(), user_id.clone());
    }

    /// Simulate an outage: every call fails with 503
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().await.unavailable = unavailable;
    }

    pub async fn delete_calls(&self) -> usize {
        self.state.lock().await.delete_calls
    }

    pub async fn users(&self) -> Vec<UserRecord> {
        self.state.lock().await.users.clone()
    }

    pub async fn employees(&self) -> Vec<Employee> {
        self.state.lock().await.employees.clone()
    }

    /// Store a row verbatim, as if another client had written it
    pub async fn insert_employee_row(&self, row: Map<String, Value>) {
        self.state.lock().await.employees.push(Employee::from_fields(row));
    }

    pub async fn insert_payslip_row(&self, row: Map<String, Value>) {
        self.state.lock().await.payslips.push(Payslip::from_fields(row));
    }

    pub async fn reset_requests(&self) -> Vec<String> {
        self.state.lock().await.reset_requests.clone()
    }

    pub async fn password_of(&self, email: &str) -> Option<String> {
        let state = self.state.lock().await;
        state
            .accounts
            .iter()
            .find(|a| a.email == email)
            .map(|a| a.password.clone())
    }
}

/// Give an insert payload a fresh id, as the table default would
fn materialize<N: Serialize>(row: &N) -> BackendResult<Map<String, Value>> {
    let mut map = to_object(row)?;
    map.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    Ok(map)
}

fn to_object<N: Serialize>(row: &N) -> BackendResult<Map<String, Value>> {
    match serde_json::to_value(row).map_err(decode)? {
        Value::Object(map) => Ok(map),
        _ => Err(BackendError::Decode("payload is not an object".to_string())),
    }
}

fn decode(err: serde_json::Error) -> BackendError {
    BackendError::Decode(err.to_string())
}

// ============================================================================
// Auth Gateway Implementation
// ============================================================================

impl AuthGateway for InMemoryBackend {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> BackendResult<AuthUser> {
        let state = self.state.lock().await;
        state.available()?;

        state
            .accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(|a| AuthUser {
                id: a.id.clone(),
                email: Some(a.email.clone()),
            })
            .ok_or_else(|| BackendError::api(400, "Invalid login credentials"))
    }

    async fn sign_up(&self, _name: &str, email: &str, password: &str) -> BackendResult<AuthUser> {
        let mut state = self.state.lock().await;
        state.available()?;

        if state.accounts.iter().any(|a| a.email == email) {
            return Err(BackendError::api(422, "User already registered"));
        }

        let account = Account {
            id: Uuid::new_v4().to_string().into(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = AuthUser {
            id: account.id.clone(),
            email: Some(account.email.clone()),
        };
        state.accounts.push(account);

        Ok(user)
    }

    async fn exchange_code_for_session(&self, code: &str) -> BackendResult<AuthUser> {
        let mut state = self.state.lock().await;
        state.available()?;

        let user_id = state
            .oauth_codes
            .remove(code)
            .ok_or_else(|| BackendError::api(404, "Invalid authorization code"))?;

        state
            .accounts
            .iter()
            .find(|a| a.id == user_id)
            .map(|a| AuthUser {
                id: a.id.clone(),
                email: Some(a.email.clone()),
            })
            .ok_or_else(|| BackendError::api(404, "User not found"))
    }

    async fn send_password_reset(&self, email: &str) -> BackendResult<()> {
        let mut state = self.state.lock().await;
        state.available()?;

        // Unknown addresses are accepted silently, like the real service.
        state.reset_requests.push(email.to_string());
        Ok(())
    }

    async fn update_password(&self, user_id: &UserId, new_password: &str) -> BackendResult<()> {
        let mut state = self.state.lock().await;
        state.available()?;

        let account = state
            .accounts
            .iter_mut()
            .find(|a| &a.id == user_id)
            .ok_or_else(|| BackendError::api(404, "User not found"))?;
        account.password = new_password.to_string();
        Ok(())
    }
}

// ============================================================================
// Table Repository Implementations
// ============================================================================

impl UserRepository for InMemoryBackend {
    async fn find_by_id(&self, user_id: &UserId) -> BackendResult<Option<UserRecord>> {
        let state = self.state.lock().await;
        state.available()?;
        Ok(state.users.iter().find(|u| &u.id == user_id).cloned())
    }

    async fn create(&self, user: &NewUser) -> BackendResult<()> {
        let mut state = self.state.lock().await;
        state.available()?;

        if state.users.iter().any(|u| u.id == user.id) {
            return Err(BackendError::api(
                409,
                "duplicate key value violates unique constraint \"users_pkey\"",
            ));
        }

        state.users.push(UserRecord {
            id: user.id.clone(),
            email: Some(user.email.clone()),
            name: Some(user.name.clone()),
            role: Some(user.role.code().to_string()),
        });
        Ok(())
    }

    async fn count(&self) -> BackendResult<u64> {
        let state = self.state.lock().await;
        state.available()?;
        Ok(state.users.len() as u64)
    }
}

impl EmployeeRepository for InMemoryBackend {
    async fn list(&self) -> BackendResult<Vec<Employee>> {
        let state = self.state.lock().await;
        state.available()?;
        Ok(state.employees.clone())
    }

    async fn create(&self, employee: &NewEmployee) -> BackendResult<Vec<Employee>> {
        let mut state = self.state.lock().await;
        state.available()?;

        let stored = Employee::from_fields(materialize(employee)?);
        state.employees.push(stored.clone());
        Ok(vec![stored])
    }

    async fn update(
        &self,
        employee_id: &EmployeeId,
        changes: &EmployeeChanges,
    ) -> BackendResult<Vec<Employee>> {
        let mut state = self.state.lock().await;
        state.available()?;

        let patch = to_object(changes)?;

        let mut updated = Vec::new();
        for employee in state
            .employees
            .iter_mut()
            .filter(|e| e.has_id(employee_id.as_str()))
        {
            employee.fields_mut().extend(patch.clone());
            updated.push(employee.clone());
        }

        Ok(updated)
    }

    async fn delete(&self, employee_id: &EmployeeId) -> BackendResult<()> {
        let mut state = self.state.lock().await;
        state.available()?;

        state.delete_calls += 1;
        state.employees.retain(|e| !e.has_id(employee_id.as_str()));
        Ok(())
    }

    async fn count(&self) -> BackendResult<u64> {
        let state = self.state.lock().await;
        state.available()?;
        Ok(state.employees.len() as u64)
    }
}

impl PayslipRepository for InMemoryBackend {
    async fn list(&self) -> BackendResult<Vec<Payslip>> {
        let state = self.state.lock().await;
        state.available()?;
        Ok(state.payslips.clone())
    }

    async fn create(&self, payslip: &NewPayslip) -> BackendResult<Vec<Payslip>> {
        let mut state = self.state.lock().await;
        state.available()?;

        let stored = Payslip::from_fields(materialize(payslip)?);
        state.payslips.push(stored.clone());
        Ok(vec![stored])
    }

    async fn recent(&self, limit: usize) -> BackendResult<Vec<Payslip>> {
        let state = self.state.lock().await;
        state.available()?;

        let mut payslips = state.payslips.clone();
        // Option orders None first, so reversing puts undated rows last.
        payslips.sort_by_key(|p| std::cmp::Reverse(p.date()));
        payslips.truncate(limit);
        Ok(payslips)
    }

    async fn count(&self) -> BackendResult<u64> {
        let state = self.state.lock().await;
        state.available()?;
        Ok(state.payslips.len() as u64)
    }
}

impl HealthCheck for InMemoryBackend {
    async fn ping(&self) -> BackendResult<()> {
        self.state.lock().await.available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use serde_json::json;

    #[tokio::test]
    async fn test_recent_orders_newest_first() {
        let backend = InMemoryBackend::new();
        let now = Utc::now();

        for days in [3, 1, 2] {
            let payslip = NewPayslip {
                employee_id: "e1".into(),
                amount: 100.into(),
                date: now - Duration::days(days),
                fields: Map::new(),
            };
            PayslipRepository::create(&backend, &payslip).await.unwrap();
        }

        let recent = backend.recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].date() > recent[1].date());
        assert_eq!(
            recent[0].date().map(|d| d.with_timezone(&Utc)),
            Some(now - Duration::days(1))
        );
    }

    #[tokio::test]
    async fn test_unavailable_fails_every_call() {
        let backend = InMemoryBackend::new();
        backend.set_unavailable(true).await;

        assert!(backend.ping().await.is_err());
        assert!(EmployeeRepository::list(&backend).await.is_err());
        assert!(
            backend
                .sign_in_with_password("a@example.com", "pw")
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_update_merges_changes() {
        let backend = InMemoryBackend::new();
        let employee = NewEmployee {
            name: "Ada".to_string(),
            position: Some("Engineer".to_string()),
            created_by: "admin".into(),
            fields: Map::new(),
        };
        let created = EmployeeRepository::create(&backend, &employee).await.unwrap();
        let id: EmployeeId = created[0].get("id").and_then(Value::as_str).unwrap().into();

        let mut fields = Map::new();
        fields.insert("position".to_string(), Value::String("Lead".to_string()));
        let changes = EmployeeChanges {
            fields,
            updated_at: Utc::now(),
        };

        let updated = backend.update(&id, &changes).await.unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].get("name"), Some(&json!("Ada")));
        assert_eq!(updated[0].get("position"), Some(&json!("Lead")));
        assert!(updated[0].get("updated_at").is_some_and(Value::is_string));
    }

    #[tokio::test]
    async fn test_seeded_rows_are_returned_verbatim() {
        let backend = InMemoryBackend::new();
        let Value::Object(row) = json!({"id": 7, "name": null, "salary": 1000}) else {
            unreachable!()
        };
        backend.insert_employee_row(row.clone()).await;

        let listed = EmployeeRepository::list(&backend).await.unwrap();
        assert_eq!(serde_json::to_value(&listed).unwrap(), json!([row]));

        backend.delete(&"7".into()).await.unwrap();
        assert!(backend.employees().await.is_empty());
    }
}
