//! Supabase REST Client
//!
//! Table access through the PostgREST API (`/rest/v1`) and account
//! operations through the GoTrue API (`/auth/v1`). Every failure surfaces
//! immediately; nothing is retried.

use kernel::id::{EmployeeId, UserId};
use reqwest::header::{CONTENT_RANGE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::domain::entity::{
    AuthUser, Employee, EmployeeChanges, NewEmployee, NewPayslip, NewUser, Payslip, UserRecord,
};
use crate::domain::repository::{
    AuthGateway, EmployeeRepository, HealthCheck, PayslipRepository, UserRepository,
};
use crate::error::{BackendError, BackendResult};

pub const USERS_TABLE: &str = "users";
pub const EMPLOYEES_TABLE: &str = "employees";
pub const PAYSLIPS_TABLE: &str = "payslips";

/// Supabase-backed implementation of every repository trait
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: &str) -> BackendResult<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key)
            .map_err(|_| BackendError::Decode("API key is not a valid header value".to_string()))?;
        headers.insert("apikey", key);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn rest(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/rest/v1/{}", self.base_url, table))
            .bearer_auth(&self.api_key)
    }

    fn auth(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/auth/v1/{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> BackendResult<Vec<T>> {
        let request = self
            .rest(Method::GET, table)
            .query(&[("select", "*")])
            .query(query);

        read_json(send(request).await?).await
    }

    async fn insert<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        rows: &B,
    ) -> BackendResult<Vec<T>> {
        let request = self
            .rest(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(rows);

        read_json(send(request).await?).await
    }

    async fn count_rows(&self, table: &str) -> BackendResult<u64> {
        let request = self
            .rest(Method::GET, table)
            .header("Prefer", "count=exact")
            .query(&[("select", "id"), ("limit", "1")]);

        let response = send(request).await?;
        let range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| BackendError::Decode(format!("{} count: no Content-Range", table)))?;

        parse_content_range(range).ok_or_else(|| {
            BackendError::Decode(format!("{} count: bad Content-Range {:?}", table, range))
        })
    }

    async fn auth_user(&self, request: RequestBuilder) -> BackendResult<AuthUser> {
        let body: Value = read_json(send(request).await?).await?;
        auth_user_from(body)
    }
}

/// Send a request and turn any non-2xx status into [`BackendError::Api`]
async fn send(request: RequestBuilder) -> BackendResult<Response> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = extract_error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Backend error").to_string());

    tracing::debug!(status = status.as_u16(), message = %message, "Backend returned error");
    Err(BackendError::api(status.as_u16(), message))
}

/// Parse a successful response body; a malformed body is a decode error
async fn read_json<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Error text from a PostgREST or GoTrue error body
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        return Some(trimmed.to_string());
    };

    ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .or_else(|| Some(trimmed.to_string()))
}

/// Total row count from a `Content-Range` header (`0-0/42`, `*/0`)
pub fn parse_content_range(value: &str) -> Option<u64> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.parse().ok()
}

/// Account from a GoTrue response: either `{user: {...}}` or the user itself
pub fn auth_user_from(body: Value) -> BackendResult<AuthUser> {
    let user = match body {
        Value::Object(mut map) if map.get("user").is_some_and(Value::is_object) => {
            map.remove("user").unwrap_or_default()
        }
        other => other,
    };

    serde_json::from_value(user).map_err(|e| BackendError::Decode(e.to_string()))
}

// ============================================================================
// Auth Gateway Implementation
// ============================================================================

impl AuthGateway for SupabaseClient {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> BackendResult<AuthUser> {
        let request = self
            .auth(Method::POST, "token")
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));

        self.auth_user(request).await
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> BackendResult<AuthUser> {
        let request = self.auth(Method::POST, "signup").json(&json!({
            "email": email,
            "password": password,
            "data": { "name": name },
        }));

        self.auth_user(request).await
    }

    async fn exchange_code_for_session(&self, code: &str) -> BackendResult<AuthUser> {
        let request = self
            .auth(Method::POST, "token")
            .query(&[("grant_type", "pkce")])
            .json(&json!({ "auth_code": code }));

        self.auth_user(request).await
    }

    async fn send_password_reset(&self, email: &str) -> BackendResult<()> {
        let request = self
            .auth(Method::POST, "recover")
            .json(&json!({ "email": email }));

        send(request).await?;
        Ok(())
    }

    async fn update_password(&self, user_id: &UserId, new_password: &str) -> BackendResult<()> {
        let request = self
            .auth(Method::PUT, &format!("admin/users/{}", user_id))
            .json(&json!({ "password": new_password }));

        send(request).await?;
        Ok(())
    }
}

// ============================================================================
// Table Repository Implementations
// ============================================================================

impl UserRepository for SupabaseClient {
    async fn find_by_id(&self, user_id: &UserId) -> BackendResult<Option<UserRecord>> {
        let rows: Vec<UserRecord> = self
            .select(USERS_TABLE, &[("id", format!("eq.{}", user_id))])
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn create(&self, user: &NewUser) -> BackendResult<()> {
        let _: Vec<Value> = self.insert(USERS_TABLE, std::slice::from_ref(user)).await?;
        Ok(())
    }

    async fn count(&self) -> BackendResult<u64> {
        self.count_rows(USERS_TABLE).await
    }
}

impl EmployeeRepository for SupabaseClient {
    async fn list(&self) -> BackendResult<Vec<Employee>> {
        self.select(EMPLOYEES_TABLE, &[]).await
    }

    async fn create(&self, employee: &NewEmployee) -> BackendResult<Vec<Employee>> {
        self.insert(EMPLOYEES_TABLE, std::slice::from_ref(employee))
            .await
    }

    async fn update(
        &self,
        employee_id: &EmployeeId,
        changes: &EmployeeChanges,
    ) -> BackendResult<Vec<Employee>> {
        let request = self
            .rest(Method::PATCH, EMPLOYEES_TABLE)
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{}", employee_id))])
            .json(changes);

        read_json(send(request).await?).await
    }

    async fn delete(&self, employee_id: &EmployeeId) -> BackendResult<()> {
        let request = self
            .rest(Method::DELETE, EMPLOYEES_TABLE)
            .query(&[("id", format!("eq.{}", employee_id))]);

        send(request).await?;
        Ok(())
    }

    async fn count(&self) -> BackendResult<u64> {
        self.count_rows(EMPLOYEES_TABLE).await
    }
}

impl PayslipRepository for SupabaseClient {
    async fn list(&self) -> BackendResult<Vec<Payslip>> {
        self.select(PAYSLIPS_TABLE, &[]).await
    }

    async fn create(&self, payslip: &NewPayslip) -> BackendResult<Vec<Payslip>> {
        self.insert(PAYSLIPS_TABLE, std::slice::from_ref(payslip))
            .await
    }

    async fn recent(&self, limit: usize) -> BackendResult<Vec<Payslip>> {
        self.select(
            PAYSLIPS_TABLE,
            &[
                ("order", "date.desc".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn count(&self) -> BackendResult<u64> {
        self.count_rows(PAYSLIPS_TABLE).await
    }
}

impl HealthCheck for SupabaseClient {
    async fn ping(&self) -> BackendResult<()> {
        let request = self
            .rest(Method::GET, USERS_TABLE)
            .query(&[("select", "id"), ("limit", "1")]);

        send(request).await?;
        Ok(())
    }
}
