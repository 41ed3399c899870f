use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::models::{
    CostRecord, Credentials, CustomerService, DashboardSummary, LoginResponse,
    NewCustomerService, SpendEntry,
};
use crate::store::read_stored_token;

pub const API_BASE: &str = "/api";

/// The only failure kinds this client distinguishes: the request never
/// completed, or the backend answered with a non-2xx status.
#[derive(Clone, PartialEq, Debug)]
pub enum ApiError {
    Transport(String),
    Status { code: u16, message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(message) => write!(f, "{message}"),
            ApiError::Status { message, .. } => write!(f, "{message}"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CostAction {
    Approve,
    Reject,
}

impl CostAction {
    fn path_segment(&self) -> &'static str {
        match self {
            CostAction::Approve => "approve",
            CostAction::Reject => "reject",
        }
    }
}

pub fn login_url() -> String {
    format!("{API_BASE}/auth/login")
}

pub fn dashboard_url() -> String {
    format!("{API_BASE}/dashboard")
}

pub fn costs_url() -> String {
    format!("{API_BASE}/costs")
}

pub fn cost_action_url(id: i64, action: CostAction) -> String {
    format!("{API_BASE}/costs/{id}/{}", action.path_segment())
}

pub fn customer_services_url() -> String {
    format!("{API_BASE}/customer-services")
}

pub fn spend_history_url() -> String {
    format!("{API_BASE}/spend-history")
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Attaches the stored session token, when there is one.
fn bearer(builder: RequestBuilder) -> RequestBuilder {
    match read_stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Pulls the backend's `message` field out of an error body, falling back
/// to the raw body and then to the bare status code.
fn message_from_body(code: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });
    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => format!("HTTP {code}"),
    }
}

async fn status_error(resp: Response) -> ApiError {
    let code = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Status {
        code,
        message: message_from_body(code, &body),
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = bearer(Request::get(url)).send().await.map_err(transport)?;
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<T>().await.map_err(transport)
}

pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    let resp = Request::post(&login_url())
        .json(credentials)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<LoginResponse>().await.map_err(transport)
}

pub async fn fetch_dashboard() -> Result<DashboardSummary, ApiError> {
    get_json(&dashboard_url()).await
}

pub async fn fetch_costs() -> Result<Vec<CostRecord>, ApiError> {
    get_json(&costs_url()).await
}

/// Sends an approve/reject intent. The client never computes the resulting
/// status itself; callers re-fetch the list on success.
async fn resolve_cost(id: i64, action: CostAction) -> Result<(), ApiError> {
    let resp = bearer(Request::post(&cost_action_url(id, action)))
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    Ok(())
}

pub async fn approve_cost(id: i64) -> Result<(), ApiError> {
    resolve_cost(id, CostAction::Approve).await
}

pub async fn reject_cost(id: i64) -> Result<(), ApiError> {
    resolve_cost(id, CostAction::Reject).await
}

pub async fn fetch_customer_services() -> Result<Vec<CustomerService>, ApiError> {
    get_json(&customer_services_url()).await
}

pub async fn create_customer_service(
    new_service: &NewCustomerService,
) -> Result<CustomerService, ApiError> {
    let resp = bearer(Request::post(&customer_services_url()))
        .json(new_service)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<CustomerService>().await.map_err(transport)
}

pub async fn fetch_spend_history() -> Result<Vec<SpendEntry>, ApiError> {
    get_json(&spend_history_url()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_live_under_the_api_base() {
        assert_eq!(login_url(), "/api/auth/login");
        assert_eq!(dashboard_url(), "/api/dashboard");
        assert_eq!(costs_url(), "/api/costs");
        assert_eq!(customer_services_url(), "/api/customer-services");
        assert_eq!(spend_history_url(), "/api/spend-history");
    }

    #[test]
    fn cost_action_urls_carry_the_record_id() {
        assert_eq!(cost_action_url(7, CostAction::Approve), "/api/costs/7/approve");
        assert_eq!(cost_action_url(42, CostAction::Reject), "/api/costs/42/reject");
    }

    #[test]
    fn error_message_prefers_the_backend_message_field() {
        assert_eq!(
            message_from_body(401, r#"{"message":"Invalid credentials"}"#),
            "Invalid credentials"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_status() {
        assert_eq!(message_from_body(500, "boom"), "boom");
        assert_eq!(message_from_body(502, "  "), "HTTP 502");
        assert_eq!(message_from_body(404, r#"{"error":"nope"}"#), r#"{"error":"nope"}"#);
    }

    #[test]
    fn api_error_displays_the_message_only() {
        let err = ApiError::Status {
            code: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        let err = ApiError::Transport("network error".to_string());
        assert_eq!(err.to_string(), "network error");
    }
}
