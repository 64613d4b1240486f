pub mod residential_user;
pub mod session;
pub mod user;

use crate::settings;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

// API_BASE is retrieved from settings
fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// API Response wrapper
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
    pub success: bool,
}

/// Error Response
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub success: bool,
}

/// Attach the session identity headers.
///
/// The platform gateway injects these in production; during development the
/// values come from settings so the backend sees a complete session.
fn with_session(builder: RequestBuilder) -> RequestBuilder {
    let settings = settings::get_settings();
    builder
        .header("X-User-Id", &settings.session_user_id.to_string())
        .header("X-Tenant-Id", &settings.session_tenant_id)
        .header("X-Roles", &settings.session_roles)
}

/// Turn a non-OK response into the server's error message.
async fn error_message(method: &str, endpoint: &str, response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(err) => {
            log::error!("{} {} - API error: {}", method, endpoint, err.error);
            format!("Error: {}", err.error)
        }
        Err(_) => {
            let error_msg = format!("HTTP error: {}", status);
            log::error!("{} {} - {}", method, endpoint, error_msg);
            error_msg
        }
    }
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = with_session(Request::get(&url))
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        return Err(error_message("GET", endpoint, response).await);
    }

    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = with_session(Request::post(&url))
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        return Err(error_message("POST", endpoint, response).await);
    }

    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(api_response.data)
}

/// Common PUT request handler
pub async fn put<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("PUT request to: {}", url);

    let response = with_session(Request::put(&url))
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("PUT {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("PUT {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("PUT {} - Non-OK response: {}", endpoint, response.status());
        return Err(error_message("PUT", endpoint, response).await);
    }

    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("PUT {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("PUT {} - Success", endpoint);
    Ok(api_response.data)
}

/// Common DELETE request handler
pub async fn delete<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("DELETE request to: {}", url);

    let response = with_session(Request::delete(&url))
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("DELETE {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("DELETE {} - Non-OK response: {}", endpoint, response.status());
        return Err(error_message("DELETE", endpoint, response).await);
    }

    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("DELETE {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("DELETE {} - Success", endpoint);
    Ok(api_response.data)
}
