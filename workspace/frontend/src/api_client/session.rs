use crate::api_client;
pub use ::common::SessionDto;

/// Fetch the caller's session context
pub async fn get_session() -> Result<SessionDto, String> {
    log::trace!("Fetching session context");
    let result = api_client::get("/session").await;
    match &result {
        Ok(session) => log::info!(
            "Fetched session for user {} (tenant: {})",
            session.user_id,
            session.tenant_id
        ),
        Err(e) => log::error!("Failed to fetch session: {}", e),
    }
    result
}
