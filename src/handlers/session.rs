use crate::auth::RequestContext;
use crate::schemas::ApiResponse;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};
use utoipa::ToSchema;

/// Caller session context as seen by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub user_id: i32,
    pub tenant_id: String,
    pub roles: Vec<String>,
}

/// Echo the authenticated caller's context.
///
/// The frontend uses this to gate the create/edit pages on the caller's
/// permissions before rendering them.
#[utoipa::path(
    get,
    path = "/api/session",
    tag = "session",
    responses(
        (status = 200, description = "Session context", body = ApiResponse<SessionResponse>),
        (status = 401, description = "Missing or invalid identity", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_session(ctx: RequestContext) -> Json<ApiResponse<SessionResponse>> {
    trace!("Entering get_session function");

    let response = ApiResponse {
        data: SessionResponse {
            user_id: ctx.user_id,
            tenant_id: ctx.tenant_id.clone(),
            roles: ctx.roles.iter().map(|role| role.to_string()).collect(),
        },
        message: "Session retrieved successfully".to_string(),
        success: true,
    };
    Json(response)
}
