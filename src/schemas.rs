use common::FieldError;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
    /// Per-field validation errors, present for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::session::get_session,
        crate::handlers::users::get_users,
        crate::handlers::users::get_user,
        crate::handlers::residential_users::get_residential_users,
        crate::handlers::residential_users::create_residential_user,
        crate::handlers::residential_users::get_residential_user,
        crate::handlers::residential_users::update_residential_user,
        crate::handlers::residential_users::delete_residential_user,
    ),
    components(
        schemas(
            ApiResponse<crate::handlers::residential_users::ResidentialUserResponse>,
            ApiResponse<Vec<crate::handlers::residential_users::ResidentialUserResponse>>,
            ApiResponse<crate::handlers::users::UserResponse>,
            ApiResponse<Vec<crate::handlers::users::UserResponse>>,
            ApiResponse<crate::handlers::session::SessionResponse>,
            ErrorResponse,
            HealthResponse,
            FieldError,
            common::CreateResidentialUserRequest,
            common::UpdateResidentialUserRequest,
            crate::handlers::residential_users::ResidentialUserResponse,
            crate::handlers::residential_users::ResidentialUserQuery,
            crate::handlers::residential_users::MethodNotAllowedResponse,
            crate::handlers::users::UserResponse,
            crate::handlers::session::SessionResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "session", description = "Caller session context"),
        (name = "users", description = "User listing endpoints"),
        (name = "residential-users", description = "Residential profile administration"),
    ),
    info(
        title = "HomeWatt API",
        description = "Home Energy Administration API - residential profile management for a multi-tenant platform",
        version = "0.1.0",
        contact(
            name = "HomeWatt Team",
            email = "contact@homewatt.dev"
        ),
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
