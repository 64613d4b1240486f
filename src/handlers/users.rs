use crate::auth::{authorize, RequestContext};
use crate::error::AppError;
use crate::schemas::{ApiResponse, AppState};
use axum::{
    extract::{Path, State},
    response::Json,
};
use common::access::Operation;
use model::entities::user;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;

/// User response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub tenant_id: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            tenant_id: model.tenant_id,
        }
    }
}

/// List users in the caller's tenant
///
/// Backs the user selector on the residential profile forms; options are
/// labeled by email on the client side.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = ApiResponse<Vec<UserResponse>>),
        (status = 401, description = "Missing identity", body = crate::schemas::ErrorResponse),
        (status = 403, description = "Not permitted", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(
    ctx: RequestContext,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    trace!("Entering get_users function");
    authorize(&state.db, &ctx, "user", None, Operation::Read).await?;

    debug!("Fetching users for tenant: {}", ctx.tenant_id);
    let users = user::Entity::find()
        .filter(user::Column::TenantId.eq(ctx.tenant_id.clone()))
        .order_by_asc(user::Column::Email)
        .all(&state.db)
        .await?;

    info!("Successfully retrieved {} users", users.len());
    let response = ApiResponse {
        data: users.into_iter().map(UserResponse::from).collect(),
        message: "Users retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    ctx: RequestContext,
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    trace!("Entering get_user function for user_id: {}", user_id);
    authorize(&state.db, &ctx, "user", Some(user_id), Operation::Read).await?;

    let user_model = user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        // A user from another tenant is indistinguishable from a missing one.
        .filter(|u| u.tenant_id == ctx.tenant_id)
        .ok_or_else(|| {
            warn!("User with ID {} not found", user_id);
            AppError::NotFound(format!("user {user_id}"))
        })?;

    info!(
        "Successfully retrieved user with ID: {}, email: {}",
        user_model.id, user_model.email
    );
    let response = ApiResponse {
        data: UserResponse::from(user_model),
        message: "User retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
