use crate::auth::{authorize, RequestContext};
use crate::error::AppError;
use crate::handlers::users::UserResponse;
use crate::helpers::routes::route_to_entity;
use crate::schemas::{ApiResponse, AppState};
use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode},
    response::Json,
};
use axum_valid::Valid;
use chrono::{DateTime, Utc};
use common::access::Operation;
use common::validation::validate_residential_user;
use model::entities::{residential_user, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Public route segment this handler group is mounted at. The access policy
/// is keyed by the internal entity name, so every check goes through the
/// route mapping first.
const ROUTE_SEGMENT: &str = "residential-users";

/// Residential profile response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResidentialUserResponse {
    pub id: i32,
    pub user_id: i32,
    pub energy_goal: Option<i32>,
    pub energy_usage: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Related user record, embedded when loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl ResidentialUserResponse {
    fn from_model(model: residential_user::Model, owner: Option<user::Model>) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            energy_goal: model.energy_goal,
            energy_usage: model.energy_usage,
            created_at: model.created_at,
            updated_at: model.updated_at,
            user: owner.map(UserResponse::from),
        }
    }
}

/// Query parameters for listing residential profiles
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
pub struct ResidentialUserQuery {
    /// Page number (default: 1)
    #[validate(range(min = 1, max = 10000))]
    pub page: Option<u64>,
    /// Page size (default: 50)
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u64>,
    /// Filter by owning user ID
    pub user_id: Option<i32>,
}

/// Body returned for unsupported HTTP methods
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MethodNotAllowedResponse {
    pub message: String,
}

/// Read an optional integer field out of a validated JSON body.
///
/// Returns `None` when the key is absent, `Some(None)` for an explicit
/// null, and `Some(Some(v))` for an in-range integer.
fn int_field(object: &Map<String, Value>, field: &'static str) -> Result<Option<Option<i32>>, AppError> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(value) => {
            let parsed = value.as_i64().and_then(|n| i32::try_from(n).ok()).ok_or(
                AppError::BadRequest {
                    code: "VALUE_OUT_OF_RANGE",
                    message: format!("{field} is out of range"),
                },
            )?;
            Ok(Some(Some(parsed)))
        }
    }
}

/// Validate a write body and hand back its object form.
fn validated_object(body: &Value) -> Result<&Map<String, Value>, AppError> {
    validate_residential_user(body).map_err(AppError::Validation)?;
    body.as_object().ok_or(AppError::BadRequest {
        code: "INVALID_BODY",
        message: "body must be a JSON object".to_string(),
    })
}

/// Look up the referenced user inside the caller's tenant.
///
/// A user from another tenant is reported the same way as a missing one so
/// ids cannot be probed across tenants.
async fn find_referenced_user(
    state: &AppState,
    ctx: &RequestContext,
    user_id: i32,
) -> Result<user::Model, AppError> {
    user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .filter(|owner| owner.tenant_id == ctx.tenant_id)
        .ok_or_else(|| {
            warn!("Referenced user {} not found in tenant {}", user_id, ctx.tenant_id);
            AppError::BadRequest {
                code: "USER_NOT_FOUND",
                message: format!("user {user_id} does not exist"),
            }
        })
}

/// List residential profiles
#[utoipa::path(
    get,
    path = "/api/residential-users",
    tag = "residential-users",
    params(ResidentialUserQuery),
    responses(
        (status = 200, description = "Residential users retrieved successfully", body = ApiResponse<Vec<ResidentialUserResponse>>),
        (status = 401, description = "Missing identity", body = crate::schemas::ErrorResponse),
        (status = 403, description = "Not permitted", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_residential_users(
    ctx: RequestContext,
    Valid(Query(query)): Valid<Query<ResidentialUserQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ResidentialUserResponse>>>, AppError> {
    trace!("Entering get_residential_users function");
    authorize(
        &state.db,
        &ctx,
        route_to_entity(ROUTE_SEGMENT),
        None,
        Operation::Read,
    )
    .await?;

    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(50);
    debug!("Fetching residential users - page: {}, limit: {}", page, limit);

    let mut query_builder = residential_user::Entity::find()
        .find_also_related(user::Entity)
        .filter(user::Column::TenantId.eq(ctx.tenant_id.clone()));

    // Apply filters
    if let Some(user_id) = query.user_id {
        query_builder = query_builder.filter(residential_user::Column::UserId.eq(user_id));
    }

    let rows = query_builder
        .order_by_asc(residential_user::Column::Id)
        .paginate(&state.db, limit)
        .fetch_page(page - 1)
        .await?;

    info!("Successfully retrieved {} residential users", rows.len());
    let response = ApiResponse {
        data: rows
            .into_iter()
            .map(|(profile, owner)| ResidentialUserResponse::from_model(profile, owner))
            .collect(),
        message: "Residential users retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Create a new residential profile
#[utoipa::path(
    post,
    path = "/api/residential-users",
    tag = "residential-users",
    request_body = common::CreateResidentialUserRequest,
    responses(
        (status = 201, description = "Residential user created successfully", body = ApiResponse<ResidentialUserResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 422, description = "Validation failed", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn create_residential_user(
    ctx: RequestContext,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<ApiResponse<ResidentialUserResponse>>), AppError> {
    trace!("Entering create_residential_user function");
    authorize(
        &state.db,
        &ctx,
        route_to_entity(ROUTE_SEGMENT),
        None,
        Operation::Create,
    )
    .await?;

    let object = validated_object(&body)?;
    let user_id = int_field(object, "user_id")?.flatten().ok_or(AppError::BadRequest {
        code: "INVALID_BODY",
        message: "user_id must be an integer".to_string(),
    })?;
    let energy_goal = int_field(object, "energy_goal")?.flatten();
    let energy_usage = int_field(object, "energy_usage")?.flatten();

    debug!("Creating residential user for user_id: {}", user_id);
    let owner = find_referenced_user(&state, &ctx, user_id).await?;

    let now = Utc::now();
    let new_profile = residential_user::ActiveModel {
        user_id: Set(user_id),
        energy_goal: Set(energy_goal),
        energy_usage: Set(energy_usage),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let profile = new_profile.insert(&state.db).await?;
    info!("Residential user created successfully with ID: {}", profile.id);

    let response = ApiResponse {
        data: ResidentialUserResponse::from_model(profile, Some(owner)),
        message: "Residential user created successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a specific residential profile by ID
#[utoipa::path(
    get,
    path = "/api/residential-users/{id}",
    tag = "residential-users",
    params(
        ("id" = i32, Path, description = "Residential user ID"),
    ),
    responses(
        (status = 200, description = "Residential user retrieved successfully", body = ApiResponse<ResidentialUserResponse>),
        (status = 404, description = "Residential user not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_residential_user(
    ctx: RequestContext,
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ResidentialUserResponse>>, AppError> {
    trace!("Entering get_residential_user function for id: {}", id);
    authorize(
        &state.db,
        &ctx,
        route_to_entity(ROUTE_SEGMENT),
        Some(id),
        Operation::Read,
    )
    .await?;

    let (profile, owner) = residential_user::Entity::find_by_id(id)
        .find_also_related(user::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            warn!("Residential user with ID {} not found", id);
            AppError::NotFound(format!("residential user {id}"))
        })?;

    info!("Successfully retrieved residential user with ID: {}", profile.id);
    let response = ApiResponse {
        data: ResidentialUserResponse::from_model(profile, owner),
        message: "Residential user retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Update a residential profile
///
/// The body is validated first; only the fields present in it replace the
/// stored values. Nothing is written when validation fails.
#[utoipa::path(
    put,
    path = "/api/residential-users/{id}",
    tag = "residential-users",
    params(
        ("id" = i32, Path, description = "Residential user ID"),
    ),
    request_body = common::UpdateResidentialUserRequest,
    responses(
        (status = 200, description = "Residential user updated successfully", body = ApiResponse<ResidentialUserResponse>),
        (status = 404, description = "Residential user not found", body = crate::schemas::ErrorResponse),
        (status = 422, description = "Validation failed", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn update_residential_user(
    ctx: RequestContext,
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ApiResponse<ResidentialUserResponse>>, AppError> {
    trace!("Entering update_residential_user function for id: {}", id);
    authorize(
        &state.db,
        &ctx,
        route_to_entity(ROUTE_SEGMENT),
        Some(id),
        Operation::Update,
    )
    .await?;

    let object = validated_object(&body)?;
    let user_id = int_field(object, "user_id")?.flatten().ok_or(AppError::BadRequest {
        code: "INVALID_BODY",
        message: "user_id must be an integer".to_string(),
    })?;

    // First, find the existing record
    let existing = residential_user::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            warn!("Residential user with ID {} not found for update", id);
            AppError::NotFound(format!("residential user {id}"))
        })?;

    let owner = find_referenced_user(&state, &ctx, user_id).await?;

    // Replace only the fields present in the body
    let mut profile_active = existing.into_active_model();
    profile_active.user_id = Set(user_id);
    if let Some(energy_goal) = int_field(object, "energy_goal")? {
        debug!("Updating energy_goal to: {:?}", energy_goal);
        profile_active.energy_goal = Set(energy_goal);
    }
    if let Some(energy_usage) = int_field(object, "energy_usage")? {
        debug!("Updating energy_usage to: {:?}", energy_usage);
        profile_active.energy_usage = Set(energy_usage);
    }
    profile_active.updated_at = Set(Utc::now());

    let updated = profile_active.update(&state.db).await?;
    info!("Residential user with ID {} updated successfully", updated.id);

    let response = ApiResponse {
        data: ResidentialUserResponse::from_model(updated, Some(owner)),
        message: "Residential user updated successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Delete a residential profile
#[utoipa::path(
    delete,
    path = "/api/residential-users/{id}",
    tag = "residential-users",
    params(
        ("id" = i32, Path, description = "Residential user ID"),
    ),
    responses(
        (status = 200, description = "Residential user deleted successfully", body = ApiResponse<ResidentialUserResponse>),
        (status = 404, description = "Residential user not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_residential_user(
    ctx: RequestContext,
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ResidentialUserResponse>>, AppError> {
    trace!("Entering delete_residential_user function for id: {}", id);
    authorize(
        &state.db,
        &ctx,
        route_to_entity(ROUTE_SEGMENT),
        Some(id),
        Operation::Delete,
    )
    .await?;

    // Fetch first so the response can carry the removed record
    let (profile, owner) = residential_user::Entity::find_by_id(id)
        .find_also_related(user::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            warn!("Residential user with ID {} not found for deletion", id);
            AppError::NotFound(format!("residential user {id}"))
        })?;

    residential_user::Entity::delete_by_id(id).exec(&state.db).await?;
    info!("Residential user with ID {} deleted successfully", id);

    let response = ApiResponse {
        data: ResidentialUserResponse::from_model(profile, owner),
        message: "Residential user deleted successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Reject unsupported HTTP methods with an explicit message.
#[instrument]
pub async fn method_not_allowed(method: Method) -> (StatusCode, Json<MethodNotAllowedResponse>) {
    warn!("Rejecting unsupported method: {}", method);
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MethodNotAllowedResponse {
            message: format!("Method {method} not allowed"),
        }),
    )
}
