//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

pub mod access;
pub mod validation;

pub use access::{Operation, Role};
pub use validation::{validate_residential_user, FieldError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own definition in homewatt/src/schemas.rs with the
/// same field names. We mirror it here for the frontend to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error response wrapper (mirrors the backend's ErrorResponse).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success flag (always false for errors)
    pub success: bool,
    /// Per-field validation errors, when the error is a validation failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

// ===================== Users =====================

/// User response model (mirrors backend UserResponse).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub tenant_id: String,
}

// ===================== Residential users =====================

/// Request body for creating a residential profile (mirrors backend).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateResidentialUserRequest {
    pub user_id: i32,
    pub energy_goal: Option<i32>,
    pub energy_usage: Option<i32>,
}

/// Request body for updating a residential profile (mirrors backend).
/// `user_id` stays required on update; the optional fields only replace
/// the stored values when present in the serialized body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateResidentialUserRequest {
    pub user_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_goal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_usage: Option<i32>,
}

/// Residential profile response model (mirrors backend ResidentialUserResponse).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ResidentialUserDto {
    pub id: i32,
    pub user_id: i32,
    pub energy_goal: Option<i32>,
    pub energy_usage: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Related user record, embedded on single-record reads and listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

// ===================== Session =====================

/// Caller session context echoed by the backend (mirrors backend SessionResponse).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionDto {
    pub user_id: i32,
    pub tenant_id: String,
    pub roles: Vec<String>,
}
