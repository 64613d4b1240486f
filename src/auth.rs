//! Request-scoped caller context and the authorization gate.
//!
//! The platform session provider terminates in front of this service and
//! forwards the caller's identity as headers (`X-User-Id`, `X-Tenant-Id`,
//! `X-Roles`). The extractor below turns those into an explicit
//! [`RequestContext`] passed through every handler; nothing reads session
//! state from globals.

use crate::error::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use common::access::{any_role_allows, Operation, Role};
use model::entities::{residential_user, user};
use sea_orm::{DatabaseConnection, EntityTrait};

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "X-User-Id";
/// Header carrying the caller's tenant.
pub const TENANT_ID_HEADER: &str = "X-Tenant-Id";
/// Header carrying the caller's roles, comma separated.
pub const ROLES_HEADER: &str = "X-Roles";

/// Identity, tenant, and roles of the caller for one request.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub user_id: i32,
    pub tenant_id: String,
    pub roles: Vec<Role>,
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_value(parts, USER_ID_HEADER)
            .ok_or_else(|| AppError::Unauthorized("missing session identity".to_string()))?
            .parse::<i32>()
            .map_err(|_| AppError::Unauthorized("invalid session identity".to_string()))?;

        let tenant_id = header_value(parts, TENANT_ID_HEADER)
            .ok_or_else(|| AppError::Unauthorized("missing tenant".to_string()))?
            .to_string();

        let roles = header_value(parts, ROLES_HEADER)
            .ok_or_else(|| AppError::Unauthorized("missing roles".to_string()))?
            .split(',')
            .map(str::parse::<Role>)
            .collect::<Result<Vec<Role>, _>>()
            .map_err(AppError::Unauthorized)?;

        if roles.is_empty() {
            return Err(AppError::Unauthorized("missing roles".to_string()));
        }

        Ok(RequestContext {
            user_id,
            tenant_id,
            roles,
        })
    }
}

/// Check that the caller may perform `operation` on `entity`, optionally
/// scoped to a specific record.
///
/// The role policy comes from the shared access table. For record-scoped
/// residential profile operations the record's owner must belong to the
/// caller's tenant; a missing record passes here and the handler reports
/// 404 instead. Denial aborts the request before any mutation.
pub async fn authorize(
    db: &DatabaseConnection,
    ctx: &RequestContext,
    entity: &str,
    record_id: Option<i32>,
    operation: Operation,
) -> Result<(), AppError> {
    if !any_role_allows(&ctx.roles, entity, operation) {
        tracing::warn!(
            "User {} denied {:?} on {} (roles: {:?})",
            ctx.user_id,
            operation,
            entity,
            ctx.roles
        );
        return Err(AppError::Forbidden(format!(
            "no permission for {operation:?} on {entity}"
        )));
    }

    if entity == "residential_user" {
        if let Some(id) = record_id {
            let record = residential_user::Entity::find_by_id(id)
                .find_also_related(user::Entity)
                .one(db)
                .await?;

            if let Some((_, Some(owner))) = record {
                if owner.tenant_id != ctx.tenant_id {
                    tracing::warn!(
                        "User {} (tenant {}) denied access to record {} of tenant {}",
                        ctx.user_id,
                        ctx.tenant_id,
                        id,
                        owner.tenant_id
                    );
                    return Err(AppError::Forbidden(
                        "record belongs to another tenant".to_string(),
                    ));
                }
            }
        }
    }

    Ok(())
}
