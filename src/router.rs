use crate::handlers::{
    health::health_check,
    residential_users::{
        create_residential_user, delete_residential_user, get_residential_user,
        get_residential_users, method_not_allowed, update_residential_user,
    },
    session::get_session,
    users::{get_user, get_users},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Session context for the frontend permission gates
        .route("/api/session", get(get_session))
        // User listing (backs the selector on the profile forms)
        .route("/api/users", get(get_users))
        .route("/api/users/:user_id", get(get_user))
        // Residential profile CRUD routes; unsupported methods get an
        // explicit 405 body instead of the framework default
        .route(
            "/api/residential-users",
            get(get_residential_users)
                .post(create_residential_user)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/residential-users/:id",
            get(get_residential_user)
                .put(update_residential_user)
                .delete(delete_residential_user)
                .fallback(method_not_allowed),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
