#[cfg(test)]
mod integration_tests {
    use crate::schemas::{ApiResponse, ErrorResponse};
    use crate::test_utils::test_utils::setup_test_app;
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::{TestRequest, TestServer};
    use serde_json::{json, Value};

    /// Attach session identity headers to a request.
    fn as_session(request: TestRequest, user_id: i32, tenant: &str, roles: &str) -> TestRequest {
        request
            .add_header(
                HeaderName::from_static("x-user-id"),
                HeaderValue::from_str(&user_id.to_string()).unwrap(),
            )
            .add_header(
                HeaderName::from_static("x-tenant-id"),
                HeaderValue::from_str(tenant).unwrap(),
            )
            .add_header(
                HeaderName::from_static("x-roles"),
                HeaderValue::from_str(roles).unwrap(),
            )
    }

    /// Create a profile as the acme admin and return its id.
    async fn create_profile(server: &TestServer, body: Value) -> i64 {
        let response = as_session(server.post("/api/residential-users"), 1, "acme", "admin")
            .json(&body)
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<Value> = response.json();
        body.data["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_session_echoes_caller_context() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(server.get("/api/session"), 1, "acme", "member,viewer").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["user_id"], 1);
        assert_eq!(body.data["tenant_id"], "acme");
        assert_eq!(body.data["roles"], json!(["member", "viewer"]));
    }

    #[tokio::test]
    async fn test_missing_identity_is_unauthorized() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/residential-users").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "UNAUTHORIZED");
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_create_residential_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(server.post("/api/residential-users"), 1, "acme", "admin")
            .json(&json!({"user_id": 1, "energy_goal": 100, "energy_usage": 50}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Residential user created successfully");

        let record = &body.data;
        assert!(record["id"].as_i64().unwrap() > 0);
        assert_eq!(record["user_id"], 1);
        assert_eq!(record["energy_goal"], 100);
        assert_eq!(record["energy_usage"], 50);
        assert_eq!(record["user"]["email"], "alice@acme.test");
        assert!(record["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_create_rejects_missing_user_id() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(server.post("/api/residential-users"), 1, "acme", "admin")
            .json(&json!({"energy_goal": 100}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "VALIDATION_ERROR");
        let details = body.details.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "user_id");

        // Nothing was written
        let list = as_session(server.get("/api/residential-users"), 1, "acme", "admin").await;
        let list_body: ApiResponse<Vec<Value>> = list.json();
        assert!(list_body.data.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_fractional_energy_goal() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(server.post("/api/residential-users"), 1, "acme", "admin")
            .json(&json!({"user_id": 1, "energy_goal": 1.5}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = response.json();
        let details = body.details.unwrap();
        assert_eq!(details[0].field, "energy_goal");
        assert_eq!(details[0].message, "energy_goal must be an integer");
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(server.post("/api/residential-users"), 1, "acme", "admin")
            .json(&json!({"user_id": 9999}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "USER_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_rejects_user_from_another_tenant() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // User 3 exists, but belongs to globex
        let response = as_session(server.post("/api/residential-users"), 1, "acme", "admin")
            .json(&json!({"user_id": 3}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "USER_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_residential_user_by_id() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_profile(&server, json!({"user_id": 2, "energy_goal": 300})).await;

        let response = as_session(
            server.get(&format!("/api/residential-users/{id}")),
            1,
            "acme",
            "admin",
        )
        .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Value> = response.json();
        assert_eq!(body.data["id"], id);
        assert_eq!(body.data["user_id"], 2);
        assert_eq!(body.data["energy_goal"], 300);
        assert_eq!(body.data["energy_usage"], Value::Null);
        assert_eq!(body.data["user"]["email"], "bob@acme.test");
    }

    #[tokio::test]
    async fn test_get_residential_user_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(
            server.get("/api/residential-users/99999"),
            1,
            "acme",
            "admin",
        )
        .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_residential_users_filters_by_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        create_profile(&server, json!({"user_id": 1, "energy_goal": 100})).await;
        create_profile(&server, json!({"user_id": 2, "energy_goal": 200})).await;

        let all = as_session(server.get("/api/residential-users"), 1, "acme", "admin").await;
        let all_body: ApiResponse<Vec<Value>> = all.json();
        assert_eq!(all_body.data.len(), 2);

        let filtered = as_session(
            server.get("/api/residential-users?user_id=2"),
            1,
            "acme",
            "admin",
        )
        .await;
        let filtered_body: ApiResponse<Vec<Value>> = filtered.json();
        assert_eq!(filtered_body.data.len(), 1);
        assert_eq!(filtered_body.data[0]["user_id"], 2);
        assert_eq!(filtered_body.data[0]["user"]["email"], "bob@acme.test");
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_pagination() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(
            server.get("/api/residential-users?limit=0"),
            1,
            "acme",
            "admin",
        )
        .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_residential_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_profile(&server, json!({"user_id": 1, "energy_goal": 100, "energy_usage": 50})).await;

        // Only the provided fields are replaced
        let response = as_session(
            server.put(&format!("/api/residential-users/{id}")),
            1,
            "acme",
            "admin",
        )
        .json(&json!({"user_id": 1, "energy_goal": 250}))
        .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Value> = response.json();
        assert_eq!(body.message, "Residential user updated successfully");
        assert_eq!(body.data["energy_goal"], 250);
        assert_eq!(body.data["energy_usage"], 50);
    }

    #[tokio::test]
    async fn test_update_can_null_optional_fields() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_profile(&server, json!({"user_id": 1, "energy_goal": 100})).await;

        let response = as_session(
            server.put(&format!("/api/residential-users/{id}")),
            1,
            "acme",
            "admin",
        )
        .json(&json!({"user_id": 1, "energy_goal": null}))
        .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Value> = response.json();
        assert_eq!(body.data["energy_goal"], Value::Null);
    }

    #[tokio::test]
    async fn test_update_rejects_null_user_id_without_writing() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_profile(&server, json!({"user_id": 1, "energy_goal": 100})).await;

        let response = as_session(
            server.put(&format!("/api/residential-users/{id}")),
            1,
            "acme",
            "admin",
        )
        .json(&json!({"user_id": null, "energy_goal": 999}))
        .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = response.json();
        assert_eq!(body.details.unwrap()[0].field, "user_id");

        // The record is unchanged
        let fetched = as_session(
            server.get(&format!("/api/residential-users/{id}")),
            1,
            "acme",
            "admin",
        )
        .await;
        let fetched_body: ApiResponse<Value> = fetched.json();
        assert_eq!(fetched_body.data["energy_goal"], 100);
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(
            server.put("/api/residential-users/99999"),
            1,
            "acme",
            "admin",
        )
        .json(&json!({"user_id": 1}))
        .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_residential_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_profile(&server, json!({"user_id": 1, "energy_goal": 100})).await;

        let response = as_session(
            server.delete(&format!("/api/residential-users/{id}")),
            1,
            "acme",
            "admin",
        )
        .await;

        // The response carries the removed record
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Value> = response.json();
        assert_eq!(body.message, "Residential user deleted successfully");
        assert_eq!(body.data["id"], id);
        assert_eq!(body.data["energy_goal"], 100);

        // Subsequent reads find nothing
        let fetched = as_session(
            server.get(&format!("/api/residential-users/{id}")),
            1,
            "acme",
            "admin",
        )
        .await;
        fetched.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_rejected_with_message() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_profile(&server, json!({"user_id": 1})).await;

        let response = as_session(
            server.patch(&format!("/api/residential-users/{id}")),
            1,
            "acme",
            "admin",
        )
        .json(&json!({"energy_goal": 1}))
        .await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = response.json();
        assert_eq!(body["message"], "Method PATCH not allowed");
    }

    #[tokio::test]
    async fn test_viewer_cannot_create() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(server.post("/api/residential-users"), 1, "acme", "viewer")
            .json(&json!({"user_id": 1}))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_member_cannot_delete() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_profile(&server, json!({"user_id": 1})).await;

        let response = as_session(
            server.delete(&format!("/api/residential-users/{id}")),
            2,
            "acme",
            "member",
        )
        .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_cross_tenant_record_access_is_forbidden() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_profile(&server, json!({"user_id": 1})).await;

        // Carol is an admin, but in the globex tenant
        let response = as_session(
            server.get(&format!("/api/residential-users/{id}")),
            3,
            "globex",
            "admin",
        )
        .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_users_listing_is_tenant_scoped() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(server.get("/api/users"), 1, "acme", "viewer").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<Value>> = response.json();
        let emails: Vec<&str> = body
            .data
            .iter()
            .map(|u| u["email"].as_str().unwrap())
            .collect();
        assert_eq!(emails, vec!["alice@acme.test", "bob@acme.test"]);
    }

    #[tokio::test]
    async fn test_get_user_from_other_tenant_is_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = as_session(server.get("/api/users/3"), 1, "acme", "viewer").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
