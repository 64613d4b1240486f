use crate::api_client;
pub use ::common::{CreateResidentialUserRequest, ResidentialUserDto, UpdateResidentialUserRequest};

/// Optional filters for the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidentialUserQuery {
    pub user_id: Option<i32>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ResidentialUserQuery {
    fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(user_id) = self.user_id {
            params.push(format!("user_id={user_id}"));
        }
        if let Some(page) = self.page {
            params.push(format!("page={page}"));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Get all residential profiles, optionally filtered
pub async fn get_residential_users(
    query: Option<&ResidentialUserQuery>,
) -> Result<Vec<ResidentialUserDto>, String> {
    let query_string = query.map(ResidentialUserQuery::to_query_string).unwrap_or_default();
    log::trace!("Fetching residential users{}", query_string);
    let result = api_client::get(&format!("/residential-users{query_string}")).await;
    match &result {
        Ok(records) => log::info!("Fetched {} residential users", records.len()),
        Err(e) => log::error!("Failed to fetch residential users: {}", e),
    }
    result
}

/// Create a new residential profile
pub async fn create_residential_user(
    request: CreateResidentialUserRequest,
) -> Result<ResidentialUserDto, String> {
    log::debug!("Creating residential user for user_id: {}", request.user_id);
    let result = api_client::post("/residential-users", &request).await;
    match &result {
        Ok(record) => log::info!("Successfully created residential user (ID: {})", record.id),
        Err(e) => log::error!("Failed to create residential user: {}", e),
    }
    result
}

/// Get a specific residential profile by ID
pub async fn get_residential_user(id: i32) -> Result<ResidentialUserDto, String> {
    log::trace!("Fetching residential user with ID: {}", id);
    let result = api_client::get(&format!("/residential-users/{id}")).await;
    match &result {
        Ok(record) => log::info!("Fetched residential user (ID: {})", record.id),
        Err(e) => log::error!("Failed to fetch residential user {}: {}", id, e),
    }
    result
}

/// Update a residential profile by ID
pub async fn update_residential_user(
    id: i32,
    request: UpdateResidentialUserRequest,
) -> Result<ResidentialUserDto, String> {
    log::debug!("Updating residential user with ID: {}", id);
    let result = api_client::put(&format!("/residential-users/{id}"), &request).await;
    match &result {
        Ok(record) => log::info!("Successfully updated residential user (ID: {})", record.id),
        Err(e) => log::error!("Failed to update residential user {}: {}", id, e),
    }
    result
}

/// Delete a residential profile by ID
pub async fn delete_residential_user(id: i32) -> Result<ResidentialUserDto, String> {
    log::debug!("Deleting residential user with ID: {}", id);
    let result = api_client::delete(&format!("/residential-users/{id}")).await;
    match &result {
        Ok(record) => log::info!("Successfully deleted residential user (ID: {})", record.id),
        Err(e) => log::error!("Failed to delete residential user {}: {}", id, e),
    }
    result
}
