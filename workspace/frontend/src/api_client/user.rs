use crate::api_client;
pub use ::common::UserDto;

/// Get all users in the caller's tenant (for the owner selector)
pub async fn get_users() -> Result<Vec<UserDto>, String> {
    log::trace!("Fetching users");
    let result = api_client::get("/users").await;
    match &result {
        Ok(users) => log::info!("Fetched {} users", users.len()),
        Err(e) => log::error!("Failed to fetch users: {}", e),
    }
    result
}
