//! Mapping between public plural route segments and internal entity names.

/// Translate a plural route segment to the singular entity name used by the
/// access policy. Unknown segments pass through unchanged.
pub fn route_to_entity(route: &str) -> &str {
    match route {
        "organizations" => "organization",
        "residential-users" => "residential_user",
        "users" => "user",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_routes() {
        assert_eq!(route_to_entity("residential-users"), "residential_user");
        assert_eq!(route_to_entity("users"), "user");
        assert_eq!(route_to_entity("organizations"), "organization");
    }

    #[test]
    fn passes_unknown_routes_through() {
        assert_eq!(route_to_entity("unknown-route"), "unknown-route");
        assert_eq!(route_to_entity(""), "");
    }
}
