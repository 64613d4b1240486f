//! Field validators for residential profile payloads.
//!
//! The same checks run on both sides of the wire: the form pages call
//! [`validate_residential_user`] before submitting, and the backend calls it
//! again before any write. Validation works on the raw JSON body so that a
//! fractional number like `1.5` is rejected instead of being silently
//! truncated during deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Field the error applies to
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

fn is_integer(value: &Value) -> bool {
    value.as_i64().is_some() || value.as_u64().is_some()
}

/// Validate a residential profile payload.
///
/// Rules:
/// - `user_id` is required, non-null, and must be an integer.
/// - `energy_goal` and `energy_usage` are optional; when present and
///   non-null they must be integers.
///
/// All failing fields are reported, not just the first one.
pub fn validate_residential_user(body: &Value) -> Result<(), Vec<FieldError>> {
    let Some(object) = body.as_object() else {
        return Err(vec![FieldError::new("body", "payload must be a JSON object")]);
    };

    let mut errors = Vec::new();

    match object.get("user_id") {
        None | Some(Value::Null) => {
            errors.push(FieldError::new("user_id", "user_id is a required field"));
        }
        Some(value) if !is_integer(value) => {
            errors.push(FieldError::new("user_id", "user_id must be an integer"));
        }
        Some(_) => {}
    }

    for field in ["energy_goal", "energy_usage"] {
        if let Some(value) = object.get(field) {
            if !value.is_null() && !is_integer(value) {
                errors.push(FieldError::new(field, format!("{field} must be an integer")));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_payload() {
        let body = json!({"user_id": 1, "energy_goal": 100, "energy_usage": 50});
        assert!(validate_residential_user(&body).is_ok());
    }

    #[test]
    fn accepts_absent_optional_fields() {
        let body = json!({"user_id": 7});
        assert!(validate_residential_user(&body).is_ok());
    }

    #[test]
    fn accepts_null_optional_fields() {
        let body = json!({"user_id": 7, "energy_goal": null, "energy_usage": null});
        assert!(validate_residential_user(&body).is_ok());
    }

    #[test]
    fn rejects_missing_user_id() {
        let body = json!({"energy_goal": 100});
        let errors = validate_residential_user(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "user_id");
        assert_eq!(errors[0].message, "user_id is a required field");
    }

    #[test]
    fn rejects_null_user_id() {
        let body = json!({"user_id": null, "energy_goal": 100});
        let errors = validate_residential_user(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "user_id");
    }

    #[test]
    fn rejects_fractional_numbers() {
        let body = json!({"user_id": 1, "energy_goal": 1.5});
        let errors = validate_residential_user(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "energy_goal");
        assert_eq!(errors[0].message, "energy_goal must be an integer");
    }

    #[test]
    fn rejects_string_values() {
        let body = json!({"user_id": "u1", "energy_usage": "lots"});
        let errors = validate_residential_user(&body).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["user_id", "energy_usage"]);
    }

    #[test]
    fn collects_all_field_errors() {
        let body = json!({"energy_goal": 1.5, "energy_usage": 2.5});
        let errors = validate_residential_user(&body).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_non_object_payload() {
        let errors = validate_residential_user(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors[0].field, "body");
    }
}
