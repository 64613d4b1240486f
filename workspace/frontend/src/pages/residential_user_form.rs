//! Form-value plumbing shared by the create and edit pages.

use ::common::FieldError;
use serde_json::{json, Value};
use web_sys::FormData;

/// Read a numeric form field the way the stepper inputs behave: empty or
/// non-numeric input falls back to 0, while fractional input is kept as-is
/// so validation can reject it.
pub fn number_field(form_data: &FormData, field: &str) -> Value {
    let raw = form_data.get(field).as_string().unwrap_or_default();
    let trimmed = raw.trim();
    if let Ok(whole) = trimmed.parse::<i64>() {
        return json!(whole);
    }
    if let Ok(fractional) = trimmed.parse::<f64>() {
        return json!(fractional);
    }
    json!(0)
}

/// Read the user selection; an empty selection becomes an explicit null so
/// the required-field check fires.
pub fn user_id_field(form_data: &FormData) -> Value {
    match form_data.get("user_id").as_string() {
        Some(raw) if !raw.is_empty() => match raw.parse::<i64>() {
            Ok(id) => json!(id),
            Err(_) => json!(raw),
        },
        _ => Value::Null,
    }
}

/// Assemble the validation payload from the submitted form.
pub fn payload_from_form(form_data: &FormData) -> Value {
    json!({
        "user_id": user_id_field(form_data),
        "energy_goal": number_field(form_data, "energy_goal"),
        "energy_usage": number_field(form_data, "energy_usage"),
    })
}

/// Message for a specific field, if validation flagged it.
pub fn field_error<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message.as_str())
}
