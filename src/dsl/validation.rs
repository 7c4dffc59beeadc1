use serde_json::Value;

use super::parsing;
use super::types::{Schema, Validator};
use crate::validators::control_plane_validator::ControlPlaneCostValidator;
use crate::validators::instance_validator::InstanceValidator;
use crate::validators::provider_validator::ProviderValidator;
use crate::validators::required_keys_validator::RequiredKeysValidator;
use crate::validators::storage_validator::StorageValidator;

pub const STORAGE_KEYS: [&str; 2] = ["block_storage", "object_storage"];

pub fn is_negative(value: &Value) -> bool {
    value.as_f64().map_or(false, |number| number < 0.0)
}

pub fn one_of(value: &Value, allowed: &[&str]) -> bool {
    value.as_str().map_or(false, |text| allowed.contains(&text))
}

/// Validates the raw content of one price document named `name`.
///
/// Content that does not decode yields exactly one `Invalid JSON` violation.
/// Everything else is reported by the rule validators in a fixed order.
pub fn validate_document(content: &[u8], schema: &Schema, name: &str) -> Vec<String> {
    let json_document = match parsing::bytes_to_json(content) {
        Ok(json_document) => json_document,
        Err(error) => return vec![format!("Invalid JSON: {}", error)],
    };

    let document = match json_document.as_object() {
        Some(document) => document,
        None => return vec!["Document must be a JSON object".to_string()],
    };

    let validators: [&dyn Validator; 5] = [
        &RequiredKeysValidator {
            keys: &schema.required_top_level_keys,
        },
        &ProviderValidator { expected: name },
        &InstanceValidator {
            required_keys: &schema.instance_required_keys,
        },
        &ControlPlaneCostValidator {},
        &StorageValidator {
            keys: &STORAGE_KEYS,
        },
    ];

    validators
        .iter()
        .flat_map(|validator| validator.validate(document))
        .collect()
}
