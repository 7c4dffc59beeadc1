use serde::Deserialize;
use serde_json::Value;

use super::types::Schema;

#[derive(Deserialize, Debug, Default)]
struct RawSchema {
    #[serde(default)]
    required: Vec<String>,
    #[serde(rename = "$defs", default)]
    defs: Option<RawDefinitions>,
    #[serde(default)]
    definitions: Option<RawDefinitions>,
}

#[derive(Deserialize, Debug, Default)]
struct RawDefinitions {
    #[serde(default)]
    instance: Option<RawInstance>,
}

#[derive(Deserialize, Debug, Default)]
struct RawInstance {
    #[serde(default)]
    required: Vec<String>,
}

/// Extracts the required key lists from a JSON schema document.
///
/// Instance keys come from `$defs.instance.required`, falling back to
/// `definitions.instance.required`. A schema without an instance definition
/// has no per-instance required keys.
pub fn schema_from_value(value: Value) -> Result<Schema, serde_json::Error> {
    let raw: RawSchema = serde_json::from_value(value)?;

    let instance_required_keys = [raw.defs, raw.definitions]
        .into_iter()
        .flatten()
        .find_map(|definitions| definitions.instance)
        .map(|instance| instance.required)
        .unwrap_or_default();

    Ok(Schema {
        required_top_level_keys: raw.required,
        instance_required_keys,
    })
}

pub fn bytes_to_json(input: &[u8]) -> Result<Value, String> {
    serde_json::from_slice(input).map_err(|error| error.to_string())
}
