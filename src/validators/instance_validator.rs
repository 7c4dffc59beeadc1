use crate::dsl::types::Validator;
use crate::dsl::validation::{is_negative, one_of};
use serde_json::{Map, Value};

type InstanceCheck = fn(&Map<String, Value>, usize) -> Vec<String>;

/// Field checks applied to every instance, in reporting order. Each runs
/// regardless of what the previous ones found.
const INSTANCE_CHECKS: [InstanceCheck; 5] = [
    |instance, index| number("vcpu", instance, index),
    |instance, index| number("ram_gb", instance, index),
    |instance, index| non_negative_number("price_monthly", instance, index),
    |instance, index| enumeration("currency", &["EUR", "USD"], instance, index),
    |instance, index| enumeration("architecture", &["x86", "arm64"], instance, index),
];

pub struct InstanceValidator<'a> {
    pub required_keys: &'a [String],
}

impl<'a> Validator for InstanceValidator<'a> {
    fn validate(&self, document: &Map<String, Value>) -> Vec<String> {
        match document.get("instances") {
            None => vec![],
            Some(Value::Array(instances)) => instances
                .iter()
                .enumerate()
                .flat_map(|(index, instance)| validate_instance(instance, index, self.required_keys))
                .collect(),
            Some(_) => vec!["'instances' must be an array".to_string()],
        }
    }
}

pub fn validate_instance(instance: &Value, index: usize, required_keys: &[String]) -> Vec<String> {
    let instance = match instance.as_object() {
        Some(instance) => instance,
        None => return vec![format!("instances[{}]: must be an object", index)],
    };

    let missing_keys = required_keys
        .iter()
        .filter(|key| !instance.contains_key(key.as_str()))
        .map(|key| format!("instances[{}]: missing required key '{}'", index, key));

    missing_keys
        .chain(INSTANCE_CHECKS.iter().flat_map(|check| check(instance, index)))
        .collect()
}

fn number(field: &str, instance: &Map<String, Value>, index: usize) -> Vec<String> {
    match instance.get(field) {
        Some(value) if !value.is_number() => {
            vec![format!("instances[{}]: '{}' must be a number", index, field)]
        }
        _ => vec![],
    }
}

fn non_negative_number(field: &str, instance: &Map<String, Value>, index: usize) -> Vec<String> {
    match instance.get(field) {
        Some(value) if !value.is_number() => {
            vec![format!("instances[{}]: '{}' must be a number", index, field)]
        }
        Some(value) if is_negative(value) => {
            vec![format!("instances[{}]: '{}' cannot be negative", index, field)]
        }
        _ => vec![],
    }
}

fn enumeration(
    field: &str,
    allowed: &[&str],
    instance: &Map<String, Value>,
    index: usize,
) -> Vec<String> {
    match instance.get(field) {
        Some(value) if !one_of(value, allowed) => {
            let options = allowed
                .iter()
                .map(|option| format!("'{}'", option))
                .collect::<Vec<_>>()
                .join(" or ");
            vec![format!("instances[{}]: '{}' must be {}", index, field, options)]
        }
        _ => vec![],
    }
}
