use crate::dsl::types::Validator;
use serde_json::{Map, Value};

pub struct RequiredKeysValidator<'a> {
    pub keys: &'a [String],
}

impl<'a> Validator for RequiredKeysValidator<'a> {
    fn validate(&self, document: &Map<String, Value>) -> Vec<String> {
        self.keys
            .iter()
            .filter(|key| !document.contains_key(key.as_str()))
            .map(|key| format!("Missing required top-level key: '{}'", key))
            .collect()
    }
}
