use crate::dsl::types::Validator;
use serde_json::{Map, Value};

/// Checks that a document's `provider` matches the name of the file it was read from.
pub struct ProviderValidator<'a> {
    pub expected: &'a str,
}

impl<'a> Validator for ProviderValidator<'a> {
    fn validate(&self, document: &Map<String, Value>) -> Vec<String> {
        match document.get("provider") {
            Some(provider) if provider.as_str() != Some(self.expected) => {
                let shown = match provider.as_str() {
                    Some(text) => text.to_string(),
                    None => provider.to_string(),
                };
                vec![format!(
                    "'provider' ({}) doesn't match filename ({})",
                    shown, self.expected
                )]
            }
            _ => vec![],
        }
    }
}
