use crate::dsl::types::Validator;
use crate::dsl::validation::is_negative;
use serde_json::{Map, Value};

/// Checks `price_per_gb_monthly` inside each storage object, in the order of `keys`.
pub struct StorageValidator<'a> {
    pub keys: &'a [&'a str],
}

impl<'a> Validator for StorageValidator<'a> {
    fn validate(&self, document: &Map<String, Value>) -> Vec<String> {
        self.keys
            .iter()
            .filter_map(|key| {
                let price = document
                    .get(*key)
                    .and_then(Value::as_object)
                    .and_then(|storage| storage.get("price_per_gb_monthly"))?;

                match !price.is_number() || is_negative(price) {
                    true => Some(format!(
                        "'{}.price_per_gb_monthly' must be a non-negative number",
                        key
                    )),
                    false => None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::validation::STORAGE_KEYS;
    use serde_json::json;

    fn validate(document: Value) -> Vec<String> {
        StorageValidator {
            keys: &STORAGE_KEYS,
        }
        .validate(document.as_object().unwrap())
    }

    #[test]
    fn accepts_valid_prices() {
        let document = json!({
            "block_storage": { "price_per_gb_monthly": 0.1, "unit": "GB" },
            "object_storage": { "price_per_gb_monthly": 0 }
        });
        assert!(validate(document).is_empty());
    }

    #[test]
    fn storage_without_price_is_not_checked() {
        let document = json!({
            "block_storage": { "included_gb": 20 },
            "object_storage": null
        });
        assert!(validate(document).is_empty());
    }

    #[test]
    fn type_and_range_share_one_message() {
        let document = json!({
            "object_storage": { "price_per_gb_monthly": "0.02" },
            "block_storage": { "price_per_gb_monthly": -0.02 }
        });

        assert_eq!(
            validate(document),
            vec![
                "'block_storage.price_per_gb_monthly' must be a non-negative number",
                "'object_storage.price_per_gb_monthly' must be a non-negative number",
            ]
        );
    }

    #[test]
    fn null_price_is_rejected() {
        let document = json!({ "block_storage": { "price_per_gb_monthly": null } });
        assert_eq!(
            validate(document),
            vec!["'block_storage.price_per_gb_monthly' must be a non-negative number"]
        );
    }
}
