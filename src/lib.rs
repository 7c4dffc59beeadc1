pub mod dsl;
pub mod loading;
pub mod normalize;
pub mod validators;

use dsl::types::Schema;
use dsl::validation;

pub fn validate(
    content: impl AsRef<[u8]>,
    schema: &Schema,
    name: &str,
) -> Result<(), Vec<String>> {
    let violations = validation::validate_document(content.as_ref(), schema, name);

    match violations.is_empty() {
        true => Ok(()),
        false => Err(violations),
    }
}
