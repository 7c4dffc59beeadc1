use crate::dsl::types::Validator;
use crate::dsl::validation::is_negative;
use serde_json::{Map, Value};

pub struct ControlPlaneCostValidator {}

impl Validator for ControlPlaneCostValidator {
    fn validate(&self, document: &Map<String, Value>) -> Vec<String> {
        match document.get("control_plane_cost") {
            None | Some(Value::Null) => vec![],
            Some(cost) if !cost.is_number() => {
                vec!["'control_plane_cost' must be a number or null".to_string()]
            }
            Some(cost) if is_negative(cost) => {
                vec!["'control_plane_cost' cannot be negative".to_string()]
            }
            Some(_) => vec![],
        }
    }
}
