pub mod display;
pub mod parsing;
pub mod reporting;
pub mod types;
pub mod validation;
