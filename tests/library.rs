use pricelint::dsl::reporting;
use pricelint::dsl::types::{Outcome, PriceFile, Schema};
use pricelint::validate;

fn schema() -> Schema {
    Schema {
        required_top_level_keys: vec!["provider".to_string(), "instances".to_string()],
        instance_required_keys: vec!["vcpu".to_string(), "price_monthly".to_string()],
    }
}

#[test]
fn validates_document_end_to_end() {
    let content = r#"{"provider":"acme","instances":[{"vcpu":2,"price_monthly":-5,"currency":"GBP"}]}"#;

    let violations = validate(content, &schema(), "acme").unwrap_err();

    assert_eq!(
        violations,
        vec![
            "instances[0]: 'price_monthly' cannot be negative",
            "instances[0]: 'currency' must be 'EUR' or 'USD'",
        ]
    );
}

#[test]
fn accepts_valid_document() {
    let content = r#"{"provider":"acme","instances":[{"vcpu":2,"price_monthly":5,"currency":"EUR"}]}"#;

    assert!(validate(content, &schema(), "acme").is_ok());
}

#[test]
fn missing_instance_key_is_reported_alongside_other_problems() {
    let content = r#"{"provider":"acme","instances":[{"vcpu":"2","architecture":"riscv"}]}"#;

    let violations = validate(content, &schema(), "acme").unwrap_err();

    assert!(violations.contains(&"instances[0]: missing required key 'price_monthly'".to_string()));
    assert!(violations.contains(&"instances[0]: 'vcpu' must be a number".to_string()));
    assert!(violations.contains(&"instances[0]: 'architecture' must be 'x86' or 'arm64'".to_string()));
}

#[test]
fn invalid_json_yields_a_single_violation() {
    let violations = validate("{\"provider\": \"aws\", ]", &schema(), "gcp").unwrap_err();

    assert_eq!(violations.len(), 1);
    assert!(violations[0].starts_with("Invalid JSON:"));
}

#[test]
fn aggregates_run_summary() {
    let files: Vec<PriceFile> = [
        ("a", r#"{"provider":"a","instances":[]}"#),
        ("b", r#"{"provider":"b","instances":[]}"#),
        ("c", r#"{"provider":"x","control_plane_cost":"free"}"#),
    ]
    .iter()
    .map(|(name, content)| PriceFile {
        name: name.to_string(),
        file_name: format!("{}.json", name),
        content: content.as_bytes().to_vec(),
    })
    .collect();

    let summary = reporting::run(&schema(), &files).summary();

    // c: missing instances, provider mismatch, control_plane_cost type
    assert_eq!(summary.files_examined, 3);
    assert_eq!(summary.valid_files, 2);
    assert_eq!(summary.total_violations, 3);
    assert_eq!(summary.outcome(), Outcome::Failure);
}
