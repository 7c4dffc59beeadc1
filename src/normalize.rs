//! Merges every price file into a single document keyed by provider.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::dsl::parsing;
use crate::dsl::types::{LoadError, PriceFile};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{file_name} is not valid JSON: {error}")]
    InvalidJson { file_name: String, error: String },
    #[error("{file_name} must contain a JSON object")]
    NotAnObject { file_name: String },
    #[error("Unable to serialize normalized prices: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Providers keyed by their `provider` field, or by file name when it is absent,
/// sorted alphabetically. A later file with the same provider replaces an earlier one.
pub fn providers(files: &[PriceFile]) -> Result<Map<String, Value>, NormalizeError> {
    let mut ordered: Vec<&PriceFile> = files.iter().collect();
    ordered.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    let mut by_provider: Vec<(String, Value)> = Vec::new();
    for file in ordered {
        let document =
            parsing::bytes_to_json(&file.content).map_err(|error| NormalizeError::InvalidJson {
                file_name: file.file_name.clone(),
                error,
            })?;
        if !document.is_object() {
            return Err(NormalizeError::NotAnObject {
                file_name: file.file_name.clone(),
            });
        }

        let provider = document
            .get("provider")
            .and_then(Value::as_str)
            .filter(|provider| !provider.is_empty())
            .map_or_else(|| file.name.clone(), str::to_string);

        by_provider.retain(|(existing, _)| existing != &provider);
        by_provider.push((provider, document));
    }

    by_provider.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(by_provider.into_iter().collect())
}

pub fn normalized_document(files: &[PriceFile]) -> Result<Value, NormalizeError> {
    let providers = providers(files)?;

    Ok(json!({
        "last_updated": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "providers": Value::Object(providers),
    }))
}

/// Writes the normalized document to `output` and returns the number of providers.
pub fn write_normalized(files: &[PriceFile], output: &Path) -> Result<usize, NormalizeError> {
    let document = normalized_document(files)?;
    let provider_count = document["providers"]
        .as_object()
        .map_or(0, |providers| providers.len());

    let mut serialized = serde_json::to_string_pretty(&document)?;
    serialized.push('\n');
    fs::write(output, serialized).map_err(|source| NormalizeError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    debug!(output = %output.display(), providers = provider_count, "wrote normalized prices");
    Ok(provider_count)
}
