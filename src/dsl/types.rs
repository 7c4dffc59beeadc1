use serde_json::{Map, Value};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub required_top_level_keys: Vec<String>,
    pub instance_required_keys: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PriceFile {
    /// Basename without extension, the name a document's `provider` must match.
    pub name: String,
    pub file_name: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    pub name: String,
    pub file_name: String,
    pub violations: Vec<String>,
}

impl DocumentReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_examined: usize,
    pub valid_files: usize,
    pub total_violations: usize,
}

impl RunSummary {
    pub fn outcome(&self) -> Outcome {
        match self.total_violations == 0 && self.files_examined > 0 {
            true => Outcome::Success,
            false => Outcome::Failure,
        }
    }
}

pub trait Validator {
    fn validate(&self, document: &Map<String, Value>) -> Vec<String>;
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Schema file not found: {}", .0.display())]
    SchemaNotFound(PathBuf),
    #[error("Unable to read schema file {}: {source}", .path.display())]
    SchemaRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Schema file {} is not valid JSON: {source}", .path.display())]
    SchemaParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Schema file {} is malformed: {source}", .path.display())]
    InvalidSchema {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Unable to read prices directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unable to read price file {}: {source}", .path.display())]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("No price files found in {}", .0.display())]
    NoPriceFiles(PathBuf),
}
