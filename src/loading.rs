//! Reading the schema and the price files from disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::dsl::parsing;
use crate::dsl::types::{LoadError, PriceFile, Schema};

pub const SCHEMA_FILE_NAME: &str = "schema.json";

pub fn load_schema(path: &Path) -> Result<Schema, LoadError> {
    if !path.is_file() {
        return Err(LoadError::SchemaNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::SchemaRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&content).map_err(|source| LoadError::SchemaParse {
        path: path.to_path_buf(),
        source,
    })?;
    let schema = parsing::schema_from_value(value).map_err(|source| LoadError::InvalidSchema {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        top_level_keys = schema.required_top_level_keys.len(),
        instance_keys = schema.instance_required_keys.len(),
        "loaded schema"
    );
    Ok(schema)
}

fn is_schema(path: &Path, schema_path: &Path) -> bool {
    if path.file_name().map_or(false, |name| name == SCHEMA_FILE_NAME) {
        return true;
    }
    match (fs::canonicalize(path), fs::canonicalize(schema_path)) {
        (Ok(path), Ok(schema_path)) => path == schema_path,
        _ => false,
    }
}

/// Lists the `*.json` files of `dir` other than the schema, sorted by file name.
pub fn price_file_paths(dir: &Path, schema_path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let read_dir_error = |source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        let is_json = path.extension().map_or(false, |extension| extension == "json");
        if is_json && path.is_file() && !is_schema(&path, schema_path) {
            paths.push(path);
        }
    }
    paths.sort();

    match paths.is_empty() {
        true => Err(LoadError::NoPriceFiles(dir.to_path_buf())),
        false => Ok(paths),
    }
}

pub fn read_price_file(path: &Path) -> Result<PriceFile, LoadError> {
    let content = fs::read(path).map_err(|source| LoadError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PriceFile {
        name: path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
        file_name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        content,
    })
}

pub fn load_price_files(dir: &Path, schema_path: &Path) -> Result<Vec<PriceFile>, LoadError> {
    price_file_paths(dir, schema_path)?
        .iter()
        .map(|path| read_price_file(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn discovers_price_files_without_schema() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "schema.json", "{}");
        write(dir.path(), "vultr.json", "{}");
        write(dir.path(), "aws.json", "{}");
        write(dir.path(), "notes.txt", "not a price file");

        let files = load_price_files(dir.path(), &dir.path().join("schema.json")).unwrap();

        let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
        assert_eq!(names, vec!["aws", "vultr"]);
        assert_eq!(files[0].file_name, "aws.json");
    }

    #[test]
    fn no_price_files_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "schema.json", "{}");

        let result = load_price_files(dir.path(), &dir.path().join("schema.json"));

        assert!(matches!(result, Err(LoadError::NoPriceFiles(_))));
    }

    #[test]
    fn missing_schema_is_fatal() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_schema(&dir.path().join("schema.json"));

        assert!(matches!(result, Err(LoadError::SchemaNotFound(_))));
    }

    #[test]
    fn unparsable_schema_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "schema.json", "{ \"required\": ");

        let result = load_schema(&dir.path().join("schema.json"));

        assert!(matches!(result, Err(LoadError::SchemaParse { .. })));
    }

    #[test]
    fn loads_schema_keys() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "schema.json",
            r#"{"required": ["provider"], "$defs": {"instance": {"required": ["vcpu"]}}}"#,
        );

        let schema = load_schema(&dir.path().join("schema.json")).unwrap();

        assert_eq!(schema.required_top_level_keys, vec!["provider"]);
        assert_eq!(schema.instance_required_keys, vec!["vcpu"]);
    }
}
