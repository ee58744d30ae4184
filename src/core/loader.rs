//! Entity collection loading utilities
//!
//! Export reads a collection of entities from a single YAML or JSON file and
//! import writes one back. The format follows the file extension; anything
//! that is not `.json` is treated as YAML.

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::entity::Entity;
use crate::core::identity::EntityId;

/// Serialization format of an entity collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CollectionFormat {
    #[default]
    Yaml,
    Json,
}

impl CollectionFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CollectionFormat::Json,
            _ => CollectionFormat::Yaml,
        }
    }
}

/// Load every entity of type T from a collection file
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    parse_collection(&content, CollectionFormat::from_path(path))
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

/// Load an entity collection, warning about entries that share an id
pub fn load_entities<T: Entity>(path: &Path) -> Result<Vec<T>> {
    let items: Vec<T> = load_collection(path)?;
    for id in duplicate_ids(&items) {
        tracing::warn!("{} {} appears more than once in {}", T::PREFIX, id, path.display());
    }
    tracing::debug!(prefix = T::PREFIX, count = items.len(), "loaded collection");
    Ok(items)
}

/// Ids that occur more than once, in order of their second appearance
pub fn duplicate_ids<T: Entity>(items: &[T]) -> Vec<&EntityId> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(Entity::id)
        .filter(|id| !seen.insert(*id))
        .collect()
}

/// Parse a collection from text in the given format
pub fn parse_collection<T: DeserializeOwned>(
    content: &str,
    format: CollectionFormat,
) -> Result<Vec<T>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    match format {
        CollectionFormat::Json => serde_json::from_str(content).into_diagnostic(),
        CollectionFormat::Yaml => serde_yml::from_str(content).into_diagnostic(),
    }
}

/// Render a collection as text in the given format
pub fn render_collection<T: Serialize>(items: &[T], format: CollectionFormat) -> Result<String> {
    match format {
        CollectionFormat::Json => {
            let mut out = serde_json::to_string_pretty(items).into_diagnostic()?;
            out.push('\n');
            Ok(out)
        }
        CollectionFormat::Yaml => serde_yml::to_string(items).into_diagnostic(),
    }
}

/// Write a collection to disk, creating parent directories as needed
pub fn save_collection<T: Serialize>(
    path: &Path,
    items: &[T],
    format: CollectionFormat,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).into_diagnostic()?;
        }
    }
    let text = render_collection(items, format)?;
    fs::write(path, text)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            CollectionFormat::from_path(Path::new("items.JSON")),
            CollectionFormat::Json
        );
        assert_eq!(
            CollectionFormat::from_path(Path::new("items.yaml")),
            CollectionFormat::Yaml
        );
        assert_eq!(
            CollectionFormat::from_path(Path::new("items")),
            CollectionFormat::Yaml
        );
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result: Result<Vec<serde_json::Value>> =
            load_collection(Path::new("/nonexistent/items.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_file_is_empty_collection() {
        let items: Vec<serde_json::Value> =
            parse_collection("  \n", CollectionFormat::Yaml).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_duplicate_ids() {
        use crate::core::identity::EntityPrefix;
        use crate::entities::Product;

        let pen = Product::new(EntityId::new(EntityPrefix::Prd), "Pen", "P1");
        let ink = Product::new(EntityId::new(EntityPrefix::Prd), "Ink", "I1");
        let mut copy = pen.clone();
        copy.name = "Pen (copy)".to_string();

        assert!(duplicate_ids(&[pen.clone(), ink.clone()]).is_empty());
        let items = [pen.clone(), ink, copy];
        assert_eq!(duplicate_ids(&items), vec![&pen.id]);
    }

    #[test]
    fn test_load_entities() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.yaml");
        fs::write(
            &path,
            "- id: PRD-01HQ3K4N5M6P7R8S9T0VWXYZAB\n  name: Pen\n  sku: P1\n  created: 2024-01-15T10:30:00Z\n  updated: 2024-01-15T10:30:00Z\n",
        )
        .unwrap();

        let products: Vec<crate::entities::Product> = load_entities(&path).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].sku, "P1");
    }

    #[test]
    fn test_save_then_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.json");
        let items = vec![serde_json::json!({"name": "Pen"})];

        save_collection(&path, &items, CollectionFormat::Json).unwrap();
        let loaded: Vec<serde_json::Value> = load_collection(&path).unwrap();
        assert_eq!(loaded, items);
    }
}
