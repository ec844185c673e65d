// src/storage/catalog.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, TagError};
use crate::models::Tag;
use crate::utils::validation::validate_project_id;

/// Tag counts per project, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    projects: BTreeMap<String, Vec<Tag>>,
}

impl TagCatalog {
    pub fn new(projects: BTreeMap<String, Vec<Tag>>) -> Result<Self> {
        for project in projects.keys() {
            validate_project_id(project).map_err(|e| TagError::Catalog {
                message: format!("{}: {}", e, project),
            })?;
        }
        Ok(Self { projects })
    }

    /// Reads a JSON object mapping project identifiers to their tags.
    /// A missing file yields an empty catalog.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!("Tag catalog {} not found, starting empty", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let projects: BTreeMap<String, Vec<Tag>> = serde_json::from_str(&raw)?;
        let catalog = Self::new(projects)?;

        tracing::info!(
            "Loaded {} projects with {} tags from {}",
            catalog.projects.len(),
            catalog.projects.values().map(Vec::len).sum::<usize>(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn project_tags(&self, project: &str) -> Option<&[Tag]> {
        self.projects.get(project).map(Vec::as_slice)
    }

    /// Tags across every project, with counts summed by name.
    pub fn all_tags(&self) -> Vec<Tag> {
        let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
        for tag in self.projects.values().flatten() {
            *totals.entry(tag.name.as_str()).or_default() += tag.count;
        }
        totals
            .into_iter()
            .map(|(name, count)| Tag::new(name, count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_catalog() {
        let file = write_catalog(
            r#"{
                "ecookbook": [{"name": "bug", "count": 4}, {"name": "ui", "count": 1}],
                "onlinestore": [{"name": "bug", "count": 2}]
            }"#,
        );
        let catalog = TagCatalog::load(file.path()).unwrap();

        let tags = catalog.project_tags("ecookbook").unwrap();
        assert_eq!(tags, &[Tag::new("bug", 4), Tag::new("ui", 1)]);
        assert!(catalog.project_tags("missing").is_none());
        assert_eq!(catalog.all_tags(), vec![Tag::new("bug", 6), Tag::new("ui", 1)]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = TagCatalog::load(&dir.path().join("nope.json")).unwrap();
        assert!(catalog.all_tags().is_empty());
    }

    #[test]
    fn test_rejects_bad_input() {
        let file = write_catalog(r#"{"ecookbook": [{"name": "bug"}]}"#);
        assert!(matches!(
            TagCatalog::load(file.path()),
            Err(TagError::Serialization(_))
        ));

        let file = write_catalog(r#"{"../etc": []}"#);
        assert!(matches!(
            TagCatalog::load(file.path()),
            Err(TagError::Catalog { .. })
        ));
    }
}
