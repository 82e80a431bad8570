use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::error::{CatalogError, Result};
use super::types::{DEFAULT_COLOUR, Label};

/// Every label defined in a repository, in display order
///
/// The catalog is a read-only snapshot for the lifetime of a picker session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCatalog {
    labels: Vec<Label>,
    index: HashMap<String, usize>,
}

impl LabelCatalog {
    /// Build a catalog from labels in display order
    ///
    /// # Errors
    /// Returns `CatalogError::DuplicateLabel` when two labels share a full name
    /// and `CatalogError::EmptyName` for a label without a name.
    pub fn new(labels: impl IntoIterator<Item = Label>) -> Result<Self> {
        let labels: Vec<Label> = labels.into_iter().collect();
        let mut index = HashMap::with_capacity(labels.len());

        for (position, label) in labels.iter().enumerate() {
            if label.full_name().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if index.insert(label.full_name().to_string(), position).is_some() {
                return Err(CatalogError::DuplicateLabel(label.full_name().to_string()));
            }
        }

        Ok(Self { labels, index })
    }

    /// Build a catalog from plain label names
    ///
    /// # Errors
    /// Same as [`LabelCatalog::new`].
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Label::new))
    }

    /// Load a catalog from a `.toml` or `.json` file
    ///
    /// Both formats accept either a plain list of names or a list of tables:
    ///
    /// ```toml
    /// labels = ["bug", "status.open"]
    ///
    /// [[label]]
    /// name = "priority.high"
    /// colour = "d73a4a"
    /// ```
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, has an unknown
    /// extension, or defines the same label twice.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        let catalog = Self::new(file.into_labels())?;
        tracing::debug!(path = %path.display(), labels = catalog.len(), "loaded label catalog");
        Ok(catalog)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Look up a label by its exact (case-sensitive) full name
    #[must_use]
    pub fn get(&self, full_name: &str) -> Option<&Label> {
        self.index.get(full_name).map(|&position| &self.labels[position])
    }

    #[must_use]
    pub fn contains(&self, full_name: &str) -> bool {
        self.index.contains_key(full_name)
    }

    /// Catalog position of a label, used to keep presentation in catalog order
    #[must_use]
    pub fn position(&self, full_name: &str) -> Option<usize> {
        self.index.get(full_name).copied()
    }

    /// Labels sharing the given group prefix, in catalog order
    pub fn labels_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Label> + 'a {
        self.labels
            .iter()
            .filter(move |label| label.group() == Some(group))
    }

    /// Whether `full_name` is a catalog label in an exclusive group
    #[must_use]
    pub fn is_exclusive(&self, full_name: &str) -> bool {
        self.get(full_name).is_some_and(Label::is_exclusive)
    }

    /// Names of all exclusive groups, each listed once in catalog order
    #[must_use]
    pub fn exclusive_groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for label in self.labels.iter().filter(|label| label.is_exclusive()) {
            if let Some(group) = label.group()
                && !groups.contains(&group)
            {
                groups.push(group);
            }
        }
        groups
    }
}

impl<'a> IntoIterator for &'a LabelCatalog {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

/// On-disk catalog layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default, rename = "label")]
    label_defs: Vec<LabelDef>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LabelDef {
    name: String,
    #[serde(default = "default_colour", alias = "color")]
    colour: String,
}

fn default_colour() -> String {
    DEFAULT_COLOUR.to_string()
}

impl CatalogFile {
    fn into_labels(self) -> Vec<Label> {
        self.labels
            .into_iter()
            .map(Label::new)
            .chain(
                self.label_defs
                    .into_iter()
                    .map(|def| Label::with_colour(def.name, def.colour)),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let result = LabelCatalog::from_names(["bug", "bug"]);
        assert!(matches!(result, Err(CatalogError::DuplicateLabel(name)) if name == "bug"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = LabelCatalog::from_names(["bug", ""]);
        assert!(matches!(result, Err(CatalogError::EmptyName)));
    }

    #[test]
    fn test_lookup_and_position() {
        let catalog = LabelCatalog::from_names(["bug", "status.open", "status.closed"]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position("status.closed"), Some(2));
        assert!(catalog.contains("bug"));
        assert!(!catalog.contains("Bug"));
        assert!(catalog.is_exclusive("status.open"));
        assert!(!catalog.is_exclusive("bug"));
        assert!(!catalog.is_exclusive("missing"));
    }

    #[test]
    fn test_labels_in_group() {
        let catalog =
            LabelCatalog::from_names(["status.open", "bug", "status.closed", "type-bug"]).unwrap();
        let names: Vec<&str> = catalog
            .labels_in_group("status")
            .map(Label::full_name)
            .collect();
        assert_eq!(names, vec!["status.open", "status.closed"]);
        assert_eq!(catalog.exclusive_groups(), vec!["status"]);
    }

    #[test]
    fn test_load_toml_names_and_tables() {
        let file = write_temp(
            ".toml",
            r#"
                labels = ["bug", "status.open"]

                [[label]]
                name = "priority.high"
                colour = "d73a4a"
            "#,
        );

        let catalog = LabelCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("priority.high").unwrap().colour(), "d73a4a");
        assert_eq!(catalog.get("bug").unwrap().colour(), DEFAULT_COLOUR);
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(
            ".json",
            r#"{"label": [{"name": "status.open", "color": "0e8a16"}]}"#,
        );

        let catalog = LabelCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.get("status.open").unwrap().colour(), "0e8a16");
    }

    #[test]
    fn test_load_unknown_extension() {
        let file = write_temp(".yaml", "labels: []");
        let result = LabelCatalog::load(file.path());
        assert!(matches!(result, Err(CatalogError::UnsupportedFormat(_))));
    }
}
