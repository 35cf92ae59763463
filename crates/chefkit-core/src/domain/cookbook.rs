//! Cookbook manifest and item types.

use serde::{Deserialize, Deserializer, Serialize};

use super::category::{CATEGORY_TABLE, Category};

/// One file entry within a manifest category.
///
/// Only `name` and `url` matter to the download path; `checksum` and
/// `specificity` are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookbookItem {
    /// File base name, used as the local file name.
    #[serde(default)]
    pub name: String,
    /// Path relative to the cookbook root as reported by the server.
    #[serde(default)]
    pub path: String,
    /// Absolute download URL.
    #[serde(default)]
    pub url: String,
    /// Server-side content checksum.
    #[serde(default)]
    pub checksum: String,
    /// Platform specificity (usually `default`).
    #[serde(default)]
    pub specificity: String,
}

/// Descriptor of one cookbook version's complete file inventory.
///
/// Server keys this type does not model (`metadata`, `frozen?`, `chef_type`,
/// `json_class`, `access`) are ignored on decode. Missing category keys
/// and explicit `null`s decode as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookbookManifest {
    /// `{cookbook_name}-{version}`, e.g. `apache-0.1.0`.
    pub name: String,
    /// Bare cookbook name.
    pub cookbook_name: String,
    /// Cookbook version.
    pub version: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub root_files: Vec<CookbookItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<CookbookItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub templates: Vec<CookbookItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Vec<CookbookItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recipes: Vec<CookbookItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub definitions: Vec<CookbookItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub libraries: Vec<CookbookItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub providers: Vec<CookbookItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resources: Vec<CookbookItem>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<CookbookItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<CookbookItem>>::deserialize(deserializer)?.unwrap_or_default())
}

impl CookbookManifest {
    /// Items listed under `category`.
    #[must_use]
    pub fn items(&self, category: Category) -> &[CookbookItem] {
        (category.entry().items)(self)
    }

    /// The directory name the server expects: `{cookbook_name}-{version}`.
    #[must_use]
    pub fn expected_name(&self) -> String {
        format!("{}-{}", self.cookbook_name, self.version)
    }

    /// Whether `name` matches `{cookbook_name}-{version}`.
    #[must_use]
    pub fn validate_name(&self) -> bool {
        self.name == self.expected_name()
    }

    /// Total number of items across every category.
    #[must_use]
    pub fn total_files(&self) -> usize {
        CATEGORY_TABLE
            .iter()
            .map(|entry| (entry.items)(self).len())
            .sum()
    }

    /// Whether the manifest lists no files at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_files() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST_JSON: &str = r#"{
        "version": "0.2.1",
        "name": "foo-0.2.1",
        "cookbook_name": "foo",
        "frozen?": false,
        "chef_type": "cookbook_version",
        "json_class": "Chef::CookbookVersion",
        "attributes": [],
        "definitions": [],
        "files": [],
        "libraries": [],
        "providers": [],
        "recipes": [
            {
                "name": "default.rb",
                "path": "recipes/default.rb",
                "checksum": "320sdk2w38020827kdlsdkasbd5454b6",
                "specificity": "default",
                "url": "http://localhost/bookshelf/foo/default_rb"
            }
        ],
        "resources": [],
        "root_files": [
            {
                "name": "metadata.rb",
                "path": "metadata.rb",
                "checksum": "14963c5b685f3a15ea90ae51bd5454b6",
                "specificity": "default",
                "url": "http://localhost/bookshelf/foo/metadata_rb"
            }
        ],
        "templates": [],
        "metadata": {},
        "access": {}
    }"#;

    #[test]
    fn test_decodes_server_manifest() {
        let manifest: CookbookManifest = serde_json::from_str(MANIFEST_JSON).unwrap();

        assert_eq!(manifest.name, "foo-0.2.1");
        assert_eq!(manifest.cookbook_name, "foo");
        assert_eq!(manifest.version, "0.2.1");
        assert_eq!(manifest.root_files.len(), 1);
        assert_eq!(manifest.recipes[0].name, "default.rb");
        assert_eq!(manifest.recipes[0].path, "recipes/default.rb");
        assert_eq!(
            manifest.recipes[0].url,
            "http://localhost/bookshelf/foo/default_rb"
        );
        assert_eq!(manifest.total_files(), 2);
        assert!(manifest.validate_name());
    }

    #[test]
    fn test_missing_categories_decode_as_empty() {
        let manifest: CookbookManifest = serde_json::from_str(
            r#"{"name": "bar-1.0.0", "cookbook_name": "bar", "version": "1.0.0"}"#,
        )
        .unwrap();

        assert!(manifest.is_empty());
        for entry in &CATEGORY_TABLE {
            assert!(manifest.items(entry.category).is_empty());
        }
    }

    #[test]
    fn test_null_categories_decode_as_empty() {
        let manifest: CookbookManifest = serde_json::from_str(
            r#"{
                "name": "bar-1.0.0",
                "cookbook_name": "bar",
                "version": "1.0.0",
                "templates": null,
                "recipes": [{"name": "default.rb", "url": "http://localhost/bookshelf/bar/default_rb"}]
            }"#,
        )
        .unwrap();

        assert!(manifest.templates.is_empty());
        assert_eq!(manifest.total_files(), 1);
    }

    #[test]
    fn test_items_by_category() {
        let manifest: CookbookManifest = serde_json::from_str(MANIFEST_JSON).unwrap();

        assert_eq!(manifest.items(Category::RootFiles)[0].name, "metadata.rb");
        assert_eq!(manifest.items(Category::Recipes)[0].name, "default.rb");
        assert!(manifest.items(Category::Templates).is_empty());
    }

    #[test]
    fn test_name_mismatch_detected() {
        let manifest = CookbookManifest {
            name: "foo-9.9.9".to_string(),
            cookbook_name: "foo".to_string(),
            version: "0.2.1".to_string(),
            ..Default::default()
        };
        assert!(!manifest.validate_name());
        assert_eq!(manifest.expected_name(), "foo-0.2.1");
    }
}
