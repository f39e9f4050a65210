// ─── Libraries Manifest ───
// Decodes the JSON manifest declaring repositories and dependencies.

use std::fmt;
use std::io::Read;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use tracing::debug;

use crate::error::LoaderResult;

/// A single named repository declaration, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    pub id: String,
    pub url: String,
}

/// Top-level libraries manifest.
///
/// ```json
/// {
///   "repositories": { "central": "https://repo1.maven.org/maven2" },
///   "dependencies": [ "org.example:lib:1.2.3" ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LibrariesManifest {
    #[serde(deserialize_with = "deserialize_repositories")]
    pub repositories: Vec<RepositoryEntry>,
    pub dependencies: Vec<String>,
}

impl LibrariesManifest {
    /// Parse a manifest from raw UTF-8 JSON bytes. All-or-nothing:
    /// a malformed document yields an error and no partial manifest.
    pub fn parse(bytes: &[u8]) -> LoaderResult<Self> {
        let manifest: LibrariesManifest = serde_json::from_slice(bytes)?;
        debug!(
            "Loaded manifest: {} repositories, {} dependencies",
            manifest.repositories.len(),
            manifest.dependencies.len()
        );
        Ok(manifest)
    }

    /// Parse a manifest from a reader (e.g. a bundled resource stream).
    pub fn from_reader(mut reader: impl Read) -> LoaderResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse(&bytes)
    }
}

/// Default JSON map decoding keeps the last value for a duplicated key.
/// Repository ids must stay unique, so entries are checked as they
/// stream in and declaration order is kept.
fn deserialize_repositories<'de, D>(deserializer: D) -> Result<Vec<RepositoryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RepositoriesVisitor;

    impl<'de> Visitor<'de> for RepositoriesVisitor {
        type Value = Vec<RepositoryEntry>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of repository id to URL")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut entries: Vec<RepositoryEntry> =
                Vec::with_capacity(map.size_hint().unwrap_or(0));

            while let Some((id, url)) = map.next_entry::<String, String>()? {
                if entries.iter().any(|entry| entry.id == id) {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate repository id `{}`",
                        id
                    )));
                }
                entries.push(RepositoryEntry { id, url });
            }

            Ok(entries)
        }
    }

    deserializer.deserialize_map(RepositoriesVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let json = r#"{
            "repositories": {
                "paper": "https://repo.papermc.io/repository/maven-public/",
                "central": "https://repo1.maven.org/maven2"
            },
            "dependencies": [
                "org.jetbrains.kotlin:kotlin-stdlib:2.2.0",
                "org.jetbrains.kotlinx:kotlinx-coroutines-core:1.10.2"
            ]
        }"#;

        let manifest = LibrariesManifest::parse(json.as_bytes()).unwrap();
        assert_eq!(manifest.repositories.len(), 2);
        assert_eq!(manifest.repositories[0].id, "paper");
        assert_eq!(
            manifest.repositories[1].url,
            "https://repo1.maven.org/maven2"
        );
        assert_eq!(manifest.dependencies.len(), 2);
    }

    #[test]
    fn preserves_repository_declaration_order() {
        let json = r#"{
            "repositories": { "z": "https://z.example", "a": "https://a.example", "m": "https://m.example" },
            "dependencies": []
        }"#;

        let manifest = LibrariesManifest::parse(json.as_bytes()).unwrap();
        let ids: Vec<&str> = manifest
            .repositories
            .iter()
            .map(|entry| entry.id.as_str())
            .collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn rejects_duplicate_repository_ids() {
        let json = r#"{
            "repositories": { "central": "https://a.example", "central": "https://b.example" },
            "dependencies": []
        }"#;

        let err = LibrariesManifest::parse(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("duplicate repository id `central`"));
    }

    #[test]
    fn rejects_missing_dependencies_field() {
        let json = r#"{ "repositories": {} }"#;
        assert!(LibrariesManifest::parse(json.as_bytes()).is_err());
    }

    #[test]
    fn rejects_non_sequence_dependencies() {
        let json = r#"{ "repositories": {}, "dependencies": "a:b:1.0" }"#;
        assert!(LibrariesManifest::parse(json.as_bytes()).is_err());
    }

    #[test]
    fn reads_manifest_from_reader() {
        let json = r#"{ "repositories": {}, "dependencies": ["a:b:1.0"] }"#;
        let manifest = LibrariesManifest::from_reader(json.as_bytes()).unwrap();
        assert_eq!(manifest.dependencies, ["a:b:1.0"]);
    }
}
