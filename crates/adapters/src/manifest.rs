use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use showcase_application::ApplicationError;
use showcase_domain::{ArtistId, ArtistProfile};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseManifest {
    pub title: String,
    pub intro_text: String,
    pub artists: Vec<ArtistEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

impl ShowcaseManifest {
    pub fn load(path: &Path) -> Result<Option<Self>, ApplicationError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no manifest file");
            return Ok(None);
        }
        let raw = fs::read_to_string(path)
            .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))?;
        Self::parse(&raw).map(Some)
    }

    pub fn parse(raw: &str) -> Result<Self, ApplicationError> {
        serde_json::from_str(raw)
            .map_err(|error| ApplicationError::Config(format!("invalid manifest: {error}")))
    }

    pub fn profiles(&self) -> Result<Vec<ArtistProfile>, ApplicationError> {
        self.artists
            .iter()
            .map(|entry| -> Result<ArtistProfile, ApplicationError> {
                Ok(ArtistProfile {
                    id: ArtistId::new(entry.id.as_str())?,
                    display_name: non_blank(entry.name.as_deref()),
                    link: non_blank(entry.instagram.as_deref()),
                })
            })
            .collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn parses_roster_with_optional_fields() {
        let manifest = ShowcaseManifest::parse(
            r#"{
                "title": "Atelier",
                "artists": [
                    { "id": "anna", "name": "Anna B.", "instagram": "https://instagram.com/anna" },
                    { "id": "ben", "name": "  " }
                ]
            }"#,
        )
        .expect("manifest");
        assert_eq!(manifest.title, "Atelier");
        assert_eq!(manifest.intro_text, "");

        let profiles = manifest.profiles().expect("profiles");
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].display_name.as_deref(), Some("Anna B."));
        assert_eq!(
            profiles[0].link.as_deref(),
            Some("https://instagram.com/anna")
        );
        assert_eq!(profiles[1].display_name, None);
    }

    #[test]
    fn bad_artist_id_is_rejected() {
        let manifest =
            ShowcaseManifest::parse(r#"{ "artists": [{ "id": "../etc" }] }"#).expect("manifest");
        assert!(matches!(
            manifest.profiles(),
            Err(ApplicationError::Domain(_))
        ));
    }

    #[test]
    fn missing_file_is_none_and_broken_file_is_config_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("showcase.json");
        assert_eq!(ShowcaseManifest::load(&path).expect("load"), None);

        std::fs::write(&path, "{ not json").expect("write");
        assert!(matches!(
            ShowcaseManifest::load(&path),
            Err(ApplicationError::Config(_))
        ));
    }
}
