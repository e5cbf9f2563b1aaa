use std::path::Path;

use showcase_application::{ApplicationError, ArtistDirectory};
use showcase_domain::{ArtistId, ARTISTS_DIR};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct WalkdirArtistDirectory;

impl ArtistDirectory for WalkdirArtistDirectory {
    fn discover_artists(&self, asset_root: &Path) -> Result<Vec<ArtistId>, ApplicationError> {
        let artists_path = asset_root.join(ARTISTS_DIR);
        if !artists_path.is_dir() {
            tracing::warn!(path = %artists_path.display(), "artist directory not found");
            return Ok(Vec::new());
        }

        let mut artists = Vec::new();
        for entry in WalkDir::new(&artists_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|error| ApplicationError::Io(error.to_string()))?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if name.starts_with('.') {
                continue;
            }
            artists.push(ArtistId::new(name.to_string())?);
        }

        Ok(artists)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn lists_artist_directories_in_name_order() {
        let dir = TempDir::new().expect("tempdir");
        let artists = dir.path().join("images/artists");
        for name in ["zora", "anna", ".hidden", "mika"] {
            fs::create_dir_all(artists.join(name)).expect("mkdir");
        }
        fs::write(artists.join("notes.txt"), b"x").expect("write");
        fs::create_dir_all(artists.join("anna/extra")).expect("mkdir");

        let found = WalkdirArtistDirectory
            .discover_artists(dir.path())
            .expect("discover");
        let names: Vec<&str> = found.iter().map(ArtistId::as_str).collect();
        assert_eq!(names, vec!["anna", "mika", "zora"]);
    }

    #[test]
    fn missing_directory_means_empty_gallery() {
        let dir = TempDir::new().expect("tempdir");
        let found = WalkdirArtistDirectory
            .discover_artists(dir.path())
            .expect("discover");
        assert!(found.is_empty());
    }
}
