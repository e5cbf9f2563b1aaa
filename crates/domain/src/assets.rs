use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ArtistId;

pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];
pub const MAX_INTRO_CHECKS: u32 = 50;
pub const INTRO_DIR: &str = "images/start_page";
pub const ARTISTS_DIR: &str = "images/artists";
const INTRO_DIR_NAME: &str = "start_page";
const INTRO_FALLBACK_FILE: &str = "1.jpeg";
const ARTIST_BACKGROUND_STEM: &str = "background";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStrategy {
    #[default]
    Race,
    Ordered,
}

pub fn intro_candidates(asset_root: &Path) -> Vec<PathBuf> {
    let dir = asset_root.join(INTRO_DIR);
    (1..=MAX_INTRO_CHECKS)
        .flat_map(|index| {
            IMAGE_EXTENSIONS
                .into_iter()
                .map(move |ext| (index, ext))
        })
        .map(|(index, ext)| dir.join(format!("{index}.{ext}")))
        .collect()
}

pub fn intro_fallback(asset_root: &Path) -> PathBuf {
    asset_root.join(INTRO_DIR).join(INTRO_FALLBACK_FILE)
}

pub fn artist_background_candidates(asset_root: &Path, artist: &ArtistId) -> Vec<PathBuf> {
    let dir = asset_root.join(ARTISTS_DIR).join(artist.as_str());
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{ARTIST_BACKGROUND_STEM}.{ext}")))
        .collect()
}

pub fn intro_index(path: &Path) -> Option<u32> {
    let parent = path.parent()?.file_name()?.to_str()?;
    if parent != INTRO_DIR_NAME {
        return None;
    }
    path.extension()?;
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || !stem.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_candidates_cover_all_indices_and_extensions() {
        let candidates = intro_candidates(Path::new("site"));
        assert_eq!(candidates.len(), 50 * 6);
        assert_eq!(candidates[0], Path::new("site/images/start_page/1.jpg"));
        assert_eq!(candidates[5], Path::new("site/images/start_page/1.PNG"));
        assert_eq!(candidates[6], Path::new("site/images/start_page/2.jpg"));
        assert_eq!(
            candidates.last().map(PathBuf::as_path),
            Some(Path::new("site/images/start_page/50.PNG"))
        );
    }

    #[test]
    fn artist_candidates_use_background_stem() {
        let artist = ArtistId::new("lena").expect("id");
        let candidates = artist_background_candidates(Path::new("."), &artist);
        assert_eq!(candidates.len(), 6);
        assert_eq!(
            candidates[1],
            Path::new("./images/artists/lena/background.jpeg")
        );
    }

    #[test]
    fn intro_index_reads_numbered_files_only() {
        assert_eq!(intro_index(Path::new("images/start_page/12.JPG")), Some(12));
        assert_eq!(intro_index(Path::new("images/start_page/cover.jpg")), None);
        assert_eq!(intro_index(Path::new("images/other/3.jpg")), None);
        assert_eq!(intro_index(Path::new("images/start_page/3")), None);
    }

    #[test]
    fn strategy_parses_lowercase_names() {
        let strategy: BackgroundStrategy =
            serde_json::from_str("\"ordered\"").expect("strategy");
        assert_eq!(strategy, BackgroundStrategy::Ordered);
        assert_eq!(BackgroundStrategy::default(), BackgroundStrategy::Race);
    }
}
