use std::path::{Path, PathBuf};

use showcase_domain::{ArtistId, BackgroundStrategy, VerticalSection};

use crate::ApplicationError;

pub trait ImageProbe: Send + Sync {
    fn probe(&self, path: &Path) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryRequest {
    pub asset_root: PathBuf,
    pub artists: Vec<ArtistId>,
    pub strategy: BackgroundStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetEvent {
    IntroImagesDiscovered(Vec<Option<PathBuf>>),
    ArtistBackgroundResolved { slot: usize, path: PathBuf },
    DiscoveryFinished,
}

pub trait AssetLoader {
    fn start(&self, request: DiscoveryRequest) -> Result<(), ApplicationError>;

    fn try_receive(&self) -> Result<Option<AssetEvent>, ApplicationError>;

    fn receive(&self) -> Result<Option<AssetEvent>, ApplicationError>;
}

pub trait ArtistDirectory {
    fn discover_artists(&self, asset_root: &Path) -> Result<Vec<ArtistId>, ApplicationError>;
}

pub trait RandomSource {
    fn next_index(&mut self, upper: usize) -> usize;
}

pub trait Clock {
    fn now_ms(&self) -> u64;
}

pub trait SceneView {
    fn scroll_into_view(&mut self, section: VerticalSection);

    fn set_section_offset(&mut self, slot: usize, offset: i64);

    fn sync_dots(&mut self, active: usize);

    fn set_scrollbar_hidden(&mut self, hidden: bool);

    fn set_dots_visible(&mut self, visible: bool);

    fn set_intro_background(&mut self, path: &Path, applied_at_ms: u64);

    fn set_section_background(&mut self, slot: usize, path: &Path);
}
