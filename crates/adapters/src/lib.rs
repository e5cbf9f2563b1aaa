pub mod fs;
pub mod loader;
pub mod manifest;
pub mod presenters;
pub mod probe;
pub mod random;

pub use fs::{MonotonicClock, WalkdirArtistDirectory};
pub use loader::ThreadedAssetLoader;
pub use manifest::{ArtistEntry, ShowcaseManifest};
pub use presenters::{present_artist_row, present_intro_images, present_navigation};
pub use probe::{ordered_first, probe_all, race_first, resolve_background, ImageFileProbe};
pub use random::RngSource;
