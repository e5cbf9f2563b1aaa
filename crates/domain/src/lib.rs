mod assets;
mod error;
mod gallery;
mod input;
mod intro;
mod navigation;
mod scene;
mod section;

pub use assets::{
    artist_background_candidates, intro_candidates, intro_fallback, intro_index,
    BackgroundStrategy, ARTISTS_DIR, IMAGE_EXTENSIONS, INTRO_DIR, MAX_INTRO_CHECKS,
};
pub use error::DomainError;
pub use gallery::{ArtistId, ArtistProfile, ArtistSection, DotIndicators, Gallery};
pub use input::{ArrowKey, InputClass, InputEvent, SwipeDirection, SwipeGesture, WheelDelta};
pub use intro::IntroImageSet;
pub use navigation::NavigationState;
pub use scene::{IntroBackground, SceneModel};
pub use section::{
    carousel_offset, clamp_vertical, wrap_horizontal, VerticalSection, VERTICAL_SECTION_COUNT,
};
