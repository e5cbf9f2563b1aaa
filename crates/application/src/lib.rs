mod controller;
mod error;
mod ports;
mod rotation;
mod scene;
mod scheduler;
mod service;
mod use_cases;

pub use controller::{DispatchOutcome, NavigationController, NavigationTiming};
pub use error::ApplicationError;
pub use ports::{
    ArtistDirectory, AssetEvent, AssetLoader, Clock, DiscoveryRequest, ImageProbe, RandomSource,
    SceneView,
};
pub use rotation::IntroRotation;
pub use scheduler::{TimerKind, TimerQueue};
pub use service::{ShowcaseService, ShowcaseSettings};
pub use use_cases::{resolve_roster, ResolveRosterCommand};
