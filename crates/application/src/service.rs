use std::path::PathBuf;

use showcase_domain::{intro_fallback, BackgroundStrategy, Gallery, InputEvent, NavigationState};

use crate::controller::{DispatchOutcome, NavigationController, NavigationTiming};
use crate::rotation::IntroRotation;
use crate::{
    ApplicationError, AssetEvent, AssetLoader, Clock, DiscoveryRequest, RandomSource, SceneView,
};

#[derive(Debug, Clone)]
pub struct ShowcaseSettings {
    pub asset_root: PathBuf,
    pub background_strategy: BackgroundStrategy,
    pub timing: NavigationTiming,
    pub rotation_interval_ms: u64,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("."),
            background_strategy: BackgroundStrategy::default(),
            timing: NavigationTiming::default(),
            rotation_interval_ms: 5_000,
        }
    }
}

pub struct ShowcaseService<V> {
    settings: ShowcaseSettings,
    gallery: Gallery,
    navigation: NavigationController<V>,
    rotation: IntroRotation,
    loader: Box<dyn AssetLoader>,
    random: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
}

impl<V: SceneView> ShowcaseService<V> {
    pub fn new(
        settings: ShowcaseSettings,
        gallery: Gallery,
        view: V,
        loader: Box<dyn AssetLoader>,
        random: Box<dyn RandomSource>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let navigation = NavigationController::new(gallery.len(), settings.timing, view);
        let rotation = IntroRotation::new(settings.rotation_interval_ms);
        Self {
            settings,
            gallery,
            navigation,
            rotation,
            loader,
            random,
            clock,
        }
    }

    pub fn start(&self) -> Result<(), ApplicationError> {
        self.loader.start(DiscoveryRequest {
            asset_root: self.settings.asset_root.clone(),
            artists: self.gallery.artist_ids(),
            strategy: self.settings.background_strategy,
        })
    }

    pub fn handle_input(&mut self, event: InputEvent) -> DispatchOutcome {
        let now_ms = self.clock.now_ms();
        self.navigation.dispatch(event, now_ms)
    }

    pub fn tick(&mut self) -> Result<(), ApplicationError> {
        let now_ms = self.clock.now_ms();
        self.navigation.tick(now_ms);

        while let Some(event) = self.loader.try_receive()? {
            self.apply_asset_event(event, now_ms)?;
        }

        if let Some(path) = self.rotation.tick(now_ms, self.random.as_mut()) {
            tracing::debug!(path = %path.display(), "rotating intro image");
            self.navigation
                .view_mut()
                .set_intro_background(path, now_ms);
        }
        Ok(())
    }

    pub fn finish_discovery(&mut self) -> Result<(), ApplicationError> {
        while let Some(event) = self.loader.receive()? {
            let now_ms = self.clock.now_ms();
            self.apply_asset_event(event, now_ms)?;
        }
        Ok(())
    }

    pub fn apply_asset_event(
        &mut self,
        event: AssetEvent,
        now_ms: u64,
    ) -> Result<(), ApplicationError> {
        match event {
            AssetEvent::IntroImagesDiscovered(results) => {
                let fallback = intro_fallback(&self.settings.asset_root);
                if let Some(path) = self.rotation.on_discovered(results, fallback, now_ms) {
                    self.navigation
                        .view_mut()
                        .set_intro_background(path, now_ms);
                }
            }
            AssetEvent::ArtistBackgroundResolved { slot, path } => {
                self.gallery.set_background(slot, &path)?;
                self.navigation
                    .view_mut()
                    .set_section_background(slot, &path);
                tracing::debug!(slot, path = %path.display(), "artist background resolved");
            }
            AssetEvent::DiscoveryFinished => {
                tracing::debug!("asset discovery finished");
            }
        }
        Ok(())
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn navigation(&self) -> &NavigationState {
        self.navigation.state()
    }

    pub fn rotation(&self) -> &IntroRotation {
        &self.rotation
    }

    pub fn view(&self) -> &V {
        self.navigation.view()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}
