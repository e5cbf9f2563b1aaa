use std::path::Path;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use showcase_application::{
    ApplicationError, AssetEvent, AssetLoader, DiscoveryRequest, ImageProbe,
};
use showcase_domain::{artist_background_candidates, intro_candidates};

use crate::probe::{probe_all, resolve_background};

pub struct ThreadedAssetLoader {
    probe: Arc<dyn ImageProbe>,
    event_rx: Mutex<Option<mpsc::Receiver<AssetEvent>>>,
}

impl ThreadedAssetLoader {
    pub fn new(probe: Arc<dyn ImageProbe>) -> Self {
        Self {
            probe,
            event_rx: Mutex::new(None),
        }
    }
}

impl AssetLoader for ThreadedAssetLoader {
    fn start(&self, request: DiscoveryRequest) -> Result<(), ApplicationError> {
        let mut event_rx = self
            .event_rx
            .lock()
            .map_err(|_| ApplicationError::Io("asset event lock poisoned".to_string()))?;
        if event_rx.is_some() {
            return Err(ApplicationError::InvalidInput(
                "asset discovery already started".to_string(),
            ));
        }

        let (event_tx, receiver) = mpsc::channel();
        let probe = Arc::clone(&self.probe);
        thread::Builder::new()
            .name("asset-discovery".to_string())
            .spawn(move || run_discovery(probe.as_ref(), &request, &event_tx))
            .map_err(|error| {
                ApplicationError::Io(format!("failed to spawn asset discovery: {error}"))
            })?;
        *event_rx = Some(receiver);
        Ok(())
    }

    fn try_receive(&self) -> Result<Option<AssetEvent>, ApplicationError> {
        let event_rx = self
            .event_rx
            .lock()
            .map_err(|_| ApplicationError::Io("asset event lock poisoned".to_string()))?;
        let Some(receiver) = event_rx.as_ref() else {
            return Ok(None);
        };
        match receiver.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::TryRecvError::Empty) | Err(mpsc::TryRecvError::Disconnected) => Ok(None),
        }
    }

    fn receive(&self) -> Result<Option<AssetEvent>, ApplicationError> {
        let event_rx = self
            .event_rx
            .lock()
            .map_err(|_| ApplicationError::Io("asset event lock poisoned".to_string()))?;
        Ok(event_rx
            .as_ref()
            .and_then(|receiver| receiver.recv().ok()))
    }
}

fn run_discovery(
    probe: &dyn ImageProbe,
    request: &DiscoveryRequest,
    event_tx: &mpsc::Sender<AssetEvent>,
) {
    let asset_root = request.asset_root.as_path();
    let strategy = request.strategy;
    tracing::debug!(
        root = %asset_root.display(),
        artists = request.artists.len(),
        ?strategy,
        "asset discovery started"
    );

    thread::scope(|scope| {
        let intro_tx = event_tx.clone();
        scope.spawn(move || {
            let results = probe_all(probe, &intro_candidates(asset_root));
            let _ = intro_tx.send(AssetEvent::IntroImagesDiscovered(results));
        });

        for (slot, artist) in request.artists.iter().enumerate() {
            let artist_tx = event_tx.clone();
            scope.spawn(move || {
                let candidates = artist_background_candidates(asset_root, artist);
                match resolve_background(probe, &candidates, strategy) {
                    Some(path) => {
                        let _ = artist_tx.send(AssetEvent::ArtistBackgroundResolved { slot, path });
                    }
                    None => log_missing_background(asset_root, artist.as_str()),
                }
            });
        }
    });

    let _ = event_tx.send(AssetEvent::DiscoveryFinished);
}

fn log_missing_background(asset_root: &Path, artist: &str) {
    tracing::debug!(root = %asset_root.display(), artist, "no background image for artist");
}
