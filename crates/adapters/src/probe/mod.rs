use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use image::io::Reader as ImageReader;
use showcase_application::ImageProbe;
use showcase_domain::BackgroundStrategy;

const PROBE_BATCH: usize = 32;

#[derive(Debug, Default)]
pub struct ImageFileProbe;

impl ImageProbe for ImageFileProbe {
    fn probe(&self, path: &Path) -> bool {
        let reader = match ImageReader::open(path).and_then(|reader| reader.with_guessed_format())
        {
            Ok(reader) => reader,
            Err(_) => return false,
        };
        reader.into_dimensions().is_ok()
    }
}

pub fn probe_all(probe: &dyn ImageProbe, candidates: &[PathBuf]) -> Vec<Option<PathBuf>> {
    let mut results = Vec::with_capacity(candidates.len());
    for batch in candidates.chunks(PROBE_BATCH) {
        thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .map(|path| scope.spawn(move || probe.probe(path).then(|| path.clone())))
                .collect();
            for handle in handles {
                results.push(handle.join().unwrap_or(None));
            }
        });
    }
    results
}

pub fn race_first(probe: &dyn ImageProbe, candidates: &[PathBuf]) -> Option<PathBuf> {
    let (found_tx, found_rx) = mpsc::channel();
    thread::scope(|scope| {
        let handles: Vec<_> = candidates
            .iter()
            .map(|path| {
                let found_tx = found_tx.clone();
                scope.spawn(move || {
                    let _ = found_tx.send(probe.probe(path).then(|| path.clone()));
                })
            })
            .collect();
        drop(found_tx);
        let found = found_rx.iter().flatten().next();
        for handle in handles {
            if handle.join().is_err() {
                tracing::warn!("background probe thread panicked");
            }
        }
        found
    })
}

pub fn ordered_first(probe: &dyn ImageProbe, candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| probe.probe(path)).cloned()
}

pub fn resolve_background(
    probe: &dyn ImageProbe,
    candidates: &[PathBuf],
    strategy: BackgroundStrategy,
) -> Option<PathBuf> {
    match strategy {
        BackgroundStrategy::Race => race_first(probe, candidates),
        BackgroundStrategy::Ordered => ordered_first(probe, candidates),
    }
}
