use std::path::{Path, PathBuf};

use showcase_domain::IntroImageSet;

use crate::scheduler::{TimerKind, TimerQueue};
use crate::RandomSource;

#[derive(Debug, Clone)]
pub struct IntroRotation {
    images: Option<IntroImageSet>,
    interval_ms: u64,
    timers: TimerQueue,
}

impl IntroRotation {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            images: None,
            interval_ms,
            timers: TimerQueue::new(),
        }
    }

    pub fn images(&self) -> Option<&IntroImageSet> {
        self.images.as_ref()
    }

    pub fn is_rotating(&self) -> bool {
        self.timers.is_scheduled(TimerKind::RotateIntro)
    }

    pub fn on_discovered(
        &mut self,
        results: Vec<Option<PathBuf>>,
        fallback: PathBuf,
        now_ms: u64,
    ) -> Option<&Path> {
        if self.images.is_some() {
            return None;
        }
        let images = IntroImageSet::from_probe_results(results, fallback);
        tracing::info!(
            count = images.len(),
            initial = %images.current_path().display(),
            "intro images discovered"
        );
        if images.can_rotate() {
            self.timers
                .schedule_interval(TimerKind::RotateIntro, now_ms, self.interval_ms);
        }
        self.images = Some(images);
        self.images.as_ref().map(IntroImageSet::current_path)
    }

    pub fn tick(&mut self, now_ms: u64, random: &mut dyn RandomSource) -> Option<&Path> {
        let fired = self
            .timers
            .poll_due(now_ms)
            .into_iter()
            .any(|kind| kind == TimerKind::RotateIntro);
        if !fired {
            return None;
        }
        let images = self.images.as_mut()?;
        images.rotate_with(|upper| random.next_index(upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SequenceRandom {
        values: Vec<usize>,
        calls: usize,
    }

    impl RandomSource for SequenceRandom {
        fn next_index(&mut self, upper: usize) -> usize {
            let value = self.values[self.calls % self.values.len()] % upper;
            self.calls += 1;
            value
        }
    }

    fn results(indices: &[u32]) -> Vec<Option<PathBuf>> {
        indices
            .iter()
            .map(|index| Some(PathBuf::from(format!("images/start_page/{index}.jpg"))))
            .collect()
    }

    #[test]
    fn single_image_never_schedules_rotation() {
        let mut rotation = IntroRotation::new(5_000);
        let initial = rotation
            .on_discovered(results(&[3]), PathBuf::from("fallback.jpeg"), 0)
            .map(Path::to_path_buf);
        assert_eq!(initial, Some(PathBuf::from("images/start_page/3.jpg")));
        assert!(!rotation.is_rotating());

        let mut random = SequenceRandom {
            values: vec![0],
            calls: 0,
        };
        assert!(rotation.tick(60_000, &mut random).is_none());
        assert_eq!(random.calls, 0);
    }

    #[test]
    fn rotates_every_interval_to_a_different_image() {
        let mut rotation = IntroRotation::new(5_000);
        rotation.on_discovered(results(&[2, 5]), PathBuf::from("fallback.jpeg"), 0);
        assert_eq!(
            rotation.images().map(IntroImageSet::current_index),
            Some(0)
        );
        assert!(rotation.is_rotating());

        let mut random = SequenceRandom {
            values: vec![0],
            calls: 0,
        };
        assert!(rotation.tick(4_999, &mut random).is_none());
        let next = rotation.tick(5_000, &mut random).map(Path::to_path_buf);
        assert_eq!(next, Some(PathBuf::from("images/start_page/5.jpg")));
        let back = rotation.tick(10_000, &mut random).map(Path::to_path_buf);
        assert_eq!(back, Some(PathBuf::from("images/start_page/2.jpg")));
    }

    #[test]
    fn second_discovery_batch_is_ignored() {
        let mut rotation = IntroRotation::new(5_000);
        rotation.on_discovered(results(&[1, 2]), PathBuf::from("fallback.jpeg"), 0);
        assert!(rotation
            .on_discovered(results(&[7]), PathBuf::from("fallback.jpeg"), 10)
            .is_none());
        assert_eq!(rotation.images().map(IntroImageSet::len), Some(2));
    }
}
