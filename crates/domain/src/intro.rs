use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::assets::intro_index;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroImageSet {
    images: Vec<PathBuf>,
    current: usize,
}

impl IntroImageSet {
    pub fn from_probe_results<I>(results: I, fallback: PathBuf) -> Self
    where
        I: IntoIterator<Item = Option<PathBuf>>,
    {
        let mut seen = HashSet::new();
        let mut images: Vec<PathBuf> = results
            .into_iter()
            .flatten()
            .filter(|path| seen.insert(path.clone()))
            .collect();
        images.sort_by_key(|path| intro_index(path).unwrap_or(u32::MAX));

        if images.is_empty() {
            images.push(fallback);
        }

        let current = images
            .iter()
            .position(|path| intro_index(path) == Some(1))
            .unwrap_or(0);

        Self { images, current }
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_path(&self) -> &Path {
        &self.images[self.current]
    }

    pub fn can_rotate(&self) -> bool {
        self.images.len() > 1
    }

    /// `draw(n)` must return a value in `[0, n)`; it picks among the images
    /// other than the current one.
    pub fn rotate_with(&mut self, mut draw: impl FnMut(usize) -> usize) -> Option<&Path> {
        if !self.can_rotate() {
            return None;
        }
        let mut next = draw(self.images.len() - 1) % (self.images.len() - 1);
        if next >= self.current {
            next += 1;
        }
        self.current = next;
        Some(self.current_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(paths: &[&str]) -> Vec<Option<PathBuf>> {
        paths.iter().map(|path| Some(PathBuf::from(path))).collect()
    }

    #[test]
    fn sorts_numerically_and_dedupes() {
        let mut results = found(&[
            "images/start_page/10.jpg",
            "images/start_page/2.png",
            "images/start_page/2.png",
            "images/start_page/1.jpeg",
        ]);
        results.push(None);
        let set = IntroImageSet::from_probe_results(results, PathBuf::from("fallback.jpeg"));
        assert_eq!(
            set.images(),
            &[
                PathBuf::from("images/start_page/1.jpeg"),
                PathBuf::from("images/start_page/2.png"),
                PathBuf::from("images/start_page/10.jpg"),
            ]
        );
        assert_eq!(set.current_index(), 0);
    }

    #[test]
    fn initial_image_falls_back_to_first_sorted_entry() {
        let set = IntroImageSet::from_probe_results(
            found(&["images/start_page/5.jpg", "images/start_page/2.jpg"]),
            PathBuf::from("fallback.jpeg"),
        );
        assert_eq!(set.current_path(), Path::new("images/start_page/2.jpg"));
    }

    #[test]
    fn prefers_image_number_one_wherever_it_sorts() {
        let set = IntroImageSet::from_probe_results(
            found(&["images/start_page/3.jpg", "images/start_page/1.PNG"]),
            PathBuf::from("fallback.jpeg"),
        );
        assert_eq!(set.current_path(), Path::new("images/start_page/1.PNG"));
    }

    #[test]
    fn empty_results_use_fallback_and_never_rotate() {
        let mut set = IntroImageSet::from_probe_results(
            vec![None, None],
            PathBuf::from("images/start_page/1.jpeg"),
        );
        assert_eq!(set.len(), 1);
        assert!(!set.can_rotate());
        assert!(set.rotate_with(|_| 0).is_none());
    }

    #[test]
    fn rotation_never_repeats_current_image() {
        let mut set = IntroImageSet::from_probe_results(
            found(&[
                "images/start_page/1.jpg",
                "images/start_page/2.jpg",
                "images/start_page/3.jpg",
            ]),
            PathBuf::from("fallback.jpeg"),
        );
        for draw in 0..6 {
            let before = set.current_index();
            set.rotate_with(|upper| draw % upper);
            assert_ne!(set.current_index(), before);
            assert!(set.current_index() < 3);
        }
    }

    #[test]
    fn unnumbered_paths_sort_last() {
        let set = IntroImageSet::from_probe_results(
            found(&["images/start_page/cover.jpg", "images/start_page/4.jpg"]),
            PathBuf::from("fallback.jpeg"),
        );
        assert_eq!(set.images()[1], PathBuf::from("images/start_page/cover.jpg"));
    }
}
