use std::path::PathBuf;

use crate::{DotIndicators, VerticalSection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroBackground {
    pub path: PathBuf,
    pub previous: Option<PathBuf>,
    pub applied_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneModel {
    pub scroll_target: VerticalSection,
    pub section_offsets: Vec<i64>,
    pub section_backgrounds: Vec<Option<PathBuf>>,
    pub dots: DotIndicators,
    pub scrollbar_hidden: bool,
    pub dots_visible: bool,
    pub intro_background: Option<IntroBackground>,
}

impl SceneModel {
    pub fn new(section_count: usize) -> Self {
        Self {
            scroll_target: VerticalSection::Intro,
            section_offsets: (0..section_count).map(|slot| slot as i64).collect(),
            section_backgrounds: vec![None; section_count],
            dots: DotIndicators::new(section_count),
            scrollbar_hidden: true,
            dots_visible: false,
            intro_background: None,
        }
    }
}
