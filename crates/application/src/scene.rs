use std::path::Path;

use showcase_domain::{IntroBackground, SceneModel, VerticalSection};

use crate::SceneView;

impl SceneView for SceneModel {
    fn scroll_into_view(&mut self, section: VerticalSection) {
        self.scroll_target = section;
    }

    fn set_section_offset(&mut self, slot: usize, offset: i64) {
        if let Some(entry) = self.section_offsets.get_mut(slot) {
            *entry = offset;
        }
    }

    fn sync_dots(&mut self, active: usize) {
        self.dots.sync(active);
    }

    fn set_scrollbar_hidden(&mut self, hidden: bool) {
        self.scrollbar_hidden = hidden;
    }

    fn set_dots_visible(&mut self, visible: bool) {
        self.dots_visible = visible;
    }

    fn set_intro_background(&mut self, path: &Path, applied_at_ms: u64) {
        let previous = self
            .intro_background
            .take()
            .map(|background| background.path);
        self.intro_background = Some(IntroBackground {
            path: path.to_path_buf(),
            previous,
            applied_at_ms,
        });
    }

    fn set_section_background(&mut self, slot: usize, path: &Path) {
        if let Some(entry) = self.section_backgrounds.get_mut(slot) {
            *entry = Some(path.to_path_buf());
        }
    }
}
