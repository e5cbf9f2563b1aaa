use crate::section::{wrap_horizontal, VerticalSection};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    vertical: VerticalSection,
    horizontal: usize,
    input_locked: bool,
}

impl NavigationState {
    pub fn vertical(&self) -> VerticalSection {
        self.vertical
    }

    pub fn horizontal(&self) -> usize {
        self.horizontal
    }

    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    pub fn in_gallery(&self) -> bool {
        self.vertical == VerticalSection::Gallery
    }

    pub fn set_vertical(&mut self, target: i64) -> VerticalSection {
        self.vertical = VerticalSection::from_target(target);
        self.vertical
    }

    pub fn set_horizontal(&mut self, target: i64, count: usize) -> usize {
        self.horizontal = wrap_horizontal(target, count);
        self.horizontal
    }

    pub fn lock_input(&mut self) {
        self.input_locked = true;
    }

    pub fn unlock_input(&mut self) {
        self.input_locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_intro_unlocked() {
        let state = NavigationState::default();
        assert_eq!(state.vertical(), VerticalSection::Intro);
        assert_eq!(state.horizontal(), 0);
        assert!(!state.is_input_locked());
    }

    #[test]
    fn setters_clamp_and_wrap() {
        let mut state = NavigationState::default();
        assert_eq!(state.set_vertical(7), VerticalSection::Gallery);
        assert!(state.in_gallery());
        assert_eq!(state.set_horizontal(-1, 3), 2);
        assert_eq!(state.set_horizontal(3, 3), 0);
    }
}
