use showcase_domain::{
    carousel_offset, ArrowKey, InputClass, InputEvent, NavigationState, SwipeDirection,
    VerticalSection, WheelDelta,
};

use crate::scheduler::{TimerKind, TimerQueue};
use crate::SceneView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTiming {
    pub wheel_cooldown_ms: u64,
    pub key_cooldown_ms: u64,
}

impl Default for NavigationTiming {
    fn default() -> Self {
        Self {
            wheel_cooldown_ms: 700,
            key_cooldown_ms: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Applied,
    Locked,
    Ignored,
}

pub struct NavigationController<V> {
    state: NavigationState,
    section_count: usize,
    timing: NavigationTiming,
    timers: TimerQueue,
    view: V,
}

impl<V: SceneView> NavigationController<V> {
    pub fn new(section_count: usize, timing: NavigationTiming, view: V) -> Self {
        let mut controller = Self {
            state: NavigationState::default(),
            section_count,
            timing,
            timers: TimerQueue::new(),
            view,
        };
        controller.lay_out_initial();
        controller
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn go_vertical(&mut self, target: i64) {
        let section = self.state.set_vertical(target);
        self.view.scroll_into_view(section);
        if section == VerticalSection::Gallery {
            self.update_dots();
        }
        self.view
            .set_scrollbar_hidden(section == VerticalSection::Intro);
        self.view
            .set_dots_visible(section == VerticalSection::Gallery);
        tracing::debug!(section = section.label(), "vertical navigation");
    }

    pub fn go_horizontal(&mut self, target: i64) {
        if self.section_count == 0 {
            return;
        }
        let index = self.state.set_horizontal(target, self.section_count);
        for slot in 0..self.section_count {
            self.view
                .set_section_offset(slot, carousel_offset(slot, index, self.section_count));
        }
        self.update_dots();
        tracing::debug!(index, "horizontal navigation");
    }

    pub fn update_dots(&mut self) {
        if self.section_count > 0 {
            self.view.sync_dots(self.state.horizontal());
        }
    }

    pub fn dispatch(&mut self, event: InputEvent, now_ms: u64) -> DispatchOutcome {
        self.tick(now_ms);
        let throttled = matches!(event.class(), InputClass::Wheel | InputClass::Keyboard);
        if throttled && self.state.is_input_locked() {
            tracing::trace!(?event, "input locked");
            return DispatchOutcome::Locked;
        }

        let outcome = match event {
            InputEvent::Wheel(delta) => self.on_wheel(delta, now_ms),
            InputEvent::Key(key) => self.on_key(key, now_ms),
            InputEvent::Swipe(direction) => self.on_swipe(direction),
            InputEvent::DotSelect(index) => self.on_dot(index),
            InputEvent::ScrollArrow => {
                self.go_vertical(VerticalSection::Text.index() as i64);
                DispatchOutcome::Applied
            }
        };
        if outcome == DispatchOutcome::Ignored {
            tracing::trace!(?event, "input ignored");
        }
        outcome
    }

    pub fn tick(&mut self, now_ms: u64) {
        for kind in self.timers.poll_due(now_ms) {
            if kind == TimerKind::ReleaseInputLock {
                self.state.unlock_input();
            }
        }
    }

    fn on_wheel(&mut self, delta: WheelDelta, now_ms: u64) -> DispatchOutcome {
        if self.state.in_gallery() {
            let step = if delta.y > 0.0 || delta.x > 0.0 { 1 } else { -1 };
            self.go_horizontal(self.horizontal() + step);
        } else {
            let step = if delta.y > 0.0 { 1 } else { -1 };
            self.go_vertical(self.vertical() + step);
        }

        self.engage_lock(now_ms, self.timing.wheel_cooldown_ms);
        DispatchOutcome::Applied
    }

    fn on_key(&mut self, key: ArrowKey, now_ms: u64) -> DispatchOutcome {
        match key {
            ArrowKey::Down => self.go_vertical(self.vertical() + 1),
            ArrowKey::Up => self.go_vertical(self.vertical() - 1),
            ArrowKey::Right if self.state.in_gallery() => {
                self.go_horizontal(self.horizontal() + 1)
            }
            ArrowKey::Left if self.state.in_gallery() => {
                self.go_horizontal(self.horizontal() - 1)
            }
            ArrowKey::Left | ArrowKey::Right => return DispatchOutcome::Ignored,
        }

        self.engage_lock(now_ms, self.timing.key_cooldown_ms);
        DispatchOutcome::Applied
    }

    fn on_swipe(&mut self, direction: SwipeDirection) -> DispatchOutcome {
        match direction {
            SwipeDirection::Up => self.go_vertical(self.vertical() + 1),
            SwipeDirection::Down => self.go_vertical(self.vertical() - 1),
            SwipeDirection::Left if self.state.in_gallery() => {
                self.go_horizontal(self.horizontal() + 1)
            }
            SwipeDirection::Right if self.state.in_gallery() => {
                self.go_horizontal(self.horizontal() - 1)
            }
            SwipeDirection::Left | SwipeDirection::Right => return DispatchOutcome::Ignored,
        }
        DispatchOutcome::Applied
    }

    fn on_dot(&mut self, index: usize) -> DispatchOutcome {
        if index >= self.section_count {
            return DispatchOutcome::Ignored;
        }
        self.go_vertical(VerticalSection::Gallery.index() as i64);
        self.go_horizontal(index as i64);
        DispatchOutcome::Applied
    }

    fn engage_lock(&mut self, now_ms: u64, cooldown_ms: u64) {
        self.state.lock_input();
        self.timers
            .schedule_once(TimerKind::ReleaseInputLock, now_ms, cooldown_ms);
    }

    fn lay_out_initial(&mut self) {
        for slot in 0..self.section_count {
            self.view.set_section_offset(slot, slot as i64);
        }
        self.update_dots();
        self.view.set_scrollbar_hidden(true);
        self.view.set_dots_visible(false);
    }

    fn vertical(&self) -> i64 {
        self.state.vertical().index() as i64
    }

    fn horizontal(&self) -> i64 {
        self.state.horizontal() as i64
    }
}
