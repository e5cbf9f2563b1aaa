mod draw;

use std::time::{Duration, Instant};

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use showcase_adapters::present_navigation;
use showcase_application::{DispatchOutcome, ShowcaseService};
use showcase_domain::{ArrowKey, InputEvent, SceneModel, SwipeGesture, WheelDelta};

use crate::config::AppConfig;
use draw::{Frame, HitTarget, ImageCache};

const EASE_PER_SECOND: f32 = 9.0;
const SNAP_EPSILON: f32 = 0.001;

const ARROW_KEYS: [(Key, ArrowKey); 4] = [
    (Key::Up, ArrowKey::Up),
    (Key::Down, ArrowKey::Down),
    (Key::Left, ArrowKey::Left),
    (Key::Right, ArrowKey::Right),
];

#[derive(Debug, Clone, Default)]
pub struct SiteCopy {
    pub title: String,
    pub intro_text: String,
}

pub fn launch_window(
    service: &mut ShowcaseService<SceneModel>,
    copy: &SiteCopy,
    config: &AppConfig,
) -> Result<(), String> {
    let width = config.window_width;
    let height = config.window_height;

    let mut window = Window::new(&window_title(copy, service), width, height, WindowOptions::default())
        .map_err(|error| format!("failed to start UI window: {error}"))?;
    window.limit_update_rate(Some(Duration::from_micros(16_000)));

    let mut buffer = vec![0_u32; width * height];
    let mut images = ImageCache::new(width, height);
    let mut motion = SceneMotion::new(service.view());
    let mut pointer = PointerTracker::default();
    let mut title = String::new();
    let mut last_frame = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if let Some(event) = window.get_scroll_wheel().and_then(wheel_event) {
            dispatch(service, event);
        }
        for (key, arrow) in ARROW_KEYS {
            if window.is_key_pressed(key, KeyRepeat::Yes) {
                dispatch(service, InputEvent::Key(arrow));
            }
        }

        let mouse_down = window.get_mouse_down(MouseButton::Left);
        let mouse_pos = window.get_mouse_pos(MouseMode::Clamp);
        if let Some(gesture) = pointer.update(mouse_down, mouse_pos) {
            let scene = service.view();
            let start = draw::hit_test(gesture.start, scene, service.gallery(), width, height);
            let end = draw::hit_test(gesture.end, scene, service.gallery(), width, height);
            match resolve_release(start, end, gesture, config.swipe_threshold_px) {
                Some(PointerAction::Navigate(event)) => dispatch(service, event),
                Some(PointerAction::OpenLink(slot)) => open_link(service, slot),
                None => {}
            }
        }

        service
            .tick()
            .map_err(|error| format!("showcase update failed: {error}"))?;

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        motion.advance(service.view(), elapsed);

        let scene = service.view();
        images.ensure_scene(scene);
        let frame = Frame {
            scene,
            gallery: service.gallery(),
            copy,
            scroll: motion.scroll,
            offsets: &motion.offsets,
            fade: fade_progress(scene, service.now_ms(), config.crossfade_ms),
        };
        draw::draw_scene(&mut buffer, width, height, &frame, &images);

        let next_title = window_title(copy, service);
        if next_title != title {
            window.set_title(&next_title);
            title = next_title;
        }

        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|error| format!("failed to update UI window: {error}"))?;
    }

    Ok(())
}

fn dispatch(service: &mut ShowcaseService<SceneModel>, event: InputEvent) {
    if service.handle_input(event) == DispatchOutcome::Applied {
        tracing::trace!(?event, "input applied");
    }
}

fn open_link(service: &ShowcaseService<SceneModel>, slot: usize) {
    if let Some(section) = service.gallery().sections().get(slot) {
        if let Some(link) = section.profile.link.as_deref() {
            tracing::info!(artist = %section.artist(), link, "social link activated");
        }
    }
}

fn window_title(copy: &SiteCopy, service: &ShowcaseService<SceneModel>) -> String {
    let name = if copy.title.is_empty() {
        "showcase"
    } else {
        copy.title.as_str()
    };
    format!(
        "{name} | {}",
        present_navigation(service.navigation(), service.gallery().len())
    )
}

/// minifb reports wheel-up as positive; the navigation rules expect the
/// browser convention where positive `y` scrolls down.
fn wheel_event((x, y): (f32, f32)) -> Option<InputEvent> {
    if x == 0.0 && y == 0.0 {
        return None;
    }
    Some(InputEvent::Wheel(WheelDelta { x: -x, y: -y }))
}

fn fade_progress(scene: &SceneModel, now_ms: u64, crossfade_ms: u64) -> f32 {
    let Some(intro) = &scene.intro_background else {
        return 1.0;
    };
    if crossfade_ms == 0 {
        return 1.0;
    }
    (now_ms.saturating_sub(intro.applied_at_ms) as f32 / crossfade_ms as f32).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerAction {
    Navigate(InputEvent),
    OpenLink(usize),
}

fn resolve_release(
    start: Option<HitTarget>,
    end: Option<HitTarget>,
    gesture: SwipeGesture,
    threshold: f32,
) -> Option<PointerAction> {
    if let Some(target) = start.filter(|_| start == end) {
        return Some(match target {
            HitTarget::Dot(index) => PointerAction::Navigate(InputEvent::DotSelect(index)),
            HitTarget::ScrollArrow => PointerAction::Navigate(InputEvent::ScrollArrow),
            HitTarget::Link(slot) => PointerAction::OpenLink(slot),
        });
    }
    gesture
        .classify(threshold)
        .map(|direction| PointerAction::Navigate(InputEvent::Swipe(direction)))
}

#[derive(Debug, Default)]
struct PointerTracker {
    pressed_at: Option<(f32, f32)>,
    last: Option<(f32, f32)>,
}

impl PointerTracker {
    fn update(&mut self, down: bool, position: Option<(f32, f32)>) -> Option<SwipeGesture> {
        let Some(start) = self.pressed_at else {
            if down {
                self.pressed_at = position;
                self.last = position;
            }
            return None;
        };

        if position.is_some() {
            self.last = position;
        }
        if down {
            return None;
        }
        self.pressed_at = None;
        Some(SwipeGesture::new(start, self.last.take().unwrap_or(start)))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SceneMotion {
    scroll: f32,
    offsets: Vec<f32>,
}

impl SceneMotion {
    fn new(scene: &SceneModel) -> Self {
        Self {
            scroll: scene.scroll_target.index() as f32,
            offsets: scene.section_offsets.iter().map(|offset| *offset as f32).collect(),
        }
    }

    fn advance(&mut self, scene: &SceneModel, elapsed_secs: f32) {
        let k = 1.0 - (-EASE_PER_SECOND * elapsed_secs.max(0.0)).exp();
        self.scroll = ease(self.scroll, scene.scroll_target.index() as f32, k);

        let count = scene.section_offsets.len();
        self.offsets.resize(count, 0.0);
        for (current, target) in self.offsets.iter_mut().zip(&scene.section_offsets) {
            *current = ease_cyclic(*current, *target as f32, count as f32, k);
        }
    }
}

fn ease(current: f32, target: f32, k: f32) -> f32 {
    let next = current + (target - current) * k;
    if (target - next).abs() < SNAP_EPSILON {
        target
    } else {
        next
    }
}

/// Eases along the shorter way round a carousel of `period` slots, so the
/// section that wraps slides off one edge and re-enters from the other.
fn ease_cyclic(current: f32, target: f32, period: f32, k: f32) -> f32 {
    if period <= 1.0 {
        return ease(current, target, k);
    }
    let mut diff = target - current;
    if diff > period / 2.0 {
        diff -= period;
    } else if diff < -period / 2.0 {
        diff += period;
    }
    if (diff * (1.0 - k)).abs() < SNAP_EPSILON {
        return target;
    }
    let next = current + diff * k;
    if next <= -1.0 {
        next + period
    } else if next >= period - 1.0 && diff > 0.0 {
        next - period
    } else {
        next
    }
}
