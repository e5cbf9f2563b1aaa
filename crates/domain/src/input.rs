#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

/// Wheel movement using the browser sign convention: positive `y` scrolls
/// down, positive `x` scrolls right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    pub start: (f32, f32),
    pub end: (f32, f32),
}

impl SwipeGesture {
    pub fn new(start: (f32, f32), end: (f32, f32)) -> Self {
        Self { start, end }
    }

    pub fn classify(&self, threshold: f32) -> Option<SwipeDirection> {
        let diff_x = self.end.0 - self.start.0;
        let diff_y = self.end.1 - self.start.1;

        if diff_y.abs() > diff_x.abs() {
            if diff_y < -threshold {
                return Some(SwipeDirection::Up);
            }
            if diff_y > threshold {
                return Some(SwipeDirection::Down);
            }
            return None;
        }

        if diff_x < -threshold {
            Some(SwipeDirection::Left)
        } else if diff_x > threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    Wheel,
    Keyboard,
    Touch,
    Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Wheel(WheelDelta),
    Key(ArrowKey),
    Swipe(SwipeDirection),
    DotSelect(usize),
    ScrollArrow,
}

impl InputEvent {
    pub fn class(&self) -> InputClass {
        match self {
            Self::Wheel(_) => InputClass::Wheel,
            Self::Key(_) => InputClass::Keyboard,
            Self::Swipe(_) => InputClass::Touch,
            Self::DotSelect(_) | Self::ScrollArrow => InputClass::Pointer,
        }
    }
}
