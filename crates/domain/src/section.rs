pub const VERTICAL_SECTION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalSection {
    #[default]
    Intro,
    Text,
    Gallery,
}

impl VerticalSection {
    pub const ALL: [Self; VERTICAL_SECTION_COUNT] = [Self::Intro, Self::Text, Self::Gallery];

    pub fn from_target(target: i64) -> Self {
        Self::ALL[clamp_vertical(target)]
    }

    pub fn index(self) -> usize {
        match self {
            Self::Intro => 0,
            Self::Text => 1,
            Self::Gallery => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Text => "text",
            Self::Gallery => "gallery",
        }
    }
}

pub fn clamp_vertical(target: i64) -> usize {
    target.clamp(0, VERTICAL_SECTION_COUNT as i64 - 1) as usize
}

pub fn wrap_horizontal(target: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if target >= count as i64 {
        return 0;
    }
    if target < 0 {
        return count - 1;
    }
    target as usize
}

/// Offset of `slot` in viewport widths while `target` is shown, taken modulo
/// `count` so the carousel cycles.
pub fn carousel_offset(slot: usize, target: usize, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    ((slot % count + count - target % count) % count) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_vertical_stays_in_range() {
        for target in -10..10 {
            let clamped = clamp_vertical(target);
            assert!(clamped <= 2);
            if (0..=2).contains(&target) {
                assert_eq!(clamped as i64, target);
            }
        }
        assert_eq!(clamp_vertical(i64::MIN), 0);
        assert_eq!(clamp_vertical(i64::MAX), 2);
    }

    #[test]
    fn wrap_horizontal_cycles_at_both_ends() {
        assert_eq!(wrap_horizontal(5, 5), 0);
        assert_eq!(wrap_horizontal(-1, 5), 4);
        assert_eq!(wrap_horizontal(3, 5), 3);
        for target in -20..20 {
            assert!(wrap_horizontal(target, 5) < 5);
        }
        assert_eq!(wrap_horizontal(7, 0), 0);
    }

    #[test]
    fn carousel_offsets_put_target_at_zero() {
        let offsets: Vec<i64> = (0..5).map(|slot| carousel_offset(slot, 4, 5)).collect();
        assert_eq!(offsets, vec![1, 2, 3, 4, 0]);

        let initial: Vec<i64> = (0..5).map(|slot| carousel_offset(slot, 0, 5)).collect();
        assert_eq!(initial, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn sections_map_from_targets() {
        assert_eq!(VerticalSection::from_target(-3), VerticalSection::Intro);
        assert_eq!(VerticalSection::from_target(1), VerticalSection::Text);
        assert_eq!(VerticalSection::from_target(9), VerticalSection::Gallery);
        assert_eq!(VerticalSection::Gallery.index(), 2);
    }
}
