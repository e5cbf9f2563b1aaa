#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    ReleaseInputLock,
    RotateIntro,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledTimer {
    kind: TimerKind,
    due_ms: u64,
    interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    timers: Vec<ScheduledTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_once(&mut self, kind: TimerKind, now_ms: u64, delay_ms: u64) {
        self.timers.push(ScheduledTimer {
            kind,
            due_ms: now_ms.saturating_add(delay_ms),
            interval_ms: None,
        });
    }

    pub fn schedule_interval(&mut self, kind: TimerKind, now_ms: u64, interval_ms: u64) {
        let interval_ms = interval_ms.max(1);
        self.timers.push(ScheduledTimer {
            kind,
            due_ms: now_ms.saturating_add(interval_ms),
            interval_ms: Some(interval_ms),
        });
    }

    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|timer| timer.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// A repeating timer fires at most once per poll; missed periods are skipped.
    pub fn poll_due(&mut self, now_ms: u64) -> Vec<TimerKind> {
        let mut due: Vec<(u64, TimerKind)> = Vec::new();
        self.timers.retain_mut(|timer| {
            if timer.due_ms > now_ms {
                return true;
            }
            due.push((timer.due_ms, timer.kind));
            match timer.interval_ms {
                Some(interval) => {
                    while timer.due_ms <= now_ms {
                        timer.due_ms = timer.due_ms.saturating_add(interval);
                    }
                    true
                }
                None => false,
            }
        });
        due.sort_by_key(|(due_ms, _)| *due_ms);
        due.into_iter().map(|(_, kind)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once_at_deadline() {
        let mut timers = TimerQueue::new();
        timers.schedule_once(TimerKind::ReleaseInputLock, 100, 700);
        assert!(timers.poll_due(799).is_empty());
        assert_eq!(timers.poll_due(800), vec![TimerKind::ReleaseInputLock]);
        assert!(timers.poll_due(5_000).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn interval_repeats_and_skips_missed_periods() {
        let mut timers = TimerQueue::new();
        timers.schedule_interval(TimerKind::RotateIntro, 0, 5_000);
        assert_eq!(timers.poll_due(5_000), vec![TimerKind::RotateIntro]);
        assert!(timers.poll_due(9_999).is_empty());
        assert_eq!(timers.poll_due(26_000), vec![TimerKind::RotateIntro]);
        assert!(timers.poll_due(29_999).is_empty());
        assert_eq!(timers.poll_due(30_000), vec![TimerKind::RotateIntro]);
        assert!(timers.is_scheduled(TimerKind::RotateIntro));
    }

    #[test]
    fn due_timers_fire_in_deadline_order() {
        let mut timers = TimerQueue::new();
        timers.schedule_interval(TimerKind::RotateIntro, 0, 60);
        timers.schedule_once(TimerKind::ReleaseInputLock, 0, 50);
        assert_eq!(
            timers.poll_due(100),
            vec![TimerKind::ReleaseInputLock, TimerKind::RotateIntro]
        );
    }
}
