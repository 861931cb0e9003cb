use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Completion percentage for a session that started `elapsed` ago out of
/// a `total` planned duration, clamped so it can never exceed 100.
pub fn percent_at(elapsed: Duration, total: Duration) -> u8 {
    if total.is_zero() {
        return 100;
    }
    let ratio = elapsed.as_secs_f64() / total.as_secs_f64();
    (ratio * 100.0).min(100.0) as u8
}

/// Tracks real elapsed time against a planned duration.
#[derive(Debug, Clone)]
pub struct ProgressTimer {
    started: Instant,
    total: Duration,
}

impl ProgressTimer {
    pub fn new(total: Duration) -> Self {
        ProgressTimer {
            started: Instant::now(),
            total,
        }
    }

    pub fn percent(&self) -> u8 {
        percent_at(self.started.elapsed(), self.total)
    }
}

/// Owns the cancellation flag of the active session. Beginning a new
/// session, cancelling, or dropping the guard flags the previous session
/// so its consumer stops; at most one session is ever live.
#[derive(Debug, Default)]
pub struct SessionGuard {
    active: Option<Rc<Cell<bool>>>,
}

impl SessionGuard {
    /// Cancels whatever session was running and hands out the flag for a
    /// new one.
    pub fn begin(&mut self) -> Rc<Cell<bool>> {
        self.cancel();
        let flag = Rc::new(Cell::new(false));
        self.active = Some(flag.clone());
        flag
    }

    pub fn cancel(&mut self) {
        if let Some(flag) = self.active.take() {
            flag.set(true);
        }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Stream of completion percentages, one per tick, driven by real elapsed
/// time rather than a fixed increment. Ends after yielding 100; dropping
/// the stream cancels it.
#[cfg(feature = "yew")]
pub fn progress_stream(
    total: Duration,
    tick: Duration,
) -> impl futures::Stream<Item = u8> {
    use futures::future;
    use futures::StreamExt;
    use gloo_timers::future::IntervalStream;

    let timer = ProgressTimer::new(total);
    IntervalStream::new(tick.as_millis() as u32).scan(false, move |finished, _| {
        if *finished {
            return future::ready(None);
        }
        let percent = timer.percent();
        if percent >= 100 {
            *finished = true;
        }
        future::ready(Some(percent))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_proportional() {
        let total = Duration::from_secs(100);
        assert_eq!(percent_at(Duration::ZERO, total), 0);
        assert_eq!(percent_at(Duration::from_secs(50), total), 50);
        assert_eq!(percent_at(Duration::from_secs(100), total), 100);
    }

    #[test]
    fn percent_never_exceeds_hundred() {
        let total = Duration::from_secs(10);
        assert_eq!(percent_at(Duration::from_secs(11), total), 100);
        assert_eq!(percent_at(Duration::from_secs(1000), total), 100);
    }

    #[test]
    fn zero_duration_session_is_complete() {
        assert_eq!(percent_at(Duration::ZERO, Duration::ZERO), 100);
    }

    #[test]
    fn fixed_ticks_reach_exactly_hundred() {
        // Ten even steps across the planned duration land on 100, not past it.
        let total = Duration::from_secs(10);
        let percents: Vec<u8> = (0..=10)
            .map(|step| percent_at(Duration::from_secs(step), total))
            .collect();
        assert_eq!(percents.first(), Some(&0));
        assert_eq!(percents.last(), Some(&100));
        assert!(percents.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn timer_starts_near_zero() {
        let timer = ProgressTimer::new(Duration::from_secs(3600));
        assert!(timer.percent() < 5);
    }

    #[test]
    fn begin_hands_out_a_live_flag() {
        let mut guard = SessionGuard::default();
        let flag = guard.begin();
        assert!(!flag.get());
    }

    #[test]
    fn beginning_a_session_cancels_the_previous_one() {
        let mut guard = SessionGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(first.get());
        assert!(!second.get());
    }

    #[test]
    fn cancel_flags_the_active_session() {
        let mut guard = SessionGuard::default();
        let flag = guard.begin();
        guard.cancel();
        assert!(flag.get());
        // repeat cancels are harmless
        guard.cancel();
    }

    #[test]
    fn dropping_the_guard_cancels_the_session() {
        let mut guard = SessionGuard::default();
        let flag = guard.begin();
        drop(guard);
        assert!(flag.get());
    }
}
