#![forbid(unsafe_code)]

//! Restartable periodic timer.
//!
//! Two concerns are kept apart:
//!
//! - [`IntervalScheduler`] owns only timing: the period and the next deadline.
//!   Changing the period restarts the phase.
//! - [`Interval`] pairs a scheduler with a swappable tick action. Swapping the
//!   action leaves the phase alone, so replacing a closure never delays or
//!   resets the next tick.
//!
//! The tick action receives the state it acts on as an argument instead of
//! capturing it, so every tick sees the latest committed state.
//!
//! Both types are driven by the host loop: call `poll(now)` whenever the loop
//! wakes up (for example after sleeping until [`IntervalScheduler::next_deadline`]).
//!
//! # Invariants
//!
//! 1. A disarmed scheduler never reports due ticks.
//! 2. After `poll(now)` returns, the next deadline is strictly after `now`.
//! 3. The phase is anchored at the last `start` / period change; late polls do
//!    not drift it.
//! 4. Zero periods are clamped to 1ns.

use std::fmt;
use std::time::Duration;

use web_time::Instant;

const MIN_PERIOD: Duration = Duration::from_nanos(1);

/// Period and deadline of a periodic timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalScheduler {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalScheduler {
    /// Create a disarmed scheduler.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next_due: None,
        }
    }

    /// Create a scheduler armed at `now`.
    #[must_use]
    pub fn started(period: Duration, now: Instant) -> Self {
        let mut scheduler = Self::new(period);
        scheduler.start(now);
        scheduler
    }

    /// Arm (or re-arm) the timer; the first tick is due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Disarm the timer.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Whether the timer is running.
    #[inline]
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Current period.
    #[inline]
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Change the period.
    ///
    /// Returns `true` if the period changed. A running timer is restarted from
    /// `now`; a disarmed one stays disarmed.
    pub fn set_period(&mut self, period: Duration, now: Instant) -> bool {
        let period = period.max(MIN_PERIOD);
        if period == self.period {
            return false;
        }
        self.period = period;
        if self.is_armed() {
            self.start(now);
        }
        true
    }

    /// Next deadline, if armed.
    #[inline]
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// Time left until the next tick (zero if overdue).
    #[must_use]
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Number of ticks that became due up to `now`, advancing the deadline.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }
        let period_ns = self.period.as_nanos();
        let late_ns = now.duration_since(due).as_nanos();
        let ticks = late_ns / period_ns + 1;
        let remaining = period_ns - late_ns % period_ns;
        let remaining = Duration::from_nanos(u64::try_from(remaining).unwrap_or(u64::MAX));
        self.next_due = Some(now + remaining);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}

/// Tick action run against the target state.
pub type TickAction<T> = Box<dyn FnMut(&mut T)>;

/// A scheduler paired with a swappable tick action.
pub struct Interval<T> {
    scheduler: IntervalScheduler,
    action: TickAction<T>,
}

impl<T> fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interval")
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

impl<T> Interval<T> {
    /// Create a disarmed interval.
    #[must_use]
    pub fn new(period: Duration, action: impl FnMut(&mut T) + 'static) -> Self {
        Self {
            scheduler: IntervalScheduler::new(period),
            action: Box::new(action),
        }
    }

    /// Replace the tick action. The timer phase is unaffected.
    pub fn set_action(&mut self, action: impl FnMut(&mut T) + 'static) {
        self.action = Box::new(action);
    }

    /// Change the period, restarting the timer if it is running.
    pub fn set_period(&mut self, period: Duration, now: Instant) -> bool {
        self.scheduler.set_period(period, now)
    }

    /// Arm the timer at `now`.
    pub fn start(&mut self, now: Instant) {
        self.scheduler.start(now);
    }

    /// Disarm the timer.
    pub fn cancel(&mut self) {
        self.scheduler.cancel();
    }

    /// Timing state.
    #[must_use]
    pub const fn scheduler(&self) -> &IntervalScheduler {
        &self.scheduler
    }

    /// Mutable timing state.
    pub fn scheduler_mut(&mut self) -> &mut IntervalScheduler {
        &mut self.scheduler
    }

    /// Run the action once if at least one tick is due.
    ///
    /// Missed ticks are coalesced into a single invocation.
    pub fn poll(&mut self, now: Instant, target: &mut T) -> bool {
        if self.scheduler.poll(now) == 0 {
            return false;
        }
        self.fire(target);
        true
    }

    /// Run the action now, independent of the schedule.
    pub fn fire(&mut self, target: &mut T) {
        (self.action)(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_10: Duration = Duration::from_millis(10);
    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn new_scheduler_is_disarmed() {
        let mut s = IntervalScheduler::new(MS_100);
        assert!(!s.is_armed());
        assert_eq!(s.poll(Instant::now() + Duration::from_secs(10)), 0);
    }

    #[test]
    fn ticks_once_per_period() {
        let t0 = Instant::now();
        let mut s = IntervalScheduler::started(MS_100, t0);
        assert_eq!(s.poll(t0 + MS_10), 0);
        assert_eq!(s.poll(t0 + MS_100), 1);
        assert_eq!(s.poll(t0 + MS_100 + MS_10), 0);
        assert_eq!(s.poll(t0 + 2 * MS_100), 1);
    }

    #[test]
    fn late_poll_reports_missed_ticks_without_drift() {
        let t0 = Instant::now();
        let mut s = IntervalScheduler::started(MS_100, t0);
        assert_eq!(s.poll(t0 + Duration::from_millis(350)), 3);
        assert_eq!(s.next_deadline(), Some(t0 + Duration::from_millis(400)));
    }

    #[test]
    fn period_change_restarts_phase() {
        let t0 = Instant::now();
        let mut s = IntervalScheduler::started(MS_100, t0);
        assert!(s.set_period(Duration::from_millis(200), t0 + Duration::from_millis(90)));
        assert_eq!(s.poll(t0 + MS_100), 0);
        assert_eq!(s.poll(t0 + Duration::from_millis(290)), 1);
    }

    #[test]
    fn same_period_is_not_a_restart() {
        let t0 = Instant::now();
        let mut s = IntervalScheduler::started(MS_100, t0);
        assert!(!s.set_period(MS_100, t0 + Duration::from_millis(90)));
        assert_eq!(s.poll(t0 + MS_100), 1);
    }

    #[test]
    fn period_change_keeps_disarmed_state() {
        let mut s = IntervalScheduler::new(MS_100);
        s.set_period(MS_10, Instant::now());
        assert!(!s.is_armed());
    }

    #[test]
    fn cancel_stops_ticks() {
        let t0 = Instant::now();
        let mut s = IntervalScheduler::started(MS_100, t0);
        s.cancel();
        assert_eq!(s.poll(t0 + Duration::from_secs(1)), 0);
        assert_eq!(s.time_until(t0), None);
    }

    #[test]
    fn zero_period_is_clamped() {
        let s = IntervalScheduler::new(Duration::ZERO);
        assert_eq!(s.period(), Duration::from_nanos(1));
    }

    #[test]
    fn time_until_saturates() {
        let t0 = Instant::now();
        let s = IntervalScheduler::started(MS_100, t0);
        assert_eq!(s.time_until(t0), Some(MS_100));
        assert_eq!(s.time_until(t0 + Duration::from_secs(1)), Some(Duration::ZERO));
    }

    #[test]
    fn interval_runs_action_against_target() {
        let t0 = Instant::now();
        let mut interval = Interval::new(MS_100, |n: &mut u32| *n += 1);
        interval.start(t0);
        let mut count = 0;
        assert!(!interval.poll(t0 + MS_10, &mut count));
        assert!(interval.poll(t0 + MS_100, &mut count));
        assert_eq!(count, 1);
    }

    #[test]
    fn interval_coalesces_missed_ticks() {
        let t0 = Instant::now();
        let mut interval = Interval::new(MS_100, |n: &mut u32| *n += 1);
        interval.start(t0);
        let mut count = 0;
        interval.poll(t0 + Duration::from_millis(500), &mut count);
        assert_eq!(count, 1);
    }

    #[test]
    fn swapping_action_keeps_phase() {
        let t0 = Instant::now();
        let mut interval = Interval::new(MS_100, |n: &mut u32| *n += 1);
        interval.start(t0);
        let deadline = interval.scheduler().next_deadline();
        interval.set_action(|n: &mut u32| *n += 10);
        assert_eq!(interval.scheduler().next_deadline(), deadline);

        let mut count = 0;
        interval.poll(t0 + MS_100, &mut count);
        assert_eq!(count, 10);
    }
}
