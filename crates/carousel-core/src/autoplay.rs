#![forbid(unsafe_code)]

//! Autoplay: timed advances gated by an enable flag and hover-pause.
//!
//! The controller owns an [`Interval`] over the [`Navigator`]. On every due
//! tick it checks `enabled && !paused` against its current flags and, if the
//! gate is open, runs the tick action (by default [`Navigator::advance`], with
//! callbacks, exactly like a click on the next button).
//!
//! # State
//!
//! | enabled | paused | tick |
//! |---------|--------|------|
//! | false   | any    | timer disarmed, nothing |
//! | true    | true   | timer keeps its phase, tick skipped |
//! | true    | false  | advance |
//!
//! `paused` only follows pointer enter/leave when stop-on-hover is configured.
//! Manual navigation never touches the timer phase.

use std::time::Duration;

use web_time::Instant;

use crate::interval::Interval;
use crate::nav::Navigator;

/// Autoplay controller.
#[derive(Debug)]
pub struct AutoplayController {
    enabled: bool,
    paused: bool,
    stop_on_hover: bool,
    interval: Interval<Navigator>,
}

impl AutoplayController {
    /// Create a controller. When `enabled`, the timer starts at `now`.
    #[must_use]
    pub fn new(enabled: bool, stop_on_hover: bool, period: Duration, now: Instant) -> Self {
        let mut interval = Interval::new(period, |nav: &mut Navigator| {
            nav.advance();
        });
        if enabled {
            interval.start(now);
        }
        Self {
            enabled,
            paused: false,
            stop_on_hover,
            interval,
        }
    }

    /// Whether autoplay is configured on.
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the pointer is currently pausing autoplay.
    #[inline]
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether hovering pauses autoplay.
    #[inline]
    #[must_use]
    pub const fn stops_on_hover(&self) -> bool {
        self.stop_on_hover
    }

    /// Tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.interval.scheduler().period()
    }

    /// Next tick deadline, if the timer is running.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.interval.scheduler().next_deadline()
    }

    /// Whether a tick delivered now would advance.
    #[must_use]
    pub const fn should_advance(&self) -> bool {
        self.enabled && !self.paused
    }

    /// Turn autoplay on or off. Turning it on re-arms the timer from `now`.
    pub fn set_enabled(&mut self, enabled: bool, now: Instant) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            self.interval.start(now);
        } else {
            self.interval.cancel();
        }
        tracing::debug!(message = "carousel.autoplay.enabled", enabled);
    }

    /// Change whether hovering pauses autoplay. Turning it off clears a pause.
    pub fn set_stop_on_hover(&mut self, stop_on_hover: bool) {
        self.stop_on_hover = stop_on_hover;
        if !stop_on_hover {
            self.paused = false;
        }
    }

    /// Change the tick period, restarting the timer.
    pub fn set_period(&mut self, period: Duration, now: Instant) {
        if self.interval.set_period(period, now) {
            tracing::debug!(
                message = "carousel.autoplay.period",
                period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX)
            );
        }
    }

    /// Replace what a tick does. The timer phase is unaffected.
    pub fn set_tick_action(&mut self, action: impl FnMut(&mut Navigator) + 'static) {
        self.interval.set_action(action);
    }

    /// Pointer entered the widget root.
    pub fn pointer_enter(&mut self) {
        if self.stop_on_hover {
            self.paused = true;
        }
    }

    /// Pointer left the widget root.
    pub fn pointer_leave(&mut self) {
        if self.stop_on_hover {
            self.paused = false;
        }
    }

    /// Drive the timer. Returns `true` if a tick ran the action.
    pub fn poll(&mut self, now: Instant, nav: &mut Navigator) -> bool {
        if self.interval.scheduler_mut().poll(now) == 0 {
            return false;
        }
        self.tick(nav)
    }

    /// Apply one tick delivered by an external tick source.
    pub fn tick(&mut self, nav: &mut Navigator) -> bool {
        if !self.should_advance() {
            tracing::trace!(
                message = "carousel.autoplay.skip",
                enabled = self.enabled,
                paused = self.paused
            );
            return false;
        }
        tracing::debug!(message = "carousel.autoplay.tick", active = nav.active());
        self.interval.fire(nav);
        true
    }

    /// Disarm the timer (widget teardown).
    pub fn shutdown(&mut self) {
        self.interval.cancel();
    }
}
