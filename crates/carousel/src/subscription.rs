#![forbid(unsafe_code)]

//! Background tick source for threaded event loops.
//!
//! Hosts that block on a channel instead of polling a deadline can drive
//! autoplay with a [`TickSource`]: a background thread that sends one message
//! per period into the host's `mpsc` channel. The host drains the channel on
//! its event loop and calls `Carousel::on_tick` for each tick message, so all
//! state changes still happen on the loop thread.
//!
//! # How it works
//!
//! 1. `TickSource::spawn` starts a thread that waits on a [`StopSignal`] with a
//!    timeout of one period, then builds a message and sends it.
//! 2. The message factory sits behind an `ArcSwap`; `set_message` swaps it and
//!    the next tick uses the new factory without restarting the thread.
//! 3. `set_period` stops the thread and starts a new one with the new period.
//!    Periods below [`MIN_TICK_PERIOD`] are raised to it.
//! 4. Dropping the source (or `stop`) signals the thread to exit. A
//!    disconnected receiver also ends the thread.

use std::fmt;
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use arc_swap::ArcSwap;

/// Shortest period a [`TickSource`] will run at.
pub const MIN_TICK_PERIOD: Duration = Duration::from_millis(1);

/// Signal for stopping a tick thread.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl fmt::Debug for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopSignal")
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

impl StopSignal {
    /// Create a new stop signal pair (signal, trigger).
    pub(crate) fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: inner.clone(),
        };
        let trigger = StopTrigger { inner };
        (signal, trigger)
    }

    /// Check if the stop signal has been triggered.
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait for either the stop signal or a timeout.
    ///
    /// Returns `true` if stopped, `false` if timed out.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        if *stopped {
            return true;
        }
        let (stopped, _) = cvar
            .wait_timeout_while(stopped, duration, |stopped| !*stopped)
            .unwrap_or_else(PoisonError::into_inner);
        *stopped
    }
}

/// Trigger to stop a tick thread from the owning side.
pub(crate) struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    /// Signal the thread to stop.
    pub(crate) fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        *stopped = true;
        cvar.notify_all();
    }
}

/// A running tick thread.
struct RunningTicker {
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl RunningTicker {
    /// Stop the thread and join it.
    fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RunningTicker {
    fn drop(&mut self) {
        // Signal only; `stop` is the joining path.
        self.trigger.stop();
    }
}

type MessageFactory<M> = Box<dyn Fn() -> M + Send + Sync>;

/// Periodic message source running on a background thread.
pub struct TickSource<M: Send + 'static> {
    period: Duration,
    factory: Arc<ArcSwap<MessageFactory<M>>>,
    sender: mpsc::Sender<M>,
    running: Option<RunningTicker>,
}

impl<M: Send + 'static> fmt::Debug for TickSource<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickSource")
            .field("period", &self.period)
            .field("running", &self.is_running())
            .finish()
    }
}

impl<M: Send + 'static> TickSource<M> {
    /// Start sending `make_msg()` every `period` into `sender`.
    ///
    /// `period` is raised to at least [`MIN_TICK_PERIOD`].
    pub fn spawn(
        period: Duration,
        sender: mpsc::Sender<M>,
        make_msg: impl Fn() -> M + Send + Sync + 'static,
    ) -> Self {
        let factory: MessageFactory<M> = Box::new(make_msg);
        let mut source = Self {
            period: period.max(MIN_TICK_PERIOD),
            factory: Arc::new(ArcSwap::from_pointee(factory)),
            sender,
            running: None,
        };
        source.start();
        source
    }

    /// Current period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the thread is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Replace the message factory. The thread keeps its phase.
    pub fn set_message(&self, make_msg: impl Fn() -> M + Send + Sync + 'static) {
        let factory: MessageFactory<M> = Box::new(make_msg);
        self.factory.store(Arc::new(factory));
    }

    /// Change the period, restarting the thread. Returns `true` if it changed.
    pub fn set_period(&mut self, period: Duration) -> bool {
        let period = period.max(MIN_TICK_PERIOD);
        if period == self.period {
            return false;
        }
        self.period = period;
        if let Some(running) = self.running.take() {
            running.stop();
            self.start();
        }
        tracing::debug!(
            message = "carousel.tick_source.period",
            period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX)
        );
        true
    }

    /// Stop the thread and wait for it to exit.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.stop();
            tracing::debug!(message = "carousel.tick_source.stopped");
        }
    }

    fn start(&mut self) {
        let (signal, trigger) = StopSignal::new();
        let sender = self.sender.clone();
        let factory = self.factory.clone();
        let period = self.period;

        let thread = thread::spawn(move || {
            loop {
                if signal.wait_timeout(period) {
                    break;
                }
                let make_msg = factory.load_full();
                if sender.send((**make_msg)()).is_err() {
                    break;
                }
            }
        });

        self.running = Some(RunningTicker {
            trigger,
            thread: Some(thread),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMsg {
        Tick,
        Other,
    }

    #[test]
    fn zero_period_is_raised_to_floor() {
        let (tx, rx) = mpsc::channel();
        let mut source = TickSource::spawn(Duration::ZERO, tx, || TestMsg::Tick);
        assert_eq!(source.period(), MIN_TICK_PERIOD);

        thread::sleep(Duration::from_millis(50));
        source.stop();

        // At most one message per millisecond, plus scheduling slack.
        let count = rx.try_iter().count();
        assert!(count <= 100, "zero period flooded the channel: {count}");
    }

    #[test]
    fn set_period_to_zero_uses_floor() {
        let (tx, _rx) = mpsc::channel();
        let mut source = TickSource::spawn(Duration::from_millis(5), tx, || TestMsg::Tick);
        assert!(source.set_period(Duration::ZERO));
        assert_eq!(source.period(), MIN_TICK_PERIOD);
        assert!(!source.set_period(Duration::from_nanos(10)));
        source.stop();
    }

    #[test]
    fn stop_interrupts_long_wait() {
        let (tx, rx) = mpsc::channel();
        let mut source = TickSource::spawn(Duration::from_secs(60), tx, || TestMsg::Tick);
        let started = std::time::Instant::now();
        source.stop();
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn tick_source_fires() {
        let (tx, rx) = mpsc::channel();
        let mut source = TickSource::spawn(Duration::from_millis(10), tx, || TestMsg::Tick);

        thread::sleep(Duration::from_millis(60));
        source.stop();

        let msgs: Vec<_> = rx.try_iter().collect();
        assert!(!msgs.is_empty(), "Should have received at least one tick");
        assert!(msgs.iter().all(|m| *m == TestMsg::Tick));
    }

    #[test]
    fn swapped_message_is_used_without_restart() {
        let (tx, rx) = mpsc::channel();
        let mut source = TickSource::spawn(Duration::from_millis(5), tx, || TestMsg::Tick);
        source.set_message(|| TestMsg::Other);
        assert!(source.is_running());

        thread::sleep(Duration::from_millis(40));
        source.stop();

        let msgs: Vec<_> = rx.try_iter().collect();
        assert!(msgs.contains(&TestMsg::Other));
    }

    #[test]
    fn stop_ends_messages() {
        let (tx, rx) = mpsc::channel();
        let mut source = TickSource::spawn(Duration::from_millis(5), tx, || TestMsg::Tick);
        thread::sleep(Duration::from_millis(20));
        source.stop();
        assert!(!source.is_running());

        let _ = rx.try_iter().count();
        thread::sleep(Duration::from_millis(30));
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn set_period_restarts_running_source() {
        let (tx, rx) = mpsc::channel();
        let mut source = TickSource::spawn(Duration::from_secs(60), tx, || TestMsg::Tick);
        assert!(source.set_period(Duration::from_millis(5)));
        assert!(!source.set_period(Duration::from_millis(5)));
        assert!(source.is_running());

        thread::sleep(Duration::from_millis(40));
        source.stop();
        assert!(rx.try_iter().count() > 0);
    }

    #[test]
    fn dropping_source_stops_thread() {
        let (tx, rx) = mpsc::channel();
        let source = TickSource::spawn(Duration::from_millis(5), tx, || TestMsg::Tick);
        drop(source);

        thread::sleep(Duration::from_millis(20));
        let _ = rx.try_iter().count();
        thread::sleep(Duration::from_millis(30));
        assert_eq!(rx.try_iter().count(), 0);
    }
}
