#![forbid(unsafe_code)]

//! Navigation state machine.
//!
//! [`Navigator`] owns the active panel index, the previously active index and
//! the direction of the last transition. Every mutation goes through
//! [`advance`](Navigator::advance), [`retreat`](Navigator::retreat),
//! [`jump_to`](Navigator::jump_to) or [`initialize`](Navigator::initialize),
//! each of which returns the committed [`Transition`].
//!
//! # Invariants
//!
//! 1. With `strict_bounds`, `active` and `previous_active` stay inside
//!    `0..len` (both `0` when `len <= 1`) after any mutation.
//! 2. Directional callbacks (`on_next` / `on_prev`) fire before `on_change`,
//!    and both fire before the new state is committed, with
//!    `(new_index, old_active)`.
//! 3. Advance/retreat always fire their callbacks, even when the index does
//!    not move (end of a non-wrapping collection, `len <= 1`).
//! 4. Jumps never fire directional callbacks.
//!
//! Mutators always read the committed state, so a tick, a click and a drag
//! end delivered back to back each see the result of the previous one.

use std::fmt;

/// Direction of the most recent transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// A "next" move.
    #[default]
    Forward,
    /// A "prev" move.
    Backward,
}

impl Direction {
    /// Returns `true` for [`Direction::Forward`].
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

/// Committed navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NavState {
    /// Index of the visible panel.
    pub active: usize,
    /// Index that was visible before the last transition.
    pub previous_active: usize,
    /// Direction of the last transition.
    pub direction: Direction,
}

impl NavState {
    /// Create a state.
    #[must_use]
    pub const fn new(active: usize, previous_active: usize, direction: Direction) -> Self {
        Self {
            active,
            previous_active,
            direction,
        }
    }
}

/// Index policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavPolicy {
    /// Advancing past the last panel returns to the first (and vice versa).
    pub wraparound: bool,
    /// Requested indices are clamped into `0..len`.
    pub strict_bounds: bool,
}

impl Default for NavPolicy {
    fn default() -> Self {
        Self {
            wraparound: true,
            strict_bounds: true,
        }
    }
}

/// What caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionCause {
    /// First placement at mount.
    Initial,
    /// `advance()` (next button, swipe left, autoplay).
    Advance,
    /// `retreat()` (prev button, swipe right).
    Retreat,
    /// `jump_to()` (indicator press).
    Jump,
}

impl TransitionCause {
    /// Stable name used in log events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Advance => "advance",
            Self::Retreat => "retreat",
            Self::Jump => "jump",
        }
    }
}

/// A committed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Active index before the transition.
    pub from: usize,
    /// Active index after the transition.
    pub to: usize,
    /// Direction recorded for the transition.
    pub direction: Direction,
    /// What triggered it.
    pub cause: TransitionCause,
}

impl Transition {
    /// Whether the active index changed.
    #[must_use]
    pub const fn moved(&self) -> bool {
        self.from != self.to
    }
}

type IndexCallback = Box<dyn FnMut(usize, usize)>;

/// User callbacks, each called with `(new_index, old_index)`.
#[derive(Default)]
pub struct NavCallbacks {
    on_change: Option<IndexCallback>,
    on_next: Option<IndexCallback>,
    on_prev: Option<IndexCallback>,
}

impl fmt::Debug for NavCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_next", &self.on_next.is_some())
            .field("on_prev", &self.on_prev.is_some())
            .finish()
    }
}

impl NavCallbacks {
    /// Create an empty callback set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on every committed transition except a suppressed placement.
    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called on every advance, before `on_change`.
    #[must_use]
    pub fn on_next(mut self, f: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_next = Some(Box::new(f));
        self
    }

    /// Called on every retreat, before `on_change`.
    #[must_use]
    pub fn on_prev(mut self, f: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_prev = Some(Box::new(f));
        self
    }

    fn fire(&mut self, cause: TransitionCause, to: usize, from: usize) {
        let directional = match cause {
            TransitionCause::Advance => self.on_next.as_mut(),
            TransitionCause::Retreat => self.on_prev.as_mut(),
            TransitionCause::Initial | TransitionCause::Jump => None,
        };
        if let Some(cb) = directional {
            cb(to, from);
        }
        if let Some(cb) = self.on_change.as_mut() {
            cb(to, from);
        }
    }
}

/// The navigation state machine.
#[derive(Debug, Default)]
pub struct Navigator {
    policy: NavPolicy,
    len: usize,
    state: NavState,
    callbacks: NavCallbacks,
}

impl Navigator {
    /// Create a navigator over `len` panels, positioned at index 0.
    #[must_use]
    pub fn new(len: usize, policy: NavPolicy) -> Self {
        Self {
            policy,
            len,
            state: NavState::default(),
            callbacks: NavCallbacks::default(),
        }
    }

    /// Attach callbacks.
    #[must_use]
    pub fn with_callbacks(mut self, callbacks: NavCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Replace callbacks.
    pub fn set_callbacks(&mut self, callbacks: NavCallbacks) {
        self.callbacks = callbacks;
    }

    /// Place the carousel at `requested` on mount.
    ///
    /// Both `active` and `previous_active` take the (possibly clamped) index,
    /// so nothing is exiting on the first render. Unless suppressed,
    /// `on_change(active, active)` fires.
    pub fn initialize(&mut self, requested: usize, suppress_callback: bool) -> Transition {
        let index = self.resolve_index(requested);
        if !suppress_callback {
            self.callbacks.fire(TransitionCause::Initial, index, index);
        }
        self.state = NavState::new(index, index, Direction::Forward);
        let transition = Transition {
            from: index,
            to: index,
            direction: Direction::Forward,
            cause: TransitionCause::Initial,
        };
        log_transition(&transition);
        transition
    }

    /// Move to the next panel, wrapping to 0 at the end when allowed.
    pub fn advance(&mut self) -> Transition {
        let active = self.state.active;
        let next = if active < self.last_index() {
            active + 1
        } else if self.policy.wraparound {
            0
        } else {
            active
        };
        self.commit(next, Direction::Forward, TransitionCause::Advance)
    }

    /// Move to the previous panel, wrapping to the last at 0 when allowed.
    pub fn retreat(&mut self) -> Transition {
        let active = self.state.active;
        let next = if active > 0 {
            active - 1
        } else if self.policy.wraparound {
            self.last_index()
        } else {
            active
        };
        self.commit(next, Direction::Backward, TransitionCause::Retreat)
    }

    /// Jump straight to `index` (indicator press).
    ///
    /// Direction is `Forward` when `index >= active`. No wraparound applies.
    pub fn jump_to(&mut self, index: usize) -> Transition {
        let direction = if index >= self.state.active {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.commit(index, direction, TransitionCause::Jump)
    }

    /// Current committed state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> NavState {
        self.state
    }

    /// Index of the visible panel.
    #[inline]
    #[must_use]
    pub const fn active(&self) -> usize {
        self.state.active
    }

    /// Number of panels.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no panels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest valid index (`0` for an empty collection).
    #[inline]
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Update the panel count. The committed state is not re-clamped.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Current policy.
    #[must_use]
    pub const fn policy(&self) -> NavPolicy {
        self.policy
    }

    /// Replace the policy.
    pub fn set_policy(&mut self, policy: NavPolicy) {
        self.policy = policy;
    }

    fn resolve_index(&self, index: usize) -> usize {
        if self.policy.strict_bounds {
            index.min(self.last_index())
        } else {
            index
        }
    }

    fn commit(&mut self, target: usize, direction: Direction, cause: TransitionCause) -> Transition {
        let from = self.state.active;
        let to = self.resolve_index(target);
        self.callbacks.fire(cause, to, from);
        self.state = NavState::new(to, from, direction);
        let transition = Transition {
            from,
            to,
            direction,
            cause,
        };
        log_transition(&transition);
        transition
    }
}

fn log_transition(transition: &Transition) {
    tracing::debug!(
        message = "carousel.transition",
        cause = transition.cause.as_str(),
        from = transition.from,
        to = transition.to,
        forward = transition.direction.is_forward(),
    );
}
