#![forbid(unsafe_code)]

//! Per-panel motion classification.
//!
//! [`classify`] is a pure function of the committed [`NavState`], the panel
//! index and the highest panel index. It is evaluated for every panel on every
//! render and never cached: `active` and `previous_active` change on each
//! transition, so any stored per-panel state would go stale.
//!
//! # Wraparound convention
//!
//! When the active panel is the last one, panel 0 is treated as lying to its
//! right; when the active panel is the first one, the last panel is treated as
//! lying to its left. This keeps a last -> first advance moving in the same
//! visual direction as every other advance.
//!
//! # Invariants
//!
//! 1. Exactly one panel of `0..len` is [`MotionClass::Center`] when
//!    `active < len`; none when `active` is out of range.
//! 2. Only `previous_active` can be exiting.
//! 3. Same inputs, same class.

use std::time::Duration;

use crate::nav::{Direction, NavState};

/// Visual state of one panel for the current render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionClass {
    /// The visible panel.
    Center,
    /// The previously visible panel leaving towards the left.
    ExitLeft,
    /// The previously visible panel leaving towards the right.
    ExitRight,
    /// Off-screen, parked on the left.
    HiddenLeft,
    /// Off-screen, parked on the right.
    HiddenRight,
}

impl MotionClass {
    /// Whether this panel is animating out.
    #[must_use]
    pub const fn is_exiting(self) -> bool {
        matches!(self, Self::ExitLeft | Self::ExitRight)
    }

    /// Whether this panel is parked off-screen.
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::HiddenLeft | Self::HiddenRight)
    }

    /// Animation target for this class under `kind`.
    #[must_use]
    pub const fn target(self, kind: AnimationKind) -> MotionTarget {
        let slide = matches!(kind, AnimationKind::Slide);
        let fade = matches!(kind, AnimationKind::Fade);
        let (offset, displayed) = match self {
            Self::Center => {
                return MotionTarget {
                    offset_percent: Some(0),
                    opacity: Some(1.0),
                    layer: 1,
                    displayed: true,
                };
            }
            Self::ExitLeft => (-100, true),
            Self::ExitRight => (100, true),
            Self::HiddenLeft => (-100, false),
            Self::HiddenRight => (100, false),
        };
        MotionTarget {
            offset_percent: if slide { Some(offset) } else { None },
            opacity: if fade { Some(0.0) } else { None },
            layer: 0,
            displayed,
        }
    }
}

/// Animation style for panel transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "config-files",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AnimationKind {
    /// Cross-fade in place.
    #[default]
    Fade,
    /// Horizontal slide.
    Slide,
}

impl AnimationKind {
    /// Transition duration used when none is configured.
    #[must_use]
    pub const fn default_duration(self) -> Duration {
        match self {
            Self::Fade => Duration::from_millis(500),
            Self::Slide => Duration::from_millis(200),
        }
    }
}

/// Where a panel should animate to.
///
/// `None` fields are left untouched by the renderer for this animation kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTarget {
    /// Horizontal offset as a percentage of the panel width.
    pub offset_percent: Option<i16>,
    /// Target opacity in `0.0..=1.0`.
    pub opacity: Option<f32>,
    /// Stacking layer; the visible panel is drawn above the rest.
    pub layer: u8,
    /// Whether the panel is laid out at all.
    pub displayed: bool,
}

/// Classify panel `index` for the committed `state`.
#[must_use]
pub fn classify(index: usize, state: &NavState, max_index: usize) -> MotionClass {
    let active = state.active;
    let wraps_right = active == max_index && index == 0;
    let wraps_left = active == 0 && index == max_index;

    if index == active {
        MotionClass::Center
    } else if index == state.previous_active {
        let mut class = match state.direction {
            Direction::Forward => MotionClass::ExitLeft,
            Direction::Backward => MotionClass::ExitRight,
        };
        if wraps_right {
            class = MotionClass::ExitRight;
        }
        if wraps_left {
            class = MotionClass::ExitLeft;
        }
        class
    } else {
        let mut class = if index < active {
            MotionClass::HiddenLeft
        } else {
            MotionClass::HiddenRight
        };
        if wraps_right {
            class = MotionClass::HiddenRight;
        }
        if wraps_left {
            class = MotionClass::HiddenLeft;
        }
        class
    }
}

/// Classify every panel of a `len`-panel carousel.
#[must_use]
pub fn classify_all(state: &NavState, len: usize) -> Vec<MotionClass> {
    let max_index = len.saturating_sub(1);
    (0..len).map(|i| classify(i, state, max_index)).collect()
}
