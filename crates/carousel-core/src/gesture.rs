#![forbid(unsafe_code)]

//! Drag recognition and swipe translation.
//!
//! Two small state machines live here:
//!
//! - [`DragTracker`] turns raw pointer press/drag/release sequences into
//!   [`DragEvent`]s (`Start`, `End`, `Cancel`).
//! - [`SwipeTranslator`] turns the horizontal offset of a finished drag into a
//!   discrete [`SwipeAction`] for the navigator.
//!
//! # Invariants
//!
//! 1. Every drag sequence is well-formed: `Start` then `End` or `Cancel`.
//!    A press released before crossing the threshold emits nothing.
//! 2. A disabled translator never produces an action and never consumes the
//!    event.
//! 3. An enabled translator always consumes a drag end, even when the offset
//!    is zero, so nested interactive surfaces are not triggered twice.
//! 4. After `reset()` the tracker is idle.

use crate::event::{EventResult, PointerButton, PointerEvent, PointerEventKind, Position};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for drag recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    /// Minimum manhattan distance before a press becomes a drag (default: 3).
    pub drag_threshold: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { drag_threshold: 3 }
    }
}

// ---------------------------------------------------------------------------
// DragEvent
// ---------------------------------------------------------------------------

/// Drag lifecycle events produced by [`DragTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    /// Pointer moved beyond the drag threshold while a button was held.
    Start { pos: Position, button: PointerButton },
    /// Pointer released after a drag.
    End { start: Position, end: Position },
    /// Drag aborted before release.
    Cancel,
}

impl DragEvent {
    /// Signed horizontal distance of a finished drag (`end.x - start.x`).
    ///
    /// Returns `None` for events other than [`DragEvent::End`].
    #[must_use]
    pub fn offset_x(&self) -> Option<i32> {
        match self {
            Self::End { start, end } => Some(end.x.saturating_sub(start.x)),
            Self::Start { .. } | Self::Cancel => None,
        }
    }
}

// ---------------------------------------------------------------------------
// DragTracker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct PressState {
    start: Position,
    button: PointerButton,
    started: bool,
}

/// Stateful drag recognizer.
///
/// Feed every pointer event through [`process`](DragTracker::process).
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    config: GestureConfig,
    press: Option<PressState>,
}

impl DragTracker {
    /// Create a tracker with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            press: None,
        }
    }

    /// Process a pointer event, returning a drag event if one was produced.
    pub fn process(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        let pos = event.position();
        match event.kind {
            PointerEventKind::Down(button) => {
                self.press = Some(PressState {
                    start: pos,
                    button,
                    started: false,
                });
                None
            }
            PointerEventKind::Drag(button) => {
                let Some(press) = self.press.as_mut() else {
                    // Drag without a prior press: start tracking from here.
                    self.press = Some(PressState {
                        start: pos,
                        button,
                        started: false,
                    });
                    return None;
                };
                if press.started {
                    return None;
                }
                if press.start.manhattan_distance(pos) >= self.config.drag_threshold {
                    press.started = true;
                    return Some(DragEvent::Start {
                        pos: press.start,
                        button: press.button,
                    });
                }
                None
            }
            PointerEventKind::Up(_) => {
                let press = self.press.take()?;
                press.started.then_some(DragEvent::End {
                    start: press.start,
                    end: pos,
                })
            }
            PointerEventKind::Cancel => {
                let press = self.press.take()?;
                press.started.then_some(DragEvent::Cancel)
            }
            PointerEventKind::Moved | PointerEventKind::Enter | PointerEventKind::Leave => None,
        }
    }

    /// Whether a drag is currently in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.started)
    }

    /// Reset to idle without emitting `Cancel`.
    pub fn reset(&mut self) {
        self.press = None;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// SwipeTranslator
// ---------------------------------------------------------------------------

/// Discrete navigation request derived from a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeAction {
    /// Dragged left: show the next panel.
    Advance,
    /// Dragged right: show the previous panel.
    Retreat,
}

/// Result of translating a drag end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeOutcome {
    /// Navigation to perform, if any.
    pub action: Option<SwipeAction>,
    /// Whether the drag end must stop propagating.
    pub result: EventResult,
}

impl SwipeOutcome {
    const IGNORED: Self = Self {
        action: None,
        result: EventResult::Ignored,
    };
}

/// Translates drag offsets into [`SwipeAction`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTranslator {
    enabled: bool,
}

impl Default for SwipeTranslator {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SwipeTranslator {
    /// Create a translator.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether swipes are translated.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable translation.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Translate a signed horizontal drag offset.
    #[must_use]
    pub fn translate(&self, offset_x: i32) -> SwipeOutcome {
        if !self.enabled {
            return SwipeOutcome::IGNORED;
        }
        let action = match offset_x.signum() {
            1 => Some(SwipeAction::Retreat),
            -1 => Some(SwipeAction::Advance),
            _ => None,
        };
        tracing::debug!(message = "carousel.swipe", offset_x, ?action);
        SwipeOutcome {
            action,
            result: EventResult::Consumed,
        }
    }

    /// Translate a drag event; only [`DragEvent::End`] can navigate.
    #[must_use]
    pub fn translate_drag(&self, event: &DragEvent) -> SwipeOutcome {
        match event.offset_x() {
            Some(offset_x) => self.translate(offset_x),
            None => SwipeOutcome::IGNORED,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
