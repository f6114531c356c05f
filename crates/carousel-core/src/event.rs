#![forbid(unsafe_code)]

//! Pointer event types consumed by the carousel.
//!
//! Hosts translate their native input (terminal mouse reports, DOM pointer
//! events, winit cursor events) into [`PointerEvent`] values. Coordinates are
//! signed so that hosts reporting positions relative to the widget origin can
//! express drags that leave the widget to the left or top.
//!
//! # Design Notes
//!
//! - `Enter` / `Leave` describe the widget root's bounding box, not individual
//!   panels. They drive hover-pause for autoplay.
//! - `Cancel` covers focus loss, pointer capture loss and Escape; it aborts a
//!   drag in progress without navigating.

/// A 2D pointer position (host units, usually pixels or cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, pen contact, or touch.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Middle,
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Button pressed.
    Down(PointerButton),
    /// Button released.
    Up(PointerButton),
    /// Pointer moved while a button is held.
    Drag(PointerButton),
    /// Pointer moved with no button held.
    Moved,
    /// Pointer entered the widget root.
    Enter,
    /// Pointer left the widget root.
    Leave,
    /// Interaction aborted (focus loss, capture loss, Escape).
    Cancel,
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    /// Get the position of this event.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Whether this event belongs to a press/drag/release sequence.
    #[must_use]
    pub const fn is_press_sequence(&self) -> bool {
        matches!(
            self.kind,
            PointerEventKind::Down(_)
                | PointerEventKind::Up(_)
                | PointerEventKind::Drag(_)
                | PointerEventKind::Cancel
        )
    }
}

/// Outcome of offering an event to the carousel.
///
/// `Consumed` means the host must not forward the event to enclosing
/// interactive surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// The event was not used.
    #[default]
    Ignored,
    /// The event was handled and must not propagate further.
    Consumed,
}

impl EventResult {
    /// Whether propagation must stop.
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_handles_negative_coordinates() {
        let a = Position::new(-3, 4);
        let b = Position::new(2, -1);
        assert_eq!(a.manhattan_distance(b), 10);
        assert_eq!(b.manhattan_distance(a), 10);
    }

    #[test]
    fn press_sequence_classification() {
        let down = PointerEvent::new(PointerEventKind::Down(PointerButton::Primary), 0, 0);
        let enter = PointerEvent::new(PointerEventKind::Enter, 0, 0);
        let cancel = PointerEvent::new(PointerEventKind::Cancel, 0, 0);
        assert!(down.is_press_sequence());
        assert!(cancel.is_press_sequence());
        assert!(!enter.is_press_sequence());
    }

    #[test]
    fn event_result_default_is_ignored() {
        assert_eq!(EventResult::default(), EventResult::Ignored);
        assert!(EventResult::Consumed.is_consumed());
    }
}
