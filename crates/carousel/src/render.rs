#![forbid(unsafe_code)]

//! Renderer collaborator.
//!
//! The carousel does not draw. On every render it hands the host one
//! [`PanelFrame`] per panel, then the visible navigation buttons, then the
//! indicator row. The host maps each frame's [`MotionTarget`] onto whatever
//! animation system it has.

use std::time::Duration;

use carousel_core::{Direction, MotionClass, MotionTarget};

use crate::controls::NavButtonView;
use crate::indicators::Indicators;

/// Everything needed to draw and animate one panel.
#[derive(Debug, PartialEq)]
pub struct PanelFrame<'a, P> {
    /// Panel position.
    pub index: usize,
    /// The panel content.
    pub panel: &'a P,
    /// Visual state for this transition.
    pub motion: MotionClass,
    /// Resolved target for the configured animation kind.
    pub target: MotionTarget,
    /// Direction of the transition that produced this frame.
    pub direction: Direction,
    /// Transition duration.
    pub duration: Duration,
}

impl<P> PanelFrame<'_, P> {
    /// Whether this is the visible panel.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.motion == MotionClass::Center
    }
}

/// Draws a carousel.
///
/// Only [`panel`](CarouselRenderer::panel) is required; hosts that draw their
/// own chrome can ignore buttons and indicators.
pub trait CarouselRenderer<P> {
    /// Draw one panel.
    fn panel(&mut self, frame: PanelFrame<'_, P>);

    /// Draw a visible navigation button.
    fn nav_button(&mut self, _button: &NavButtonView) {}

    /// Draw the indicator row.
    fn indicators(&mut self, _indicators: &Indicators) {}
}
