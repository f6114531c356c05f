#![forbid(unsafe_code)]

//! Previous/next navigation controls.
//!
//! How a control looks is a capability chosen once, when the carousel is
//! built: [`IconNavControl`] (the default glyph button) or any
//! [`CustomNavControl`]. Whether a control is shown at all is decided by
//! [`button_visible`] on every render.

use std::fmt;

use carousel_core::CarouselConfig;

/// Which control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSide {
    /// Shows the previous panel; drawn on the left.
    Prev,
    /// Shows the next panel; drawn on the right.
    Next,
}

impl NavSide {
    /// Accessible label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prev => "Previous",
            Self::Next => "Next",
        }
    }
}

/// Inputs a control renderer receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtonContext {
    /// Which control.
    pub side: NavSide,
    /// Keep the control visible instead of revealing it on hover.
    pub always_visible: bool,
    /// Stretch the control over the full widget height.
    pub full_height: bool,
}

/// A control ready to be drawn by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButtonView {
    /// Which control; the renderer wires `Prev` to `Carousel::prev` and
    /// `Next` to `Carousel::next`.
    pub side: NavSide,
    /// Accessible label.
    pub label: String,
    /// Content to draw.
    pub content: String,
    /// Keep visible instead of revealing on hover.
    pub always_visible: bool,
    /// Stretch over the full widget height.
    pub full_height: bool,
}

/// Renders a navigation control.
pub trait NavControl {
    /// Build the view for one control.
    fn view(&self, ctx: &NavButtonContext) -> NavButtonView;
}

/// Default control: a glyph button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconNavControl {
    prev_icon: String,
    next_icon: String,
}

impl Default for IconNavControl {
    fn default() -> Self {
        Self {
            prev_icon: "‹".to_owned(),
            next_icon: "›".to_owned(),
        }
    }
}

impl IconNavControl {
    /// Use custom glyphs.
    #[must_use]
    pub fn with_icons(prev_icon: impl Into<String>, next_icon: impl Into<String>) -> Self {
        Self {
            prev_icon: prev_icon.into(),
            next_icon: next_icon.into(),
        }
    }
}

impl NavControl for IconNavControl {
    fn view(&self, ctx: &NavButtonContext) -> NavButtonView {
        let icon = match ctx.side {
            NavSide::Prev => &self.prev_icon,
            NavSide::Next => &self.next_icon,
        };
        NavButtonView {
            side: ctx.side,
            label: ctx.side.label().to_owned(),
            content: icon.clone(),
            always_visible: ctx.always_visible,
            full_height: ctx.full_height,
        }
    }
}

/// A control backed by a closure.
pub struct CustomNavControl<F> {
    render: F,
}

impl<F> CustomNavControl<F>
where
    F: Fn(&NavButtonContext) -> NavButtonView,
{
    /// Wrap a render closure.
    #[must_use]
    pub fn new(render: F) -> Self {
        Self { render }
    }
}

impl<F> fmt::Debug for CustomNavControl<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomNavControl").finish_non_exhaustive()
    }
}

impl<F> NavControl for CustomNavControl<F>
where
    F: Fn(&NavButtonContext) -> NavButtonView,
{
    fn view(&self, ctx: &NavButtonContext) -> NavButtonView {
        (self.render)(ctx)
    }
}

/// Whether `side` is shown for the given position.
///
/// With wraparound both controls always show; without it the next control
/// hides on the last panel and the previous control hides on the first.
#[must_use]
pub fn button_visible(side: NavSide, active: usize, len: usize, config: &CarouselConfig) -> bool {
    if config.nav_buttons_always_invisible {
        return false;
    }
    if config.cycle_navigation {
        return true;
    }
    match side {
        NavSide::Next => active != len.saturating_sub(1),
        NavSide::Prev => active != 0,
    }
}
