#![forbid(unsafe_code)]

//! Carousel configuration.
//!
//! [`CarouselConfig`] gathers every knob of the widget. `Default` yields the
//! stock behaviour; builder methods override individual fields. With the
//! `config-files` feature the config can also be loaded from TOML or JSON.
//!
//! # Loading
//!
//! ```toml
//! # carousel.toml
//! index = 2
//! animation = "slide"
//! interval_ms = 6000
//! cycle_navigation = false
//! ```
//!
//! ```rust,ignore
//! let config = CarouselConfig::from_toml_file("carousel.toml")?;
//! ```
//!
//! Loaded configs are validated; a zero interval or duration is rejected
//! here rather than handed to the timer or the renderer.

#[cfg(feature = "config-files")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config-files")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::gesture::GestureConfig;
use crate::nav::NavPolicy;
use crate::transition::AnimationKind;

/// Default accessible label prefix for indicators.
pub const DEFAULT_INDICATOR_LABEL: &str = "carousel indicator";

/// Configuration surface of the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-files", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-files", serde(default))]
pub struct CarouselConfig {
    /// Panel shown on mount.
    pub index: usize,
    /// Clamp requested indices into range.
    pub strict_indexing: bool,

    /// Advance automatically.
    pub auto_play: bool,
    /// Pause autoplay while the pointer is over the widget.
    pub stop_auto_play_on_hover: bool,
    /// Autoplay period in milliseconds.
    pub interval_ms: u64,

    /// Transition style.
    pub animation: AnimationKind,
    /// Transition duration in milliseconds; defaults per animation kind.
    pub duration_ms: Option<u64>,

    /// Navigate on horizontal drags.
    pub swipe: bool,
    /// Minimum pointer travel before a press becomes a drag.
    pub drag_threshold: u32,
    /// Wrap around at either end.
    pub cycle_navigation: bool,
    /// Fire `on_change` for the initial placement.
    pub change_on_first_render: bool,

    /// Keep navigation buttons visible instead of showing them on hover.
    pub nav_buttons_always_visible: bool,
    /// Never show navigation buttons. Takes precedence over `always_visible`.
    pub nav_buttons_always_invisible: bool,
    /// Navigation buttons span the full widget height.
    pub full_height_hover: bool,

    /// Show position indicators.
    pub indicators: bool,
    /// Accessible label prefix for indicators (`"{label} {n}"`).
    pub indicator_label: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            index: 0,
            strict_indexing: true,
            auto_play: true,
            stop_auto_play_on_hover: true,
            interval_ms: 4000,
            animation: AnimationKind::Fade,
            duration_ms: None,
            swipe: true,
            drag_threshold: GestureConfig::default().drag_threshold,
            cycle_navigation: true,
            change_on_first_render: false,
            nav_buttons_always_visible: false,
            nav_buttons_always_invisible: false,
            full_height_hover: true,
            indicators: true,
            indicator_label: DEFAULT_INDICATOR_LABEL.to_owned(),
        }
    }
}

impl CarouselConfig {
    /// Autoplay period.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Transition duration, falling back to the animation kind's default.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration_ms
            .map_or_else(|| self.animation.default_duration(), Duration::from_millis)
    }

    /// Index policy derived from `cycle_navigation` and `strict_indexing`.
    #[must_use]
    pub const fn nav_policy(&self) -> NavPolicy {
        NavPolicy {
            wraparound: self.cycle_navigation,
            strict_bounds: self.strict_indexing,
        }
    }

    /// Drag recognition thresholds.
    #[must_use]
    pub const fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            drag_threshold: self.drag_threshold,
        }
    }

    // --- Builders ---

    /// Set the initial panel.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Set strict indexing.
    #[must_use]
    pub fn with_strict_indexing(mut self, strict: bool) -> Self {
        self.strict_indexing = strict;
        self
    }

    /// Enable or disable autoplay.
    #[must_use]
    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    /// Set hover-pause.
    #[must_use]
    pub fn with_stop_auto_play_on_hover(mut self, stop: bool) -> Self {
        self.stop_auto_play_on_hover = stop;
        self
    }

    /// Set the autoplay period.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the animation kind.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationKind) -> Self {
        self.animation = animation;
        self
    }

    /// Set an explicit transition duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = Some(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Enable or disable swipe navigation.
    #[must_use]
    pub fn with_swipe(mut self, swipe: bool) -> Self {
        self.swipe = swipe;
        self
    }

    /// Set the drag threshold.
    #[must_use]
    pub fn with_drag_threshold(mut self, threshold: u32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Enable or disable wraparound.
    #[must_use]
    pub fn with_cycle_navigation(mut self, cycle: bool) -> Self {
        self.cycle_navigation = cycle;
        self
    }

    /// Fire `on_change` for the initial placement.
    #[must_use]
    pub fn with_change_on_first_render(mut self, change: bool) -> Self {
        self.change_on_first_render = change;
        self
    }

    /// Keep navigation buttons visible.
    #[must_use]
    pub fn with_nav_buttons_always_visible(mut self, visible: bool) -> Self {
        self.nav_buttons_always_visible = visible;
        self
    }

    /// Never show navigation buttons.
    #[must_use]
    pub fn with_nav_buttons_always_invisible(mut self, invisible: bool) -> Self {
        self.nav_buttons_always_invisible = invisible;
        self
    }

    /// Set full-height navigation buttons.
    #[must_use]
    pub fn with_full_height_hover(mut self, full_height: bool) -> Self {
        self.full_height_hover = full_height;
        self
    }

    /// Show or hide indicators.
    #[must_use]
    pub fn with_indicators(mut self, indicators: bool) -> Self {
        self.indicators = indicators;
        self
    }

    /// Set the indicator label prefix.
    #[must_use]
    pub fn with_indicator_label(mut self, label: impl Into<String>) -> Self {
        self.indicator_label = label.into();
        self
    }

    // --- Validation ---

    /// Validate all parameters.
    ///
    /// Returns a list of problems; an empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.interval_ms == 0 {
            errors.push("interval_ms must be > 0".into());
        }
        if self.duration_ms == Some(0) {
            errors.push("duration_ms must be > 0".into());
        }

        errors
    }

    /// Validate, turning problems into [`ConfigError::Validation`].
    pub fn validated(self) -> Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    // --- Loading ---

    /// Load from a TOML string.
    #[cfg(feature = "config-files")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-files")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-files")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-files")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config-files")]
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
