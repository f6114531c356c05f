#![forbid(unsafe_code)]

//! The carousel widget.
//!
//! [`Carousel`] wires the core machines together: a [`Navigator`] for the
//! active index, an [`AutoplayController`] for timed advances, a
//! [`DragTracker`] + [`SwipeTranslator`] for drags, plus the navigation
//! control, indicator glyphs and height probe used when rendering.
//!
//! # Invariants
//!
//! 1. The navigator's length always equals `panels().len()`.
//! 2. All mutation happens through `&mut self` on the host loop; timers only
//!    run when the host calls [`Carousel::poll`] or [`Carousel::on_tick`].
//! 3. Motion classes are recomputed on every [`Carousel::frames`] call.

use std::fmt;
use std::time::Duration;

use carousel_core::error::Result;
use carousel_core::{
    AutoplayController, CarouselConfig, DragTracker, EventResult, NavCallbacks, NavState,
    Navigator, PointerEvent, PointerEventKind, SwipeAction, SwipeTranslator, Transition,
    classify_all,
};
use web_time::Instant;

use crate::controls::{IconNavControl, NavButtonContext, NavButtonView, NavControl, NavSide, button_visible};
use crate::height::HeightProbe;
use crate::indicators::{IndicatorIcons, Indicators};
use crate::render::{CarouselRenderer, PanelFrame};

/// A rotating view over a list of panels.
pub struct Carousel<P> {
    panels: Vec<P>,
    config: CarouselConfig,
    nav: Navigator,
    autoplay: AutoplayController,
    drag: DragTracker,
    swipe: SwipeTranslator,
    nav_control: Box<dyn NavControl>,
    indicator_icons: IndicatorIcons,
    heights: HeightProbe,
}

impl<P> fmt::Debug for Carousel<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("len", &self.panels.len())
            .field("state", &self.nav.state())
            .field("autoplay", &self.autoplay)
            .field("dragging", &self.drag.is_dragging())
            .finish_non_exhaustive()
    }
}

impl<P> Carousel<P> {
    /// Mount a carousel without callbacks.
    pub fn new(panels: Vec<P>, config: CarouselConfig, now: Instant) -> Result<Self> {
        Self::with_callbacks(panels, config, NavCallbacks::new(), now)
    }

    /// Mount a carousel.
    ///
    /// The config is validated first. The initial placement fires
    /// `on_change(index, index)` only when `change_on_first_render` is set.
    /// Autoplay, when enabled, starts its timer at `now`.
    pub fn with_callbacks(
        panels: Vec<P>,
        config: CarouselConfig,
        callbacks: NavCallbacks,
        now: Instant,
    ) -> Result<Self> {
        let config = config.validated()?;
        let mut nav = Navigator::new(panels.len(), config.nav_policy()).with_callbacks(callbacks);
        nav.initialize(config.index, !config.change_on_first_render);

        let autoplay = AutoplayController::new(
            config.auto_play,
            config.stop_auto_play_on_hover,
            config.interval(),
            now,
        );

        tracing::debug!(
            message = "carousel.mount",
            panels = panels.len(),
            active = nav.active(),
            auto_play = config.auto_play,
            animation = ?config.animation
        );

        Ok(Self {
            heights: HeightProbe::new(panels.len()),
            drag: DragTracker::new(config.gesture_config()),
            swipe: SwipeTranslator::new(config.swipe),
            nav_control: Box::new(IconNavControl::default()),
            indicator_icons: IndicatorIcons::default(),
            panels,
            config,
            nav,
            autoplay,
        })
    }

    /// Replace the navigation control renderer.
    #[must_use]
    pub fn with_nav_control(mut self, control: impl NavControl + 'static) -> Self {
        self.nav_control = Box::new(control);
        self
    }

    /// Replace the indicator glyphs.
    #[must_use]
    pub fn with_indicator_icons(mut self, icons: IndicatorIcons) -> Self {
        self.indicator_icons = icons;
        self
    }

    // --- Navigation ---

    /// Show the next panel (next button).
    pub fn next(&mut self) -> Transition {
        self.nav.advance()
    }

    /// Show the previous panel (prev button).
    pub fn prev(&mut self) -> Transition {
        self.nav.retreat()
    }

    /// Jump to panel `index` (indicator press).
    pub fn press(&mut self, index: usize) -> Transition {
        self.nav.jump_to(index)
    }

    /// Route a pointer event.
    ///
    /// Enter/leave drive hover-pause and always propagate. A finished drag
    /// navigates and is consumed when swiping is enabled; with swiping
    /// disabled every drag propagates untouched.
    pub fn handle_event(&mut self, event: &PointerEvent) -> EventResult {
        match event.kind {
            PointerEventKind::Enter => {
                self.autoplay.pointer_enter();
                return EventResult::Ignored;
            }
            PointerEventKind::Leave => {
                self.autoplay.pointer_leave();
                return EventResult::Ignored;
            }
            _ => {}
        }

        if !self.swipe.is_enabled() {
            return EventResult::Ignored;
        }
        let Some(drag) = self.drag.process(event) else {
            return EventResult::Ignored;
        };
        let outcome = self.swipe.translate_drag(&drag);
        match outcome.action {
            Some(SwipeAction::Advance) => {
                self.nav.advance();
            }
            Some(SwipeAction::Retreat) => {
                self.nav.retreat();
            }
            None => {}
        }
        outcome.result
    }

    // --- Timer ---

    /// Drive autoplay from the host loop. Returns `true` if a tick advanced.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.autoplay.poll(now, &mut self.nav)
    }

    /// Apply one tick from a [`TickSource`](crate::subscription::TickSource).
    pub fn on_tick(&mut self) -> bool {
        self.autoplay.tick(&mut self.nav)
    }

    /// When the next autoplay tick is due, if the timer is armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.autoplay.next_deadline()
    }

    /// Stop the autoplay timer (widget teardown).
    pub fn shutdown(&mut self) {
        self.autoplay.shutdown();
        self.drag.reset();
        tracing::debug!(message = "carousel.unmount", active = self.nav.active());
    }

    // --- Reconfiguration ---

    /// Replace the panels. The active index is clamped by the next
    /// navigation, not here.
    pub fn set_panels(&mut self, panels: Vec<P>) {
        self.nav.set_len(panels.len());
        self.heights.resize(panels.len());
        self.panels = panels;
    }

    /// Change the autoplay period, restarting the timer from `now`.
    ///
    /// A zero period is rejected and leaves the carousel unchanged.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) -> Result<()> {
        let config = self.config.clone().with_interval(interval).validated()?;
        self.autoplay.set_period(config.interval(), now);
        self.config = config;
        Ok(())
    }

    /// Turn autoplay on or off.
    pub fn set_autoplay(&mut self, enabled: bool, now: Instant) {
        self.config.auto_play = enabled;
        self.autoplay.set_enabled(enabled, now);
    }

    /// Change whether hovering pauses autoplay.
    pub fn set_stop_on_hover(&mut self, stop: bool) {
        self.config.stop_auto_play_on_hover = stop;
        self.autoplay.set_stop_on_hover(stop);
    }

    /// Turn swipe navigation on or off. A drag in progress is dropped.
    pub fn set_swipe(&mut self, enabled: bool) {
        self.config.swipe = enabled;
        self.swipe.set_enabled(enabled);
        self.drag.reset();
    }

    /// Turn wraparound on or off.
    pub fn set_cycle_navigation(&mut self, cycle: bool) {
        self.config.cycle_navigation = cycle;
        self.nav.set_policy(self.config.nav_policy());
    }

    /// Replace the navigation callbacks.
    pub fn set_callbacks(&mut self, callbacks: NavCallbacks) {
        self.nav.set_callbacks(callbacks);
    }

    // --- Accessors ---

    #[must_use]
    pub fn state(&self) -> NavState {
        self.nav.state()
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.nav.active()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[must_use]
    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Whether hover has paused autoplay.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.autoplay.is_paused()
    }

    // --- View ---

    /// One frame per panel for the current state.
    #[must_use]
    pub fn frames(&self) -> Vec<PanelFrame<'_, P>> {
        let state = self.nav.state();
        let kind = self.config.animation;
        let duration = self.config.duration();
        classify_all(&state, self.panels.len())
            .into_iter()
            .zip(&self.panels)
            .enumerate()
            .map(|(index, (motion, panel))| PanelFrame {
                index,
                panel,
                motion,
                target: motion.target(kind),
                direction: state.direction,
                duration,
            })
            .collect()
    }

    /// Visible navigation buttons, prev first.
    #[must_use]
    pub fn nav_buttons(&self) -> Vec<NavButtonView> {
        let active = self.nav.active();
        let len = self.panels.len();
        [NavSide::Prev, NavSide::Next]
            .into_iter()
            .filter(|&side| button_visible(side, active, len, &self.config))
            .map(|side| {
                self.nav_control.view(&NavButtonContext {
                    side,
                    always_visible: self.config.nav_buttons_always_visible,
                    full_height: self.config.full_height_hover,
                })
            })
            .collect()
    }

    /// The indicator row, unless indicators are turned off.
    #[must_use]
    pub fn indicators(&self) -> Option<Indicators> {
        self.config.indicators.then(|| {
            Indicators::build(
                self.panels.len(),
                self.nav.active(),
                &self.config.indicator_label,
                &self.indicator_icons,
            )
        })
    }

    /// Record the measured height of panel `index`.
    pub fn report_height(&mut self, index: usize, height: u32) {
        self.heights.report(index, height);
    }

    /// Container height: the tallest measured panel.
    #[must_use]
    pub fn container_height(&self) -> Option<u32> {
        self.heights.container_height()
    }

    /// Draw the carousel: panels, then buttons, then indicators.
    pub fn render(&self, renderer: &mut impl CarouselRenderer<P>) {
        for frame in self.frames() {
            renderer.panel(frame);
        }
        for button in self.nav_buttons() {
            renderer.nav_button(&button);
        }
        if let Some(indicators) = self.indicators() {
            renderer.indicators(&indicators);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::{Direction, MotionClass, PointerButton};

    fn mount(len: usize, config: CarouselConfig) -> Carousel<&'static str> {
        const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];
        Carousel::new(NAMES[..len].to_vec(), config, Instant::now()).expect("valid config")
    }

    fn ev(kind: PointerEventKind, x: i32) -> PointerEvent {
        PointerEvent::new(kind, x, 0)
    }

    #[test]
    fn mount_clamps_initial_index() {
        let c = mount(3, CarouselConfig::default().with_index(9));
        assert_eq!(c.active(), 2);
        assert_eq!(c.state().previous_active, 2);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Carousel::new(
            vec![1, 2],
            CarouselConfig::default().with_interval(Duration::ZERO),
            Instant::now(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("interval_ms"));
    }

    #[test]
    fn frames_mark_exactly_one_center() {
        let mut c = mount(4, CarouselConfig::default());
        c.next();
        let frames = c.frames();
        assert_eq!(frames.len(), 4);
        let centers: Vec<_> = frames.iter().filter(|f| f.is_active()).map(|f| f.index).collect();
        assert_eq!(centers, vec![1]);
        assert_eq!(frames[0].motion, MotionClass::ExitLeft);
        assert!(frames.iter().all(|f| f.direction == Direction::Forward));
    }

    #[test]
    fn drag_left_advances_and_is_consumed() {
        let mut c = mount(3, CarouselConfig::default().with_auto_play(false));
        let down = PointerEventKind::Down(PointerButton::Primary);
        let drag = PointerEventKind::Drag(PointerButton::Primary);
        let up = PointerEventKind::Up(PointerButton::Primary);
        assert_eq!(c.handle_event(&ev(down, 50)), EventResult::Ignored);
        assert_eq!(c.handle_event(&ev(drag, 30)), EventResult::Ignored);
        assert_eq!(c.handle_event(&ev(up, 0)), EventResult::Consumed);
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn disabled_swipe_propagates_drags() {
        let mut c = mount(3, CarouselConfig::default().with_swipe(false));
        let down = PointerEventKind::Down(PointerButton::Primary);
        let drag = PointerEventKind::Drag(PointerButton::Primary);
        let up = PointerEventKind::Up(PointerButton::Primary);
        for e in [ev(down, 50), ev(drag, 20), ev(up, 0)] {
            assert_eq!(c.handle_event(&e), EventResult::Ignored);
        }
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn zero_interval_update_leaves_config_unchanged() {
        let mut c = mount(3, CarouselConfig::default());
        assert!(c.set_interval(Duration::ZERO, Instant::now()).is_err());
        assert_eq!(c.config().interval(), Duration::from_millis(4000));
        c.set_interval(Duration::from_millis(250), Instant::now())
            .expect("valid interval");
        assert_eq!(c.config().interval_ms, 250);
    }

    #[test]
    fn set_panels_resizes_heights() {
        let mut c = mount(3, CarouselConfig::default());
        c.report_height(2, 400);
        c.report_height(0, 100);
        c.set_panels(vec!["x", "y"]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.container_height(), Some(100));
    }

    #[test]
    fn disabled_indicators_render_nothing() {
        let c = mount(3, CarouselConfig::default().with_indicators(false));
        assert!(c.indicators().is_none());
    }
}
