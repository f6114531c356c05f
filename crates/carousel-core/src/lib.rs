#![forbid(unsafe_code)]

//! Core: navigation, transition and autoplay state machines for the carousel.
//!
//! # Role in the carousel
//! `carousel-core` holds every piece of carousel logic that decides *which*
//! panel is shown, *which way* the transition runs and *when* it happens. It
//! has no rendering dependency; the `carousel` crate wires these machines into
//! a widget and hands per-panel motion to a renderer.
//!
//! # Primary responsibilities
//! - **Navigator**: active/previous index, direction, wraparound and strict
//!   bounds, user callbacks.
//! - **Transition resolver**: per-panel [`MotionClass`] with wraparound-aware
//!   boundary rules.
//! - **Gestures**: raw pointer drags to `DragEnd`, drag offsets to
//!   advance/retreat.
//! - **Autoplay**: restartable interval gated by enable and hover-pause.
//! - **Config**: defaults, validation and optional file loading.

pub mod autoplay;
pub mod config;
pub mod error;
pub mod event;
pub mod gesture;
pub mod interval;
pub mod nav;
pub mod transition;

pub use autoplay::AutoplayController;
pub use config::CarouselConfig;
pub use error::ConfigError;
pub use event::{EventResult, PointerButton, PointerEvent, PointerEventKind, Position};
pub use gesture::{DragEvent, DragTracker, GestureConfig, SwipeAction, SwipeOutcome, SwipeTranslator};
pub use interval::{Interval, IntervalScheduler};
pub use nav::{Direction, NavCallbacks, NavPolicy, NavState, Navigator, Transition, TransitionCause};
pub use transition::{AnimationKind, MotionClass, MotionTarget, classify, classify_all};
