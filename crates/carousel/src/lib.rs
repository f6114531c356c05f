#![forbid(unsafe_code)]

//! Carousel widget.
//!
//! A [`Carousel`] shows one panel of a list at a time and moves between them
//! through prev/next buttons, indicator presses, horizontal drags and an
//! autoplay timer. Decisions live in `carousel-core`; this crate owns the
//! panels, builds view models and hands them to a [`CarouselRenderer`].
//!
//! ```
//! use carousel::{Carousel, CarouselConfig};
//! use web_time::Instant;
//!
//! let mut c = Carousel::new(vec!["one", "two", "three"], CarouselConfig::default(), Instant::now())
//!     .expect("default config is valid");
//! c.next();
//! assert_eq!(c.active(), 1);
//! ```

pub mod carousel;
pub mod controls;
pub mod height;
pub mod indicators;
pub mod render;
pub mod subscription;

pub use carousel::Carousel;
pub use carousel_core::{
    AnimationKind, CarouselConfig, ConfigError, Direction, EventResult, MotionClass, MotionTarget,
    NavCallbacks, NavState, PointerButton, PointerEvent, PointerEventKind, Transition,
    TransitionCause,
};
pub use controls::{CustomNavControl, IconNavControl, NavButtonContext, NavButtonView, NavControl, NavSide};
pub use height::HeightProbe;
pub use indicators::{IndicatorIcons, IndicatorView, Indicators};
pub use render::{CarouselRenderer, PanelFrame};
pub use subscription::TickSource;
