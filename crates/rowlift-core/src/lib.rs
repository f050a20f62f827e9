//! # Rowlift core primitives
//!
//! Platform-independent pieces shared by the interaction layer:
//!
//! - `geometry` — `Vec2`, `Size`, `Rect`, `Transform`, `EdgeInsets`.
//! - `input` — timestamped `PointerEvent` samples from the platform.
//! - `animation` — `AnimatedValue` tweens driven by an installable `Clock`.
//! - `error` — typed failures for host-side row bookkeeping.
//!
//! ## Animation clock
//!
//! Animations read time through a global `Clock` so the same code runs on
//! native and wasm (`web-time`) and so tests can drive time by hand:
//!
//! ```rust
//! use rowlift_core::*;
//! use std::sync::Arc;
//! use web_time::{Duration, Instant};
//!
//! let clock = Arc::new(ManualClock::new(Instant::now()));
//! set_clock(clock.clone());
//!
//! let mut a = AnimatedValue::new(0.0f32, AnimationSpec::tween(
//!     Duration::from_millis(100), Easing::Linear));
//! a.set_target(10.0);
//! clock.advance(Duration::from_millis(50));
//! assert!(a.update());
//! assert!((*a.get() - 5.0).abs() < 0.01);
//! ```

pub mod animation;
pub mod error;
pub mod geometry;
pub mod input;
pub mod tests;

pub use animation::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
