//! Viewport-driven animation primitives.
//!
//! Nothing in here touches the DOM. The browser adapters live in
//! `crate::hooks` and drive these state machines from `IntersectionObserver`
//! and `requestAnimationFrame` callbacks.

pub mod count_up;
pub mod easing;
pub mod error;
pub mod format;
pub mod viewport;

pub use count_up::{CountUp, CountUpConfig, CountUpState, FrameScheduler};
pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use format::NumberFormat;
pub use viewport::{ObserverConfig, ViewportObserver, VisibilityHost};
