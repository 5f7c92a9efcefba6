//! Deterministic timeline math for scripted popup animations.
//!
//! Every value the engine produces is a pure function of an integer frame
//! index and static configuration: springs are evaluated in closed form,
//! curves are breakpoint tables sampled with optional cubic-bezier easing,
//! and "bounce"/"pulse" effects are expanded from event frames into ordinary
//! tables. Nothing carries state between frames, so any frame can be
//! requested in any order (or concurrently) with bit-identical results.

pub mod easing;
pub mod effect;
pub mod error;
pub mod interpolate;
pub mod schedule;
pub mod spring;
pub mod timeline;

pub use easing::{CubicBezier, Easing};
pub use effect::expand_periodic;
pub use error::ConfigError;
pub use interpolate::{Extrapolate, Interpolator};
pub use schedule::TriggerSchedule;
pub use spring::{Spring, SpringParams};
pub use timeline::{Snapshot, Timeline};
