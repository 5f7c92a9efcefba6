//! Scripted "subscribe popup" animation driven by a deterministic timeline
//! engine. The engine lives in `popup-core`; this crate assembles the
//! concrete composition (channel set, mode switches and audio cue schedule)
//! and exposes it to rendering collaborators.

pub mod popup;

pub use popup::subscribe_popup_spec;
pub use popup_core::{ConfigError, Snapshot, Timeline};
pub use popup_data::{AudioCueSpec, TimelineSpec};

/// Compiles the subscribe-popup composition into an evaluatable timeline.
pub fn subscribe_popup() -> Result<Timeline, ConfigError> {
    Timeline::compile(&subscribe_popup_spec())
}
