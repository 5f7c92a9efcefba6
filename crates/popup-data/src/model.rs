use serde::{Deserialize, Serialize};

/// Complete static configuration of a timeline: composition settings plus
/// every animated channel, mode switch and audio cue. This is the only input
/// the engine ever reads; per-frame evaluation takes nothing else.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TimelineSpec {
    pub fps: f64,
    pub duration_frames: i64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub channels: Vec<ChannelSpec>,
    #[serde(default)]
    pub switches: Vec<SwitchSpec>,
    #[serde(default)]
    pub cues: Vec<AudioCueSpec>,
}

/// One named animated scalar quantity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChannelSpec {
    pub name: String,
    /// Frame at which this channel's local clock starts. Sources are fed
    /// `frame - trigger`; before that the channel sits at its rest value.
    #[serde(default)]
    pub trigger: i64,
    pub source: SourceSpec,
    /// Affine map applied to the source output (`scale * value + offset`),
    /// so quantities like rotation degrees are expressed in the config.
    #[serde(default)]
    pub map: Option<ValueMap>,
    /// Replacement curve selected inside a fixed global frame window.
    #[serde(default)]
    pub overlay: Option<OverlaySpec>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceSpec {
    /// Closed-form damped harmonic oscillator settling from `from` to `to`.
    Spring {
        from: f64,
        to: f64,
        damping: f64,
        stiffness: f64,
        mass: f64,
    },
    /// Piecewise interpolation through an ordered breakpoint table.
    Curve {
        inputs: Vec<f64>,
        outputs: Vec<f64>,
        #[serde(default)]
        easing: EasingSpec,
        #[serde(default)]
        extrapolate_left: ExtrapolateSpec,
        #[serde(default)]
        extrapolate_right: ExtrapolateSpec,
    },
    /// A repeating multi-key shape stamped at every event frame. Expanded
    /// into a breakpoint table when the timeline is compiled.
    Periodic {
        events: Vec<i64>,
        sub_offsets: Vec<i64>,
        pattern: Vec<f64>,
        #[serde(default)]
        easing: EasingSpec,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum EasingSpec {
    #[default]
    Linear,
    Bezier {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExtrapolateSpec {
    /// Hold the terminal output value outside the table.
    #[default]
    Clamp,
    /// Linearly extend the terminal segment.
    Extend,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ValueMap {
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub offset: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl Default for ValueMap {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
        }
    }
}

impl ValueMap {
    pub fn apply(&self, value: f64) -> f64 {
        self.scale * value + self.offset
    }
}

/// A curve that replaces the channel's steady source inside `[start, end]`
/// (both ends inclusive, global frames). Overlay curves are authored in
/// global frame space; the channel trigger does not shift them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OverlaySpec {
    pub start: i64,
    pub end: i64,
    pub source: SourceSpec,
    #[serde(default)]
    pub map: Option<ValueMap>,
}

/// A boolean that flips from false to true once the frame reaches the
/// threshold. Purely a comparison against the current frame, never a
/// stored state transition.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SwitchSpec {
    pub name: String,
    pub threshold: i64,
}

/// Declarative audio cue: which source plays, over which frame window, and
/// which slice of the source (in source frames) feeds it. Decoding and
/// playback belong to an external collaborator.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AudioCueSpec {
    pub source: String,
    pub start_frame: i64,
    pub duration_frames: i64,
    #[serde(default)]
    pub trim_start: i64,
    #[serde(default)]
    pub trim_end: i64,
}

impl AudioCueSpec {
    pub fn is_active(&self, frame: i64) -> bool {
        frame >= self.start_frame && frame < self.start_frame + self.duration_frames
    }
}
