use thiserror::Error;

/// Malformed static configuration. Every variant is raised while a timeline
/// is being compiled; per-frame evaluation never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("breakpoint table needs at least 2 entries, got {0}")]
    TooFewBreakpoints(usize),

    #[error("breakpoint table has {inputs} inputs but {outputs} outputs")]
    LengthMismatch { inputs: usize, outputs: usize },

    #[error("breakpoint inputs decrease at index {index} ({prev} > {next})")]
    DecreasingInputs { index: usize, prev: f64, next: f64 },

    #[error("spring stiffness must be positive, got {0}")]
    InvalidStiffness(f64),

    #[error("spring mass must be positive, got {0}")]
    InvalidMass(f64),

    #[error("spring damping must be non-negative, got {0}")]
    InvalidDamping(f64),

    #[error("pattern has {pattern} values but there are {offsets} sub-offsets")]
    PatternLengthMismatch { pattern: usize, offsets: usize },

    #[error("sub-offsets must be strictly increasing (violated at index {0})")]
    UnorderedSubOffsets(usize),

    #[error("event frames decrease at index {0}")]
    DecreasingEvents(usize),

    #[error("event at frame {next} starts inside the span of the event at frame {prev}")]
    OverlappingSpans { prev: i64, next: i64 },

    #[error("duplicate channel name: {0}")]
    DuplicateChannel(String),

    #[error("duplicate switch name: {0}")]
    DuplicateSwitch(String),

    #[error("fps must be positive, got {0}")]
    InvalidFps(f64),

    #[error("overlay window start {start} is after end {end}")]
    InvalidWindow { start: i64, end: i64 },

    #[error("channel {0}: a spring cannot be used as an overlay source")]
    SpringOverlay(String),
}
