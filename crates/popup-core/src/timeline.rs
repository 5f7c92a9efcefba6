use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use popup_data::{AudioCueSpec, ChannelSpec, OverlaySpec, SourceSpec, TimelineSpec, ValueMap};

use crate::easing::Easing;
use crate::effect::expand_periodic;
use crate::error::ConfigError;
use crate::interpolate::Interpolator;
use crate::schedule::TriggerSchedule;
use crate::spring::{Spring, SpringParams};

/// Everything the engine says about one frame: evaluated channel values and
/// mode-switch booleans. Fully determined by the frame and the compiled
/// configuration; two evaluations at the same frame are identical.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub frame: i64,
    pub values: BTreeMap<String, f64>,
    pub switches: BTreeMap<String, bool>,
}

impl Snapshot {
    pub fn value(&self, channel: &str) -> Option<f64> {
        self.values.get(channel).copied()
    }

    pub fn is_on(&self, switch: &str) -> bool {
        self.switches.get(switch).copied().unwrap_or(false)
    }
}

#[derive(Debug)]
enum Source {
    Spring(Spring),
    Curve(Interpolator),
}

#[derive(Debug)]
struct Overlay {
    start: i64,
    end: i64,
    curve: Interpolator,
    map: ValueMap,
}

#[derive(Debug)]
struct Channel {
    name: String,
    source: Source,
    map: ValueMap,
    overlay: Option<Overlay>,
}

/// Compiled, immutable timeline. All configuration errors surface in
/// [`Timeline::compile`]; evaluation is a pure function of the frame and may
/// run from any thread, in any order.
#[derive(Debug)]
pub struct Timeline {
    fps: f64,
    duration_frames: i64,
    schedule: TriggerSchedule,
    channels: Vec<Channel>,
    switches: Vec<(String, i64)>,
    cues: Vec<AudioCueSpec>,
}

impl Timeline {
    pub fn compile(spec: &TimelineSpec) -> Result<Self, ConfigError> {
        if !(spec.fps > 0.0) {
            return Err(ConfigError::InvalidFps(spec.fps));
        }

        let mut schedule = TriggerSchedule::new();
        let mut channels = Vec::with_capacity(spec.channels.len());
        for channel_spec in &spec.channels {
            if channels
                .iter()
                .any(|c: &Channel| c.name == channel_spec.name)
            {
                return Err(ConfigError::DuplicateChannel(channel_spec.name.clone()));
            }
            schedule.set(channel_spec.name.clone(), channel_spec.trigger);
            channels.push(compile_channel(channel_spec)?);
        }

        let mut switches: Vec<(String, i64)> = Vec::with_capacity(spec.switches.len());
        for switch in &spec.switches {
            if switches.iter().any(|(name, _)| *name == switch.name) {
                return Err(ConfigError::DuplicateSwitch(switch.name.clone()));
            }
            switches.push((switch.name.clone(), switch.threshold));
        }

        debug!(
            channels = channels.len(),
            switches = switches.len(),
            cues = spec.cues.len(),
            fps = spec.fps,
            duration = spec.duration_frames,
            "compiled timeline"
        );

        Ok(Self {
            fps: spec.fps,
            duration_frames: spec.duration_frames,
            schedule,
            channels,
            switches,
            cues: spec.cues.clone(),
        })
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn duration_frames(&self) -> i64 {
        self.duration_frames
    }

    pub fn schedule(&self) -> &TriggerSchedule {
        &self.schedule
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|c| c.name.as_str())
    }

    /// Audio cues whose frame window contains `frame`.
    pub fn cues_at(&self, frame: i64) -> impl Iterator<Item = &AudioCueSpec> {
        self.cues.iter().filter(move |cue| cue.is_active(frame))
    }

    /// Evaluates every channel and switch at `frame`. Out-of-range frames are
    /// legal; clamping and the springs' rest values define the result.
    pub fn evaluate(&self, frame: i64) -> Snapshot {
        let mut values = BTreeMap::new();
        for channel in &self.channels {
            values.insert(channel.name.clone(), self.evaluate_channel(channel, frame));
        }

        let mut switches = BTreeMap::new();
        for (name, threshold) in &self.switches {
            switches.insert(name.clone(), frame >= *threshold);
        }

        Snapshot {
            frame,
            values,
            switches,
        }
    }

    fn evaluate_channel(&self, channel: &Channel, frame: i64) -> f64 {
        if let Some(overlay) = &channel.overlay {
            if frame >= overlay.start && frame <= overlay.end {
                return overlay.map.apply(overlay.curve.sample(frame as f64));
            }
        }

        let local_frame = frame - self.schedule.offset_for(&channel.name);
        let raw = match &channel.source {
            Source::Spring(spring) => spring.value_at_frame(local_frame, self.fps),
            Source::Curve(curve) => curve.sample(local_frame as f64),
        };
        channel.map.apply(raw)
    }
}

fn compile_channel(spec: &ChannelSpec) -> Result<Channel, ConfigError> {
    let source = match &spec.source {
        SourceSpec::Spring {
            from,
            to,
            damping,
            stiffness,
            mass,
        } => Source::Spring(Spring::new(
            *from,
            *to,
            SpringParams::new(*damping, *stiffness, *mass)?,
        )),
        other => Source::Curve(compile_curve(other, &spec.name)?),
    };

    let overlay = match &spec.overlay {
        Some(overlay_spec) => Some(compile_overlay(overlay_spec, &spec.name)?),
        None => None,
    };

    Ok(Channel {
        name: spec.name.clone(),
        source,
        map: spec.map.unwrap_or_default(),
        overlay,
    })
}

fn compile_overlay(spec: &OverlaySpec, channel: &str) -> Result<Overlay, ConfigError> {
    if spec.start > spec.end {
        return Err(ConfigError::InvalidWindow {
            start: spec.start,
            end: spec.end,
        });
    }
    if matches!(spec.source, SourceSpec::Spring { .. }) {
        return Err(ConfigError::SpringOverlay(channel.to_string()));
    }

    Ok(Overlay {
        start: spec.start,
        end: spec.end,
        curve: compile_curve(&spec.source, channel)?,
        map: spec.map.unwrap_or_default(),
    })
}

fn compile_curve(source: &SourceSpec, channel: &str) -> Result<Interpolator, ConfigError> {
    match source {
        SourceSpec::Curve {
            inputs,
            outputs,
            easing,
            extrapolate_left,
            extrapolate_right,
        } => Ok(Interpolator::new(inputs.clone(), outputs.clone())?
            .with_easing(Easing::from(*easing))
            .with_extrapolate((*extrapolate_left).into(), (*extrapolate_right).into())),
        SourceSpec::Periodic {
            events,
            sub_offsets,
            pattern,
            easing,
        } => {
            let (inputs, outputs) = expand_periodic(events, sub_offsets, pattern)?;
            Ok(Interpolator::new(inputs, outputs)?.with_easing(Easing::from(*easing)))
        }
        SourceSpec::Spring { .. } => Err(ConfigError::SpringOverlay(channel.to_string())),
    }
}
