use crate::easing::Easing;
use crate::error::ConfigError;
use popup_data::ExtrapolateSpec;

/// Out-of-range policy for one side of a breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Hold the terminal output value.
    #[default]
    Clamp,
    /// Continue the terminal segment's slope.
    Extend,
}

impl From<ExtrapolateSpec> for Extrapolate {
    fn from(spec: ExtrapolateSpec) -> Self {
        match spec {
            ExtrapolateSpec::Clamp => Extrapolate::Clamp,
            ExtrapolateSpec::Extend => Extrapolate::Extend,
        }
    }
}

/// Piecewise mapping from an input scalar through an ordered breakpoint table
/// to an output scalar. Validated once at construction; sampling never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
    easing: Easing,
    left: Extrapolate,
    right: Extrapolate,
}

impl Interpolator {
    /// Builds a linear, clamped interpolator. Inputs must be non-decreasing
    /// and paired one-to-one with outputs.
    pub fn new(inputs: Vec<f64>, outputs: Vec<f64>) -> Result<Self, ConfigError> {
        if inputs.len() != outputs.len() {
            return Err(ConfigError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(ConfigError::TooFewBreakpoints(inputs.len()));
        }
        for (index, pair) in inputs.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(ConfigError::DecreasingInputs {
                    index: index + 1,
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }

        Ok(Self {
            inputs,
            outputs,
            easing: Easing::Linear,
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        })
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_extrapolate(mut self, left: Extrapolate, right: Extrapolate) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    pub fn first_input(&self) -> f64 {
        self.inputs[0]
    }

    pub fn last_input(&self) -> f64 {
        self.inputs[self.inputs.len() - 1]
    }

    /// Evaluates the table at `input`. Interior lookups locate the bracketing
    /// segment by binary search, ease the normalized position and blend the
    /// segment's outputs.
    pub fn sample(&self, input: f64) -> f64 {
        let n = self.inputs.len();

        if input <= self.inputs[0] {
            return match self.left {
                Extrapolate::Clamp => self.outputs[0],
                Extrapolate::Extend => self.extend_from(0, input),
            };
        }
        if input >= self.inputs[n - 1] {
            return match self.right {
                Extrapolate::Clamp => self.outputs[n - 1],
                Extrapolate::Extend => self.extend_from(n - 2, input),
            };
        }

        // First breakpoint strictly above `input`; the bracketing segment is
        // [idx - 1, idx]. The guards above keep idx in 1..n.
        let idx = self.inputs.partition_point(|x| *x <= input);
        let i = idx - 1;

        let x0 = self.inputs[i];
        let x1 = self.inputs[i + 1];
        let y0 = self.outputs[i];
        let y1 = self.outputs[i + 1];

        let t = if x1 > x0 { (input - x0) / (x1 - x0) } else { 0.0 };
        y0 + (y1 - y0) * self.easing.apply(t)
    }

    fn extend_from(&self, segment: usize, input: f64) -> f64 {
        let x0 = self.inputs[segment];
        let x1 = self.inputs[segment + 1];
        let y0 = self.outputs[segment];
        let y1 = self.outputs[segment + 1];
        if x1 <= x0 {
            // Zero-width terminal segment has no slope to continue.
            return if input <= x0 { y0 } else { y1 };
        }
        y0 + (y1 - y0) * ((input - x0) / (x1 - x0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::CubicBezier;

    #[test]
    fn rejects_length_mismatch() {
        let err = Interpolator::new(vec![0.0, 1.0], vec![0.0]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LengthMismatch {
                inputs: 2,
                outputs: 1
            }
        );
    }

    #[test]
    fn rejects_decreasing_inputs() {
        let err = Interpolator::new(vec![0.0, 10.0, 5.0], vec![0.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ConfigError::DecreasingInputs { index: 2, .. }));
    }

    #[test]
    fn rejects_single_breakpoint() {
        let err = Interpolator::new(vec![0.0], vec![0.0]).unwrap_err();
        assert_eq!(err, ConfigError::TooFewBreakpoints(1));
    }

    #[test]
    fn clamps_both_sides() {
        let interp = Interpolator::new(vec![60.0, 120.0], vec![0.0, 1.0]).unwrap();
        assert_eq!(interp.sample(60.0), 0.0);
        assert_eq!(interp.sample(120.0), 1.0);
        assert_eq!(interp.sample(30.0), 0.0);
        assert_eq!(interp.sample(500.0), 1.0);
        assert!((interp.sample(90.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn extends_terminal_segments() {
        let interp = Interpolator::new(vec![0.0, 10.0], vec![0.0, 100.0])
            .unwrap()
            .with_extrapolate(Extrapolate::Extend, Extrapolate::Extend);
        assert!((interp.sample(-5.0) + 50.0).abs() < 1e-12);
        assert!((interp.sample(15.0) - 150.0).abs() < 1e-12);
    }

    #[test]
    fn zero_width_segment_steps_to_later_value() {
        let interp = Interpolator::new(vec![0.0, 5.0, 5.0, 10.0], vec![0.0, 1.0, 3.0, 4.0]).unwrap();
        // Stepping over the discontinuity picks the segment that starts at 5.
        assert!((interp.sample(5.0) - 3.0).abs() < 1e-12);
        assert!((interp.sample(7.5) - 3.5).abs() < 1e-12);
        assert!((interp.sample(2.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn eased_sample_stays_inside_segment() {
        let interp = Interpolator::new(vec![100.0, 130.0], vec![-15.0, 35.0])
            .unwrap()
            .with_easing(Easing::Bezier(CubicBezier::new(0.37, 0.37, 0.21, 0.97)));
        let mid = interp.sample(115.0);
        assert!(mid > -15.0 && mid < 35.0);
        assert_eq!(interp.sample(100.0), -15.0);
        assert_eq!(interp.sample(130.0), 35.0);
    }
}
