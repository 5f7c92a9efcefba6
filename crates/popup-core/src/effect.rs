use crate::error::ConfigError;

/// Expands a set of event frames into one breakpoint table by stamping the
/// same sub-offset/pattern shape at every event. The raw sequences feed the
/// interpolator directly; this function never interpolates.
///
/// With events `[140, 210]`, sub-offsets `[0, 10, 20, 30]` and pattern
/// `[1.0, 0.8, 1.0, 1.0]` the result is the inputs
/// `[140, 150, 160, 170, 210, 220, 230, 240]` paired with the pattern
/// repeated once per event.
pub fn expand_periodic(
    events: &[i64],
    sub_offsets: &[i64],
    pattern: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), ConfigError> {
    if pattern.len() != sub_offsets.len() {
        return Err(ConfigError::PatternLengthMismatch {
            pattern: pattern.len(),
            offsets: sub_offsets.len(),
        });
    }
    for (index, pair) in sub_offsets.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(ConfigError::UnorderedSubOffsets(index + 1));
        }
    }
    for (index, pair) in events.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(ConfigError::DecreasingEvents(index + 1));
        }
    }

    // Each event's span must end before the next one begins, otherwise the
    // merged table would not be ordered.
    if let (Some(first), Some(last)) = (sub_offsets.first(), sub_offsets.last()) {
        for pair in events.windows(2) {
            if pair[1] + first <= pair[0] + last {
                return Err(ConfigError::OverlappingSpans {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
    }

    let mut inputs = Vec::with_capacity(events.len() * sub_offsets.len());
    let mut outputs = Vec::with_capacity(events.len() * pattern.len());
    for &event in events {
        for (&offset, &value) in sub_offsets.iter().zip(pattern) {
            inputs.push((event + offset) as f64);
            outputs.push(value);
        }
    }

    Ok((inputs, outputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate::Interpolator;

    #[test]
    fn expands_bounce_events() {
        let (inputs, outputs) =
            expand_periodic(&[140, 210], &[0, 10, 20, 30], &[1.0, 0.8, 1.0, 1.0]).unwrap();
        assert_eq!(
            inputs,
            vec![140.0, 150.0, 160.0, 170.0, 210.0, 220.0, 230.0, 240.0]
        );
        assert_eq!(outputs, vec![1.0, 0.8, 1.0, 1.0, 1.0, 0.8, 1.0, 1.0]);

        let interp = Interpolator::new(inputs, outputs).unwrap();
        let dip = interp.sample(145.0);
        assert!(dip < 1.0 && dip > 0.8, "got {dip}");
    }

    #[test]
    fn rejects_pattern_length_mismatch() {
        let err = expand_periodic(&[0], &[0, 10], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::PatternLengthMismatch {
                pattern: 1,
                offsets: 2
            }
        );
    }

    #[test]
    fn rejects_overlapping_spans() {
        // Second event starts while the first event's span is still running.
        let err = expand_periodic(&[0, 25], &[0, 10, 20, 30], &[1.0, 0.8, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, ConfigError::OverlappingSpans { prev: 0, next: 25 });
    }

    #[test]
    fn rejects_decreasing_events() {
        let err = expand_periodic(&[200, 100], &[0, 10], &[1.0, 0.5]).unwrap_err();
        assert_eq!(err, ConfigError::DecreasingEvents(1));
    }

    #[test]
    fn rejects_unordered_sub_offsets() {
        let err = expand_periodic(&[0], &[0, 10, 10], &[1.0, 0.5, 1.0]).unwrap_err();
        assert_eq!(err, ConfigError::UnorderedSubOffsets(2));
    }

    #[test]
    fn single_event_shake_table() {
        let (inputs, outputs) = expand_periodic(
            &[280],
            &[0, 5, 10, 15, 20, 25, 30],
            &[1.0, 0.0, 2.0, 1.0, 0.0, 2.0, 1.0],
        )
        .unwrap();
        assert_eq!(inputs.len(), 7);
        assert_eq!(inputs[0], 280.0);
        assert_eq!(inputs[6], 310.0);
        assert_eq!(outputs[2], 2.0);
    }
}
