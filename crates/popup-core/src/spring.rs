use crate::error::ConfigError;

/// Physical parameters of a damped harmonic oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl SpringParams {
    pub fn new(damping: f64, stiffness: f64, mass: f64) -> Result<Self, ConfigError> {
        if !(stiffness > 0.0) {
            return Err(ConfigError::InvalidStiffness(stiffness));
        }
        if !(mass > 0.0) {
            return Err(ConfigError::InvalidMass(mass));
        }
        if !(damping >= 0.0) {
            return Err(ConfigError::InvalidDamping(damping));
        }
        Ok(Self {
            damping,
            stiffness,
            mass,
        })
    }

    /// Damping ratio zeta: < 1 underdamped, 1 critically damped, > 1 overdamped.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        // Wobbly default for visibility.
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

/// Closed-form spring settling from `from` toward `to`, zero initial
/// velocity. Evaluated directly at any time, so the whole animation is
/// seekable without replaying prior frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub from: f64,
    pub to: f64,
    pub params: SpringParams,
}

impl Spring {
    pub fn new(from: f64, to: f64, params: SpringParams) -> Self {
        Self { from, to, params }
    }

    /// Position at a local frame. Negative frames mean the spring has not
    /// started yet and sit at `from`.
    pub fn value_at_frame(&self, local_frame: i64, fps: f64) -> f64 {
        if local_frame < 0 {
            return self.from;
        }
        self.oscillate(local_frame as f64 / fps)
    }

    /// Solution of m*x'' + b*x' + k*x = 0 around the target position, split
    /// by damping regime.
    fn oscillate(&self, t: f64) -> f64 {
        let b = self.params.damping;
        let m = self.params.mass;
        let k = self.params.stiffness;

        let beta = b / (2.0 * m);
        let omega0 = (k / m).sqrt();

        let x0 = self.from - self.to;
        let envelope = (-beta * t).exp();

        if (beta - omega0).abs() <= f64::from(f32::EPSILON) {
            // Critically damped: fastest settle with no oscillation.
            self.to + envelope * (x0 + beta * x0 * t)
        } else if beta < omega0 {
            // Underdamped: decaying oscillation, overshoots the target.
            let omega1 = (omega0 * omega0 - beta * beta).sqrt();
            self.to
                + envelope * (x0 * (omega1 * t).cos() + (beta * x0 / omega1) * (omega1 * t).sin())
        } else {
            // Overdamped: slow settle with no oscillation.
            let omega2 = (beta * beta - omega0 * omega0).sqrt();
            self.to
                + envelope * (x0 * (omega2 * t).cosh() + (beta * x0 / omega2) * (omega2 * t).sinh())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popup_spring() -> Spring {
        Spring::new(0.0, 1.0, SpringParams::new(10.5, 160.0, 0.6).unwrap())
    }

    #[test]
    fn rejects_degenerate_params() {
        assert!(SpringParams::new(10.0, 0.0, 1.0).is_err());
        assert!(SpringParams::new(10.0, 100.0, 0.0).is_err());
        assert!(SpringParams::new(-1.0, 100.0, 1.0).is_err());
        assert!(SpringParams::new(10.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn starts_at_from() {
        let spring = popup_spring();
        assert_eq!(spring.value_at_frame(0, 60.0), 0.0);
        assert_eq!(spring.value_at_frame(-1, 60.0), 0.0);
        assert_eq!(spring.value_at_frame(-100, 60.0), 0.0);
    }

    #[test]
    fn underdamped_overshoots_then_settles() {
        let spring = popup_spring();
        assert!(spring.params.damping_ratio() < 1.0);

        // First peak of the popup spring lands near frame 14 at 60 fps.
        let peak = spring.value_at_frame(14, 60.0);
        assert!(peak > 1.05, "expected overshoot, got {peak}");

        // Well past 5 time constants the spring has converged.
        let settled = spring.value_at_frame(600, 60.0);
        assert!((settled - 1.0).abs() < 1e-3, "got {settled}");
    }

    #[test]
    fn critically_damped_never_overshoots() {
        // damping = 2 * sqrt(k * m) exactly.
        let spring = Spring::new(0.0, 1.0, SpringParams::new(20.0, 100.0, 1.0).unwrap());
        let mut prev = 0.0;
        for frame in 0..240 {
            let v = spring.value_at_frame(frame, 60.0);
            assert!(v <= 1.0 + 1e-9, "overshot at frame {frame}: {v}");
            assert!(v >= prev - 1e-9, "not monotonic at frame {frame}");
            prev = v;
        }
    }

    #[test]
    fn overdamped_converges_without_oscillation() {
        let spring = Spring::new(2.0, -3.0, SpringParams::new(60.0, 100.0, 1.0).unwrap());
        assert!(spring.params.damping_ratio() > 1.0);
        let late = spring.value_at_frame(1200, 60.0);
        assert!((late + 3.0).abs() < 1e-3);
        for frame in 0..300 {
            let v = spring.value_at_frame(frame, 60.0);
            assert!(v <= 2.0 + 1e-9 && v >= -3.0 - 1e-9);
        }
    }

    #[test]
    fn seeking_matches_sequential_reads() {
        let spring = popup_spring();
        let direct = spring.value_at_frame(37, 60.0);
        for frame in (0..200).rev() {
            let _ = spring.value_at_frame(frame, 60.0);
        }
        assert_eq!(spring.value_at_frame(37, 60.0), direct);
    }
}
