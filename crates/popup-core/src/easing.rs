use glam::Vec2;
use popup_data::EasingSpec;

/// Easing applied to the normalized position inside a breakpoint segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    Bezier(CubicBezier),
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::Bezier(bezier) => f64::from(bezier.y_at(t as f32)),
        }
    }
}

impl From<EasingSpec> for Easing {
    fn from(spec: EasingSpec) -> Self {
        match spec {
            EasingSpec::Linear => Easing::Linear,
            EasingSpec::Bezier { x1, y1, x2, y2 } => Easing::Bezier(CubicBezier::new(x1, y1, x2, y2)),
        }
    }
}

/// Cubic bezier timing curve anchored at (0,0) and (1,1) with two control
/// points, the CSS `cubic-bezier` family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl CubicBezier {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            p1: Vec2::new(x1, y1),
            p2: Vec2::new(x2, y2),
        }
    }

    /// Inverts the x-polynomial with Newton-Raphson, then evaluates y at the
    /// recovered parameter. Endpoints are exact.
    pub fn y_at(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let p1 = self.p1;
        let p2 = self.p2;

        let mut t = x;
        for _ in 0..8 {
            let one_minus_t = 1.0 - t;
            let x_est = 3.0 * one_minus_t * one_minus_t * t * p1.x
                + 3.0 * one_minus_t * t * t * p2.x
                + t * t * t;

            let err = x_est - x;
            if err.abs() < 1e-4 {
                break;
            }

            let dx_dt = 3.0 * one_minus_t * one_minus_t * p1.x
                + 6.0 * one_minus_t * t * (p2.x - p1.x)
                + 3.0 * t * t * (1.0 - p2.x);

            if dx_dt.abs() < 1e-6 {
                break;
            }
            t -= err / dx_dt;
        }

        let one_minus_t = 1.0 - t;
        3.0 * one_minus_t * one_minus_t * t * p1.y + 3.0 * one_minus_t * t * t * p2.y + t * t * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let bezier = CubicBezier::new(0.37, 0.37, 0.21, 0.97);
        assert_eq!(bezier.y_at(0.0), 0.0);
        assert_eq!(bezier.y_at(1.0), 1.0);
        assert_eq!(bezier.y_at(-0.5), 0.0);
        assert_eq!(bezier.y_at(1.5), 1.0);
    }

    #[test]
    fn identity_control_points_give_identity() {
        // p1 = (1/3, 1/3), p2 = (2/3, 2/3) is the linear curve.
        let bezier = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!((bezier.y_at(x) - x).abs() < 1e-3, "x = {x}");
        }
    }

    #[test]
    fn popup_curve_is_monotonic_in_unit_range() {
        let bezier = CubicBezier::new(0.37, 0.37, 0.21, 0.97);
        let mut prev = 0.0f32;
        for i in 1..=100 {
            let y = bezier.y_at(i as f32 / 100.0);
            assert!(y >= prev - 1e-4, "not monotonic at step {i}");
            assert!((0.0..=1.0 + 1e-4).contains(&y));
            prev = y;
        }
    }

    #[test]
    fn linear_easing_is_identity() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        let eased = Easing::from(EasingSpec::Bezier {
            x1: 0.37,
            y1: 0.37,
            x2: 0.21,
            y2: 0.97,
        });
        // Ease-out-ish curve: ahead of linear in the middle.
        assert!(eased.apply(0.5) > 0.5);
    }
}
