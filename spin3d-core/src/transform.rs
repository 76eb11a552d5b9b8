/// Point transforms and rotation state
use nalgebra::{Rotation3, Vector3};

use crate::geometry::Point3D;

/// Accumulated rotation around the X and Y axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Advance both angles by the same step. Angles grow without wrapping.
    pub fn advance(&mut self, step: f32) {
        self.x += step;
        self.y += step;
    }

    /// Rotate a point around X, then around Y
    pub fn apply(&self, p: Point3D) -> Point3D {
        rotate_y(rotate_x(p, self.x), self.y)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Scale `p` to unit length.
///
/// `p` must not be the origin: a zero vector yields NaN components.
pub fn normalize(p: Point3D) -> Point3D {
    Point3D::from(p.coords / p.coords.norm())
}

/// Right-handed rotation about the X axis
pub fn rotate_x(p: Point3D, angle: f32) -> Point3D {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle) * p
}

/// Right-handed rotation about the Y axis
pub fn rotate_y(p: Point3D, angle: f32) -> Point3D {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle) * p
}

pub fn dot_product(a: Point3D, b: Point3D) -> f32 {
    a.coords.dot(&b.coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn assert_close(a: Point3D, b: Point3D) {
        assert!((a - b).norm() < EPS, "{a} != {b}");
    }

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state, RotationState::default());

        state.advance(0.05);
        state.advance(0.05);
        assert!((state.x - 0.1).abs() < 1e-6);
        assert!((state.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_unit_length() {
        for p in [
            Point3D::new(3.0, 4.0, 0.0),
            Point3D::new(-0.001, 0.002, 0.0005),
            Point3D::new(1.0, 1.0, -1.0),
        ] {
            assert!((normalize(p).coords.norm() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_normalize_origin_is_nan() {
        assert!(normalize(Point3D::origin()).x.is_nan());
    }

    #[test]
    fn test_identity_rotation() {
        let p = Point3D::new(0.3, -1.2, 2.5);
        assert_close(rotate_y(rotate_x(p, 0.0), 0.0), p);
        assert_close(RotationState::zero().apply(p), p);
    }

    #[test]
    fn test_quarter_turns() {
        // X: y goes to z
        assert_close(
            rotate_x(Point3D::new(0.0, 1.0, 0.0), FRAC_PI_2),
            Point3D::new(0.0, 0.0, 1.0),
        );
        // Y: z goes to x
        assert_close(
            rotate_y(Point3D::new(0.0, 0.0, 1.0), FRAC_PI_2),
            Point3D::new(1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_rotation_order_is_x_then_y() {
        let p = Point3D::new(0.0, 1.0, 0.0);
        let state = RotationState::new(FRAC_PI_2, FRAC_PI_2);
        // X sends +Y to +Z, then Y sends +Z to +X
        assert_close(state.apply(p), Point3D::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_dot_product() {
        let a = Point3D::new(1.0, 2.0, 3.0);
        let b = Point3D::new(-2.0, 0.5, 4.0);
        assert!((dot_product(a, b) - 11.0).abs() < EPS);
    }
}
