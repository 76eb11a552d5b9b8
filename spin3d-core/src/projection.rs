/// Fixed perspective projection onto the character grid
use crate::geometry::Point3D;
use crate::{HEIGHT, WIDTH};

/// Distance from the camera to the origin along Z
pub const CAMERA_DISTANCE: f32 = 4.0;

/// Project a rotated point to screen space.
///
/// X and Y become fractional column/row coordinates (rows grow downward);
/// Z passes through unchanged. Points at `z == -CAMERA_DISTANCE` divide by zero
/// and produce non-finite coordinates, which the rasterizer discards.
pub fn project(p: Point3D) -> Point3D {
    let depth = p.z + CAMERA_DISTANCE;
    let (width, height) = (WIDTH as f32, HEIGHT as f32);
    Point3D::new(
        p.x / depth * width + (WIDTH / 2) as f32,
        -p.y / depth * height + (HEIGHT / 2) as f32,
        p.z,
    )
}

/// Truncate projected coordinates to a grid cell, if the cell exists
pub fn to_cell(p: Point3D) -> Option<(usize, usize)> {
    if !p.x.is_finite() || !p.y.is_finite() {
        return None;
    }
    // Truncation toward zero; anything in (-1, 0) lands on 0 like an integer cast
    let (x, y) = (p.x as i64, p.y as i64);
    if (0..WIDTH as i64).contains(&x) && (0..HEIGHT as i64).contains(&y) {
        Some((x as usize, y as usize))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_center() {
        let p = project(Point3D::origin());
        assert_eq!(p.x, (WIDTH / 2) as f32);
        assert_eq!(p.y, (HEIGHT / 2) as f32);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_y_is_flipped() {
        let up = project(Point3D::new(0.0, 1.0, 0.0));
        assert!(up.y < (HEIGHT / 2) as f32);
        let right = project(Point3D::new(1.0, 0.0, 0.0));
        assert!(right.x > (WIDTH / 2) as f32);
    }

    #[test]
    fn test_perspective_foreshortening() {
        let near = project(Point3D::new(1.0, 0.0, -1.0));
        let far = project(Point3D::new(1.0, 0.0, 1.0));
        assert!(near.x > far.x);
        assert!((far.x - (1.0 / 5.0 * WIDTH as f32 + (WIDTH / 2) as f32)).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_depth_is_dropped() {
        let p = project(Point3D::new(1.0, 1.0, -CAMERA_DISTANCE));
        assert!(!p.x.is_finite());
        assert_eq!(to_cell(p), None);
    }

    #[test]
    fn test_to_cell_bounds() {
        assert_eq!(to_cell(Point3D::new(0.0, 0.0, 0.0)), Some((0, 0)));
        assert_eq!(to_cell(Point3D::new(39.9, 39.9, 0.0)), Some((39, 39)));
        assert_eq!(to_cell(Point3D::new(-0.5, 3.0, 0.0)), Some((0, 3)));
        assert_eq!(to_cell(Point3D::new(-1.5, 3.0, 0.0)), None);
        assert_eq!(to_cell(Point3D::new(WIDTH as f32, 0.0, 0.0)), None);
        assert_eq!(to_cell(Point3D::new(0.0, f32::NAN, 0.0)), None);
    }
}
