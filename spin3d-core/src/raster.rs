/// Character-grid rasterizer: shaded point clouds and Bresenham wireframes
use std::fmt;

use tracing::trace;

use crate::geometry::{Edge, Point3D, PointCloud};
use crate::projection::{project, to_cell};
use crate::transform::{dot_product, normalize, RotationState};
use crate::{HEIGHT, WIDTH};

pub const BLANK: char = ' ';
pub const LIT: char = '#';
pub const UNLIT: char = '.';

/// One frame of terminal cells, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    cells: Vec<char>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            cells: vec![BLANK; WIDTH * HEIGHT],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x < WIDTH && y < HEIGHT {
            Some(self.cells[y * WIDTH + x])
        } else {
            None
        }
    }

    /// Write a cell. Out-of-range coordinates are ignored and return `false`.
    pub fn set(&mut self, x: usize, y: usize, c: char) -> bool {
        if x < WIDTH && y < HEIGHT {
            self.cells[y * WIDTH + x] = c;
            true
        } else {
            false
        }
    }

    /// Number of cells holding `c`
    pub fn count(&self, c: char) -> usize {
        self.cells.iter().filter(|&&cell| cell == c).count()
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(WIDTH).map(|row| row.iter().collect())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// What gets drawn for a shape: a static wireframe or a shaded point cloud
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    Wireframe(&'static [Edge; 12]),
    Cloud(PointCloud),
}

impl Model {
    /// Rasterize the model into a fresh frame at the given rotation
    pub fn render(&self, rotation: &RotationState) -> Frame {
        let mut frame = Frame::new();
        match self {
            Model::Wireframe(edges) => draw_edges(&mut frame, edges.iter(), rotation),
            Model::Cloud(points) => draw_points(&mut frame, points, rotation),
        }
        trace!(
            lit = frame.count(LIT),
            unlit = frame.count(UNLIT),
            "rasterized frame"
        );
        frame
    }
}

/// Light direction before normalization
const LIGHT: [f32; 3] = [1.0, 1.0, -1.0];

pub fn light_direction() -> Point3D {
    normalize(Point3D::new(LIGHT[0], LIGHT[1], LIGHT[2]))
}

/// Lit/unlit test for a point using its direction from the origin as the normal.
///
/// The origin itself has no normal and counts as unlit.
pub fn is_lit(p: Point3D, light: Point3D) -> bool {
    if p.coords.norm_squared() == 0.0 {
        return false;
    }
    dot_product(normalize(p), light) > 0.0
}

/// Point mode: shade, rotate and project every point.
///
/// No depth test: later points overwrite earlier ones on the same cell.
pub fn draw_points(frame: &mut Frame, points: &[Point3D], rotation: &RotationState) {
    let light = light_direction();
    for &p in points {
        let symbol = if is_lit(p, light) { LIT } else { UNLIT };
        if let Some((x, y)) = to_cell(project(rotation.apply(p))) {
            frame.set(x, y, symbol);
        }
    }
}

/// Line mode: rotate and project both endpoints of each edge, then draw the segment
pub fn draw_edges<'a, I>(frame: &mut Frame, edges: I, rotation: &RotationState)
where
    I: IntoIterator<Item = &'a Edge>,
{
    for edge in edges {
        let start = project(rotation.apply(edge.start));
        let end = project(rotation.apply(edge.end));
        if !(start.x.is_finite() && start.y.is_finite() && end.x.is_finite() && end.y.is_finite())
        {
            continue;
        }
        draw_line(
            frame,
            (start.x as i64, start.y as i64),
            (end.x as i64, end.y as i64),
        );
    }
}

/// Integer Bresenham line between two cells, inclusive of both ends.
///
/// Visited cells outside the grid are skipped.
pub fn draw_line(frame: &mut Frame, from: (i64, i64), to: (i64, i64)) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        if x0 >= 0 && y0 >= 0 {
            frame.set(x0 as usize, y0 as usize, LIT);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{cube_edges, sphere};

    #[test]
    fn test_new_frame_is_blank() {
        let frame = Frame::new();
        assert_eq!(frame.count(BLANK), WIDTH * HEIGHT);
        assert_eq!(frame.rows().count(), HEIGHT);
        assert!(frame.rows().all(|row| row.chars().count() == WIDTH));
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut frame = Frame::new();
        assert!(!frame.set(WIDTH, 0, LIT));
        assert!(!frame.set(0, HEIGHT, LIT));
        assert_eq!(frame, Frame::new());
        assert!(frame.set(3, 5, LIT));
        assert_eq!(frame.get(3, 5), Some(LIT));
        assert_eq!(frame.get(WIDTH, 5), None);
    }

    #[test]
    fn test_display_layout() {
        let mut frame = Frame::new();
        frame.set(0, 0, LIT);
        frame.set(WIDTH - 1, HEIGHT - 1, UNLIT);
        let text = frame.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), HEIGHT);
        assert!(text.ends_with(".\n"));
        assert!(lines[0].starts_with('#'));
        assert_eq!(text.len(), (WIDTH + 1) * HEIGHT);
    }

    #[test]
    fn test_line_single_cell() {
        let mut frame = Frame::new();
        draw_line(&mut frame, (7, 9), (7, 9));
        assert_eq!(frame.count(LIT), 1);
        assert_eq!(frame.get(7, 9), Some(LIT));
    }

    #[test]
    fn test_line_endpoints_and_length() {
        let mut frame = Frame::new();
        draw_line(&mut frame, (2, 3), (12, 8));
        assert_eq!(frame.get(2, 3), Some(LIT));
        assert_eq!(frame.get(12, 8), Some(LIT));
        // One cell per step along the major axis
        assert_eq!(frame.count(LIT), 11);
    }

    #[test]
    fn test_line_is_clipped() {
        let mut frame = Frame::new();
        draw_line(&mut frame, (-10, 5), (10, 5));
        assert_eq!(frame.count(LIT), 11);
        assert_eq!(frame.get(0, 5), Some(LIT));
    }

    #[test]
    fn test_is_lit() {
        let light = light_direction();
        assert!(is_lit(Point3D::new(1.0, 1.0, -1.0), light));
        assert!(!is_lit(Point3D::new(-1.0, -1.0, 1.0), light));
        assert!(!is_lit(Point3D::origin(), light));
        assert!((light.coords.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_wireframe_cube_uses_lines_only() {
        let frame = Model::Wireframe(cube_edges()).render(&RotationState::zero());
        assert!(frame.count(LIT) > 0);
        assert_eq!(frame.count(UNLIT), 0);
    }

    #[test]
    fn test_sphere_has_both_faces() {
        let frame = Model::Cloud(sphere(1.0, 20)).render(&RotationState::zero());
        assert!(frame.count(LIT) > 0);
        assert!(frame.count(UNLIT) > 0);
    }

    #[test]
    fn test_later_points_overwrite() {
        // Both land on the center cell with opposite shading; the last one wins
        let lit = Point3D::new(0.001, 0.0, 0.0);
        let unlit = Point3D::new(0.0001, -0.0001, 0.0);
        let rotation = RotationState::zero();

        let mut frame = Frame::new();
        draw_points(&mut frame, &[lit, unlit], &rotation);
        assert_eq!(frame.get(WIDTH / 2, HEIGHT / 2), Some(UNLIT));

        let mut frame = Frame::new();
        draw_points(&mut frame, &[unlit, lit], &rotation);
        assert_eq!(frame.get(WIDTH / 2, HEIGHT / 2), Some(LIT));
        assert_eq!(frame.count(BLANK), WIDTH * HEIGHT - 1);
    }
}
