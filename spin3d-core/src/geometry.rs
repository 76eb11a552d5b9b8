/// Geometry generators for the supported shapes
use nalgebra::Point3;
use std::f32::consts::PI;
use std::sync::OnceLock;

/// A point in shape-local space, later reused for rotated and projected coordinates
pub type Point3D = Point3<f32>;

/// Unordered surface samples rendered without connectivity
pub type PointCloud = Vec<Point3D>;

/// A wireframe line segment between two vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point3D,
    pub end: Point3D,
}

impl Edge {
    pub fn new(start: Point3D, end: Point3D) -> Self {
        Self { start, end }
    }
}

const CUBE_VERTICES: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

// Back face, front face, then the four connecting edges
const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// The 12 edges of the wireframe cube centered at the origin.
///
/// Built on first use and shared for the lifetime of the process.
pub fn cube_edges() -> &'static [Edge; 12] {
    static EDGES: OnceLock<[Edge; 12]> = OnceLock::new();
    EDGES.get_or_init(|| {
        let vertex = |i: usize| {
            let [x, y, z] = CUBE_VERTICES[i];
            Point3D::new(x, y, z)
        };
        CUBE_EDGES.map(|(a, b)| Edge::new(vertex(a), vertex(b)))
    })
}

/// Visit every `(i, j)` cell of a `(divisions + 1)²` grid, both endpoints included
fn grid<F>(divisions: u32, mut sample: F) -> PointCloud
where
    F: FnMut(u32, u32) -> Point3D,
{
    let n = divisions as usize + 1;
    let mut points = Vec::with_capacity(n * n);
    for i in 0..=divisions {
        for j in 0..=divisions {
            points.push(sample(i, j));
        }
    }
    points
}

/// Sample a sphere by polar angle θ ∈ [0, π] and azimuth φ ∈ [0, 2π].
///
/// Poles are sampled repeatedly, so the result always holds `(divisions + 1)²` points.
pub fn sphere(radius: f32, divisions: u32) -> PointCloud {
    ellipsoid(radius, radius, radius, divisions)
}

/// Sample the side of a Y-aligned cylinder spanning `[-height/2, height/2]`
pub fn cylinder(radius: f32, height: f32, divisions: u32) -> PointCloud {
    let d = divisions as f32;
    grid(divisions, |i, j| {
        let theta = j as f32 * (2.0 * PI / d);
        let y = i as f32 * (height / d) - height / 2.0;
        Point3D::new(radius * theta.cos(), y, radius * theta.sin())
    })
}

/// Sample a cone whose radius tapers from the base ring (i = 0) to the apex
pub fn cone(radius: f32, height: f32, divisions: u32) -> PointCloud {
    let d = divisions as f32;
    grid(divisions, |i, j| {
        let theta = j as f32 * (2.0 * PI / d);
        let y = i as f32 * (height / d) - height / 2.0;
        let r = radius * (1.0 - i as f32 / d);
        Point3D::new(r * theta.cos(), y, r * theta.sin())
    })
}

/// Sample a torus with major radius `major` around the Y axis and tube radius `minor`
pub fn torus(major: f32, minor: f32, divisions: u32) -> PointCloud {
    let d = divisions as f32;
    grid(divisions, |i, j| {
        let theta = i as f32 * (2.0 * PI / d);
        let phi = j as f32 * (2.0 * PI / d);
        let ring = major + minor * theta.cos();
        Point3D::new(ring * phi.cos(), minor * theta.sin(), ring * phi.sin())
    })
}

/// Sample an ellipsoid with semi-axes `a`, `b`, `c` along X, Y and Z
pub fn ellipsoid(a: f32, b: f32, c: f32, divisions: u32) -> PointCloud {
    let d = divisions as f32;
    grid(divisions, |i, j| {
        let theta = i as f32 * (PI / d);
        let phi = j as f32 * (2.0 * PI / d);
        Point3D::new(
            a * theta.sin() * phi.cos(),
            b * theta.sin() * phi.sin(),
            c * theta.cos(),
        )
    })
}

/// Number of sides of the prism's cross-section
pub const PRISM_SIDES: usize = 6;

/// Hexagonal prism corners: a bottom and a top vertex per side, no side-face samples
pub fn prism(radius: f32, height: f32) -> PointCloud {
    let mut points = Vec::with_capacity(PRISM_SIDES * 2);
    for i in 0..PRISM_SIDES {
        let angle = i as f32 * (2.0 * PI / PRISM_SIDES as f32);
        let (x, z) = (radius * angle.cos(), radius * angle.sin());
        points.push(Point3D::new(x, -height / 2.0, z));
        points.push(Point3D::new(x, height / 2.0, z));
    }
    points
}

/// The six vertices of an octahedron at `±size` along each axis
pub fn octahedron(size: f32) -> PointCloud {
    vec![
        Point3D::new(0.0, size, 0.0),
        Point3D::new(0.0, -size, 0.0),
        Point3D::new(size, 0.0, 0.0),
        Point3D::new(-size, 0.0, 0.0),
        Point3D::new(0.0, 0.0, size),
        Point3D::new(0.0, 0.0, -size),
    ]
}

/// A straight "snake" of `segments` points spaced `segment_length` apart along +Y
pub fn snake(segment_length: f32, segments: u32) -> PointCloud {
    (0..segments)
        .map(|i| Point3D::new(0.0, segment_length * i as f32, 0.0))
        .collect()
}
