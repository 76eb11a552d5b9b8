/// The closed set of shapes offered by the menu
use std::fmt;

use tracing::debug;

use crate::error::Error;
use crate::geometry;
use crate::raster::Model;

const DIVISIONS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Torus,
    Ellipsoid,
    Snake,
}

impl Shape {
    /// Every shape in menu order
    pub const ALL: [Shape; 7] = [
        Shape::Cube,
        Shape::Sphere,
        Shape::Cylinder,
        Shape::Cone,
        Shape::Torus,
        Shape::Ellipsoid,
        Shape::Snake,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Cube => "Cube",
            Shape::Sphere => "Sphere",
            Shape::Cylinder => "Cylinder",
            Shape::Cone => "Cone",
            Shape::Torus => "Torus",
            Shape::Ellipsoid => "Ellipsoid",
            Shape::Snake => "Snake",
        }
    }

    /// 1-based position in the menu
    pub fn menu_number(self) -> u8 {
        match self {
            Shape::Cube => 1,
            Shape::Sphere => 2,
            Shape::Cylinder => 3,
            Shape::Cone => 4,
            Shape::Torus => 5,
            Shape::Ellipsoid => 6,
            Shape::Snake => 7,
        }
    }

    /// Build the geometry to draw. Called once per selection, not per frame.
    pub fn model(self) -> Model {
        let model = match self {
            Shape::Cube => Model::Wireframe(geometry::cube_edges()),
            Shape::Sphere => Model::Cloud(geometry::sphere(1.0, DIVISIONS)),
            Shape::Cylinder => Model::Cloud(geometry::cylinder(1.0, 2.0, DIVISIONS)),
            Shape::Cone => Model::Cloud(geometry::cone(1.0, 2.0, DIVISIONS)),
            Shape::Torus => Model::Cloud(geometry::torus(1.2, 0.5, DIVISIONS)),
            Shape::Ellipsoid => Model::Cloud(geometry::ellipsoid(1.5, 1.0, 0.5, DIVISIONS)),
            Shape::Snake => Model::Cloud(geometry::snake(0.5, 10)),
        };
        if let Model::Cloud(points) = &model {
            debug!(shape = %self, points = points.len(), "generated point cloud");
        }
        model
    }
}

impl TryFrom<u8> for Shape {
    type Error = Error;

    fn try_from(choice: u8) -> Result<Self, Self::Error> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.menu_number() == choice)
            .ok_or_else(|| Error::InvalidChoice(choice.to_string()))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
