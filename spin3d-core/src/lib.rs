//! spin3d core: geometry, transforms, projection and rasterization for the
//! rotating ASCII shape renderer.
//!
//! Everything here is platform independent. Output goes through the
//! [`FrameSink`] trait so frames can be captured in memory.

pub mod animation;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod raster;
pub mod selection;
pub mod shape;
pub mod transform;

/// Columns in a frame
pub const WIDTH: usize = 40;
/// Rows in a frame
pub const HEIGHT: usize = 40;

// Re-export commonly used types
pub use animation::{Animator, FrameSink, StopHandle, ANGLE_STEP, FRAME_DELAY};
pub use error::{Error, Result};
pub use geometry::{Edge, Point3D, PointCloud};
pub use raster::{Frame, Model};
pub use selection::{parse_choice, select_shape};
pub use shape::Shape;
pub use transform::RotationState;
