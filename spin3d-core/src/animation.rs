/// Frame driver: advances the rotation and hands frames to a sink
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, trace};

use crate::error::Result;
use crate::raster::{Frame, Model};
use crate::shape::Shape;
use crate::transform::RotationState;

/// Rotation added to both axes after every frame (radians)
pub const ANGLE_STEP: f32 = 0.05;

/// Pause between frames
pub const FRAME_DELAY: Duration = Duration::from_millis(100);

/// Output side of the animation loop.
///
/// Implementations own everything platform specific: how a frame reaches the
/// screen, how the screen is cleared and how the loop waits.
pub trait FrameSink {
    fn display(&mut self, frame: &Frame) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn delay(&mut self, duration: Duration) -> Result<()>;
}

/// Cloneable request to stop the animation before its next frame
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Owns the animation state for one selected shape
pub struct Animator {
    shape: Shape,
    model: Model,
    rotation: RotationState,
    frame_limit: Option<u64>,
    stop: StopHandle,
}

impl Animator {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            model: shape.model(),
            rotation: RotationState::zero(),
            frame_limit: None,
            stop: StopHandle::new(),
        }
    }

    /// Stop on our own after `frames` frames
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Render the current frame without advancing
    pub fn frame(&self) -> Frame {
        self.model.render(&self.rotation)
    }

    /// Draw, advance, wait, clear; repeat until stopped.
    ///
    /// Returns the number of frames displayed.
    pub fn run<S: FrameSink>(&mut self, sink: &mut S) -> Result<u64> {
        info!(shape = %self.shape, "animation started");
        let mut frames = 0u64;
        while !self.stop.is_stopped() && self.frame_limit.map_or(true, |limit| frames < limit) {
            let frame = self.frame();
            sink.display(&frame)?;
            frames += 1;
            trace!(frames, angle_x = self.rotation.x, angle_y = self.rotation.y, "frame displayed");

            self.rotation.advance(ANGLE_STEP);
            sink.delay(FRAME_DELAY)?;
            sink.clear()?;
        }
        info!(frames, "animation stopped");
        Ok(frames)
    }
}
