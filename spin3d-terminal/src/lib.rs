/// Terminal front end for the rotating ASCII shape renderer
use crossterm::{cursor, execute, terminal};
use std::io::stdout;
use spin3d_core::{Animator, Result, Shape, StopHandle};

pub mod renderer;

pub use renderer::{OutputMode, TerminalRenderer};

/// Main application struct for terminal rendering
pub struct TerminalApp {
    animator: Animator,
    mode: OutputMode,
}

impl TerminalApp {
    pub fn new(shape: Shape, mode: OutputMode) -> Self {
        Self {
            animator: Animator::new(shape),
            mode,
        }
    }

    pub fn with_frame_limit(mut self, frames: Option<u64>) -> Self {
        if let Some(frames) = frames {
            self.animator = self.animator.with_frame_limit(frames);
        }
        self
    }

    /// Handle that stops the animation before its next frame
    pub fn stop_handle(&self) -> StopHandle {
        self.animator.stop_handle()
    }

    /// Run until stopped. Returns the number of frames shown.
    pub fn run(&mut self) -> Result<u64> {
        let mut renderer = TerminalRenderer::new(stdout().lock(), self.mode, self.stop_handle());
        if self.mode == OutputMode::Plain {
            return self.animator.run(&mut renderer);
        }

        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Hide
        )?;

        let result = self.animator.run(&mut renderer);

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }
}
