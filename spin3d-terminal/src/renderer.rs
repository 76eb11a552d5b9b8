/// Crossterm-backed frame sink
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::Print,
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use std::io::Write;
use std::time::{Duration, Instant};
use spin3d_core::{Frame, FrameSink, Result, StopHandle};
use tracing::debug;

/// How frames reach the writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Raw-mode terminal: CRLF line breaks, screen clearing, q/Esc/Ctrl-C to quit
    Interactive,
    /// Frames appended to the writer one after another, no control sequences
    Plain,
}

/// Writes frames to a terminal (or any writer) and paces the animation
pub struct TerminalRenderer<W: Write> {
    writer: W,
    mode: OutputMode,
    stop: StopHandle,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(writer: W, mode: OutputMode, stop: StopHandle) -> Self {
        Self { writer, mode, stop }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line_break(&self) -> &'static str {
        match self.mode {
            OutputMode::Interactive => "\r\n",
            OutputMode::Plain => "\n",
        }
    }

    /// Wait for `duration` while watching for quit keys
    fn poll_keys(&mut self, duration: Duration) -> Result<()> {
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                return Ok(());
            }
            if let Event::Key(key) = event::read()? {
                if is_quit_key(&key) {
                    debug!(code = ?key.code, "quit requested");
                    self.stop.stop();
                    return Ok(());
                }
            }
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl<W: Write> FrameSink for TerminalRenderer<W> {
    fn display(&mut self, frame: &Frame) -> Result<()> {
        let line_break = self.line_break();
        for row in frame.rows() {
            self.writer.queue(Print(row))?;
            self.writer.queue(Print(line_break))?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.mode == OutputMode::Interactive {
            self.writer
                .queue(Clear(ClearType::All))?
                .queue(cursor::MoveTo(0, 0))?;
            self.writer.flush()?;
        }
        Ok(())
    }

    fn delay(&mut self, duration: Duration) -> Result<()> {
        match self.mode {
            OutputMode::Interactive => self.poll_keys(duration),
            OutputMode::Plain => {
                std::thread::sleep(duration);
                Ok(())
            }
        }
    }
}
