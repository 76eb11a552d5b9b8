/// spin3d - rotating ASCII shapes
///
/// Pick a shape from the menu (or pass --shape) and watch it spin.
/// Controls:
///   - Q/ESC/Ctrl-C: Quit
use clap::Parser;
use std::io::{self, Write};
use spin3d_core::{parse_choice, select_shape, Shape};
use spin3d_terminal::{OutputMode, TerminalApp};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "spin3d", version, about = "Render a rotating 3D shape as ASCII art")]
struct Args {
    /// Shape number from the menu (1-7); prompts when omitted
    #[arg(long, value_parser = parse_shape)]
    shape: Option<Shape>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Write frames to stdout without raw mode or screen clearing
    #[arg(long)]
    plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_shape(value: &str) -> Result<Shape, String> {
    parse_choice(value).map_err(|e| e.to_string())
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> spin3d_core::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(io::stderr)
        .init();

    let shape = match args.shape {
        Some(shape) => shape,
        None => select_shape(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let mode = if args.plain {
        OutputMode::Plain
    } else {
        OutputMode::Interactive
    };
    if mode == OutputMode::Interactive {
        println!("Rendering {shape} (press Q to quit)...");
        io::stdout().flush()?;
    }

    let mut app = TerminalApp::new(shape, mode).with_frame_limit(args.frames);
    let frames = app.run()?;
    tracing::info!(frames, "exiting");
    Ok(())
}
