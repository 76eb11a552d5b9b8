/// Interactive shape menu
use std::io::{BufRead, Write};

use nom::{
    character::complete::{digit1, space0},
    combinator::{all_consuming, map_res},
    sequence::delimited,
    IResult,
};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::shape::Shape;

/// Write the menu to `output`
pub fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Choose a shape to display:")?;
    for shape in Shape::ALL {
        writeln!(output, "{}. {}", shape.menu_number(), shape)?;
    }
    output.flush()?;
    Ok(())
}

fn choice_number(input: &str) -> IResult<&str, u8> {
    all_consuming(delimited(space0, map_res(digit1, str::parse::<u8>), space0))(input)
}

/// Parse one line of menu input into a shape
pub fn parse_choice(line: &str) -> Result<Shape> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    match choice_number(trimmed) {
        Ok((_, number)) => Shape::try_from(number),
        Err(_) => Err(Error::InvalidChoice(trimmed.to_string())),
    }
}

/// Prompt until a valid shape is read.
///
/// Invalid lines are rejected with a message and the menu is shown again.
/// Returns `Error::InputClosed` if the input ends first.
pub fn select_shape<R, W>(input: &mut R, output: &mut W) -> Result<Shape>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        print_menu(output)?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        match parse_choice(&line) {
            Ok(shape) => {
                debug!(%shape, "shape selected");
                return Ok(shape);
            }
            Err(Error::InvalidChoice(rejected)) => {
                warn!(input = %rejected, "rejected menu choice");
                writeln!(
                    output,
                    "Invalid choice {rejected:?}: enter a number from 1 to {}.",
                    Shape::ALL.len()
                )?;
            }
            Err(e) => return Err(e),
        }
    }
}
