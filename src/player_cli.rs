#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    common::{Coord, GameError},
    config::{GameConfig, SizeBounds},
    grid::ConcealedGrid,
    player::{Command, Player},
};

/// Why a line of user input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not `row,col`, `retry` or `exit`.
    Malformed(String),
    /// Well formed, but off the grid.
    OutOfRange { row: i64, col: i64, size: usize },
    NotANumber(String),
    SizeOutOfBounds { size: i64, bounds: SizeBounds },
    /// Neither yes nor no.
    NotYesNo(String),
    /// The size is fine but the game it describes is not.
    Config(GameError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed(s) => write!(f, "Invalid input '{}'. Valid example: 1,2", s),
            InputError::OutOfRange { size, .. } => write!(
                f,
                "Coordinates out of bounds! Enter values between 0 and {}",
                size.saturating_sub(1)
            ),
            InputError::NotANumber(s) => write!(f, "'{}' is not a valid whole number", s),
            InputError::SizeOutOfBounds { bounds, .. } => write!(
                f,
                "The size must be between {} and {}",
                bounds.min, bounds.max
            ),
            InputError::NotYesNo(_) => write!(f, "Invalid answer. Type 'yes' or 'no'."),
            InputError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse `row,col`, `retry` or `exit` for a grid of side `size`.
pub fn parse_command(input: &str, size: usize) -> Result<Command, InputError> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "retry" => return Ok(Command::Retry),
        "exit" => return Ok(Command::Exit),
        _ => {}
    }
    let malformed = || InputError::Malformed(input.clone());
    let (row, col) = input.split_once(',').ok_or_else(malformed)?;
    let row: i64 = row.trim().parse().map_err(|_| malformed())?;
    let col: i64 = col.trim().parse().map_err(|_| malformed())?;
    let out_of_range = InputError::OutOfRange { row, col, size };
    let coord = Coord::try_from((row, col)).map_err(|_| out_of_range.clone())?;
    if coord.row >= size || coord.col >= size {
        return Err(out_of_range);
    }
    Ok(Command::Fire(coord))
}

/// `yes`/`y` or `no`/`n`, case-insensitive.
pub fn parse_confirmation(input: &str) -> Result<bool, InputError> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        other => Err(InputError::NotYesNo(other.to_string())),
    }
}

/// A grid size within `bounds`.
pub fn parse_size(input: &str, bounds: &SizeBounds) -> Result<usize, InputError> {
    let input = input.trim();
    let size: i64 = input
        .parse()
        .map_err(|_| InputError::NotANumber(input.to_string()))?;
    match usize::try_from(size) {
        Ok(n) if bounds.contains(n) => Ok(n),
        _ => Err(InputError::SizeOutOfBounds {
            size,
            bounds: *bounds,
        }),
    }
}

/// A grid size within `bounds` that also leaves room for `ship_count` ships.
pub fn parse_config(
    input: &str,
    bounds: &SizeBounds,
    ship_count: usize,
) -> Result<GameConfig, InputError> {
    let size = parse_size(input, bounds)?;
    let config = GameConfig::new(size, ship_count).with_bounds(*bounds);
    config.validate().map_err(InputError::Config)?;
    Ok(config)
}

/// Human player typing at a terminal.
///
/// Invalid lines are reported and the prompt repeats. End of input counts as
/// `exit`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt and read one line. `None` at end of input or on a read error.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        write!(self.output, "{}", prompt).ok();
        self.output.flush().ok();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    /// Keep prompting until `parse` accepts a line.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Option<T> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Some(value),
                Err(e) => {
                    writeln!(self.output, "Error: {}", e).ok();
                }
            }
        }
    }

    /// Ask for a grid size within `bounds`.
    pub fn ask_size(&mut self, bounds: &SizeBounds) -> Option<usize> {
        let prompt = format!("Enter the grid size ({}-{}): ", bounds.min, bounds.max);
        self.prompt_until(&prompt, |line| parse_size(line, bounds))
    }

    /// Ask for a grid size until it fits `ship_count` ships.
    pub fn ask_config(&mut self, bounds: &SizeBounds, ship_count: usize) -> Option<GameConfig> {
        let prompt = format!("Enter the grid size ({}-{}): ", bounds.min, bounds.max);
        self.prompt_until(&prompt, |line| parse_config(line, bounds, ship_count))
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn next_command(&mut self, _rng: &mut SmallRng, grid: ConcealedGrid<'_>) -> Command {
        let size = grid.size();
        self.prompt_until("Select a cell row,col or 'retry' or 'exit': ", |line| {
            parse_command(line, size)
        })
        .unwrap_or(Command::Exit)
    }

    fn confirm(&mut self, question: &str) -> Option<bool> {
        let prompt = format!("{} (yes/no): ", question);
        self.prompt_until(&prompt, parse_confirmation)
    }
}
