use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use reversi::{visualize, Game, Position};
use tracing::trace;

use crate::Strategy;

/// Asks a person for moves, reading `row col` or `pass` line by line.
///
/// Input that does not name a legal action is rejected and asked for again,
/// so the returned action is always legal.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    buf: String,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// A player on the process's stdin and stdout.
    ///
    /// Several of these can exist at once. Stdin is only locked while reading,
    /// and a one-byte buffer leaves unread input in stdin's own buffer for
    /// whichever player reads next.
    pub fn from_stdio() -> Self {
        Self::new(BufReader::with_capacity(1, std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    fn prompt(&mut self, game: &Game) -> anyhow::Result<()> {
        let legal_actions = game.legal_actions();
        writeln!(self.output, "{}", visualize(game.board(), Some(legal_actions)))?;
        if legal_actions.exists() {
            write!(self.output, "{} to move, legal actions:", game.current_color())?;
            for position in legal_actions {
                write!(self.output, " [{} {}]", position.row, position.col)?;
            }
            writeln!(self.output)?;
        } else {
            writeln!(self.output, "{} cannot place a disk, type 'pass'", game.current_color())?;
        }
        self.output.flush()?;
        Ok(())
    }
}

/// What a line of input asks for, before checking it against the game.
#[derive(Debug, PartialEq, Eq)]
enum ParsedInput {
    Pass,
    Place(Position),
    Invalid(&'static str),
}

fn parse_input(line: &str) -> ParsedInput {
    if line == "pass" {
        return ParsedInput::Pass;
    }
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 2 {
        return ParsedInput::Invalid("Expected two numbers 'row col', or 'pass'");
    }
    match (parts[0].parse::<i32>(), parts[1].parse::<i32>()) {
        (Ok(row), Ok(col)) => ParsedInput::Place(Position::new(row, col)),
        _ => ParsedInput::Invalid("Invalid integer"),
    }
}

impl<R: BufRead, W: Write> Strategy for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn play(&mut self, game: &Game) -> anyhow::Result<Option<Position>> {
        self.prompt(game)?;
        loop {
            self.buf.clear(); // because read_line() appends to the buffer
            if self.input.read_line(&mut self.buf)? == 0 {
                anyhow::bail!("Input closed while waiting for an action");
            }
            let line = self.buf.trim();
            trace!(input = line, "Human input");
            let action = match parse_input(line) {
                ParsedInput::Pass => None,
                ParsedInput::Place(position) => Some(position),
                ParsedInput::Invalid(reason) => {
                    writeln!(self.output, "{}", reason)?;
                    continue;
                }
            };
            if game.is_legal_action(action) {
                return Ok(action);
            }
            match action {
                None => writeln!(self.output, "Cannot pass, a disk can be placed")?,
                Some(position) => writeln!(self.output, "Cannot place a disk at {}", position)?,
            }
        }
    }
}
