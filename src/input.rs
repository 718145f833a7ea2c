//! Point source: reads points written as `(x1,y1),(x2,y2),...` on one line.

use std::{error::Error, fmt::Display, fs, io, path::Path};

use tracing::debug;

use crate::point::Point;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErr {
    /// A `(` at byte `offset` is never closed.
    UnclosedPair { offset: usize },
    /// The pair starting at byte `offset` has no `,` between coordinates.
    MissingComma { offset: usize },
    /// `text`, in the pair starting at byte `offset`, is not an integer.
    BadCoordinate { offset: usize, text: String },
    /// The bytes from `offset` on are not valid UTF-8.
    InvalidUtf8 { offset: usize },
}

impl Display for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErr::UnclosedPair { offset } => {
                write!(f, "unclosed pair at byte {offset}")
            }
            ParseErr::MissingComma { offset } => {
                write!(f, "missing comma in pair at byte {offset}")
            }
            ParseErr::BadCoordinate { offset, text } => {
                write!(f, "bad coordinate {text:?} in pair at byte {offset}")
            }
            ParseErr::InvalidUtf8 { offset } => {
                write!(f, "invalid UTF-8 at byte {offset}")
            }
        }
    }
}

impl Error for ParseErr {}

#[derive(Debug)]
pub enum InputErr {
    Io(io::Error),
    Parse(ParseErr),
}

impl Display for InputErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputErr::Io(err) => write!(f, "failed to read input: {err}"),
            InputErr::Parse(err) => write!(f, "malformed input: {err}"),
        }
    }
}

impl Error for InputErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputErr::Io(err) => Some(err),
            InputErr::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for InputErr {
    fn from(err: io::Error) -> Self {
        InputErr::Io(err)
    }
}

impl From<ParseErr> for InputErr {
    fn from(err: ParseErr) -> Self {
        InputErr::Parse(err)
    }
}

fn parse_coordinate(text: &str, offset: usize) -> Result<isize, ParseErr> {
    let text = text.trim();
    text.parse().map_err(|_| ParseErr::BadCoordinate {
        offset,
        text: text.to_string(),
    })
}

/// Parses the points on the first line of `text`.
///
/// Anything between pairs is skipped, so `(1,2),(3,4)` and `(1, 2) (3, 4)`
/// read the same. Lines after the first are ignored.
pub fn parse_points(text: &str) -> Result<Vec<Point>, ParseErr> {
    let line = text.lines().next().unwrap_or_default();
    let mut points = Vec::new();
    let mut pos = 0;

    while let Some(start) = line[pos..].find('(').map(|ix| pos + ix) {
        let end = line[start..]
            .find(')')
            .map(|ix| start + ix)
            .ok_or(ParseErr::UnclosedPair { offset: start })?;
        let (x, y) = line[start + 1..end]
            .split_once(',')
            .ok_or(ParseErr::MissingComma { offset: start })?;
        points.push(Point::new(
            parse_coordinate(x, start)?,
            parse_coordinate(y, start)?,
        ));
        pos = end + 1;
    }

    Ok(points)
}

pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>, InputErr> {
    let path = path.as_ref();
    let text = String::from_utf8(fs::read(path)?).map_err(|err| {
        ParseErr::InvalidUtf8 {
            offset: err.utf8_error().valid_up_to(),
        }
    })?;
    let points = parse_points(&text)?;
    debug!(path = %path.display(), n = points.len(), "read points");
    Ok(points)
}
