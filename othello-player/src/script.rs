//! Scripted move sequences.
//!
//! A script holds one request per line, `<side> <location>`, for example
//! `black (6, 5)` or `white C4`. Blank lines and `#` comments are ignored.

use derive_more::{Display, Error};
use othello_rules::{Location, LocationError, ParseSideError, Side};
use std::fs;
use std::path::{Path, PathBuf};

/// The reference game used as a smoke test.
pub const SMOKE_TEST: &str = include_str!("../scripts/smoke_test.txt");

/// A request for `side` to play at `location`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Request {
    pub side: Side,
    pub location: Location,
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum ParseRequestError {
    #[display(fmt = "expected `<side> <location>`")]
    MissingLocation,
    #[display(fmt = "{}", _0)]
    Side(ParseSideError),
    #[display(fmt = "{}", _0)]
    Location(LocationError),
}

impl From<ParseSideError> for ParseRequestError {
    fn from(err: ParseSideError) -> Self {
        ParseRequestError::Side(err)
    }
}

impl From<LocationError> for ParseRequestError {
    fn from(err: LocationError) -> Self {
        ParseRequestError::Location(err)
    }
}

impl std::str::FromStr for Request {
    type Err = ParseRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(char::is_whitespace)
            .ok_or(ParseRequestError::MissingLocation)?;
        let (side, location) = s.split_at(split);

        Ok(Self {
            side: side.parse()?,
            location: location.parse()?,
        })
    }
}

#[derive(Debug, Display, Error)]
pub enum ScriptError {
    #[display(fmt = "line {}: {}", line, source)]
    Parse {
        line: usize,
        source: ParseRequestError,
    },
    #[display(fmt = "failed to read script {:?}: {}", path, source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// An ordered list of move requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    requests: Vec<Request>,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let requests = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(line, content)| {
                content
                    .parse()
                    .map_err(|source| ScriptError::Parse { line, source })
            })
            .collect::<Result<Vec<Request>, _>>()?;

        Ok(Self { requests })
    }

    /// Read and parse the script at `path`.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl IntoIterator for Script {
    type Item = Request;
    type IntoIter = std::vec::IntoIter<Request>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.into_iter()
    }
}
