//! [`Connector`] reading moves typed at the console.
//!
//! A line is either `<side> <location>` or just a location, which is played
//! by the side whose turn it nominally is. That side alternates after every
//! accepted move; naming a side explicitly lets a stuck side be skipped.

use super::{Connector, ConnectorError};
use crate::script::Request;
use async_std::io;
use async_trait::async_trait;
use othello_rules::{Game, Location, Side, Turn};
use std::io::Write;

pub struct ConsoleConnector {
    side_to_move: Side,
}

impl Default for ConsoleConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleConnector {
    pub fn new() -> Self {
        Self {
            side_to_move: Side::default(),
        }
    }

    fn parse_line(&self, line: &str) -> Option<Request> {
        if let Ok(request) = line.parse::<Request>() {
            return Some(request);
        }

        line.parse::<Location>().ok().map(|location| Request {
            side: self.side_to_move,
            location,
        })
    }
}

#[async_trait]
impl Connector for ConsoleConnector {
    async fn next_request(&mut self, game: &Game) -> Result<Option<Request>, ConnectorError> {
        loop {
            println!(
                "{} to move, legal: {}",
                self.side_to_move,
                game.available_positions(self.side_to_move)
            );
            print!("Enter a move (or 'quit'): ");
            std::io::stdout().flush()?;

            let mut buffer = String::new();
            if io::stdin().read_line(&mut buffer).await? == 0 {
                return Ok(None);
            }

            let line = buffer.trim();
            if line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }

            match self.parse_line(line) {
                Some(request) => return Ok(Some(request)),
                None => println!("Cannot parse move."),
            }
        }
    }

    fn report(&mut self, request: Request, turn: &Turn) {
        if turn.is_played() {
            self.side_to_move = !request.side;
        }
    }
}
