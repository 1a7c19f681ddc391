//! Drives a match: feeds connector requests through the turn contract.

use crate::connectors::{Connector, ConnectorError};
use crate::registry::Roster;
use othello_rules::{Game, GameOver, Turn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOptions {
    /// Print the board after every accepted move.
    pub render: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { render: true }
    }
}

/// What happened over a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchReport {
    pub game: Game,
    pub played: usize,
    pub rejected: usize,
}

impl MatchReport {
    pub fn game_over(&self) -> Option<GameOver> {
        self.game.game_over()
    }
}

/// Play requests from `connector` until the game ends or the connector runs dry.
pub async fn run_match<C>(
    connector: &mut C,
    roster: &Roster,
    options: MatchOptions,
) -> Result<MatchReport, ConnectorError>
where
    C: Connector + Send + ?Sized,
{
    let mut report = MatchReport {
        game: Game::new(),
        played: 0,
        rejected: 0,
    };

    if options.render {
        println!("{}\n", report.game.board);
    }

    while !report.game.is_finished() {
        let request = match connector.next_request(&report.game).await? {
            Some(request) => request,
            None => break,
        };

        let turn = report.game.play(request.side, request.location);
        match &turn {
            Turn::Played(placement) => {
                report.played += 1;
                if options.render {
                    println!("{}\n", report.game.board);
                }
                if let Some(game_over) = placement.game_over {
                    println!(
                        "Game is ended white piece: {} black piece: {}",
                        game_over.score.white, game_over.score.black
                    );
                    println!("{}", roster.announce(&game_over));
                }
            }
            Turn::Rejected(legal) => {
                report.rejected += 1;
                println!("Here are the valid moves: {}", legal);
                println!("Invalid move");
            }
        }

        connector.report(request, &turn);
    }

    Ok(report)
}
