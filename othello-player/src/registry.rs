//! Player bookkeeping: display names for each side.
//! Names never affect the rules; they are only used to announce results.

use othello_rules::{GameOver, Outcome, Side};

/// A named participant playing one side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    side: Side,
}

impl Player {
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

/// The players registered for a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_player(&mut self, name: impl Into<String>, side: Side) {
        self.players.push(Player::new(name, side));
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The name of the first player registered for `side`.
    pub fn name_for(&self, side: Side) -> Option<&str> {
        self.players
            .iter()
            .find(|player| player.side == side)
            .map(Player::name)
    }

    /// A human-readable line announcing the result.
    pub fn announce(&self, game_over: &GameOver) -> String {
        match game_over.outcome {
            Outcome::Winner(side) => format!(
                "Winner is {} player: {}",
                side,
                self.name_for(side).unwrap_or("unnamed")
            ),
            Outcome::Tie => "It's a tie".to_string(),
        }
    }
}
