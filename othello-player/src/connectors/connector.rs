use crate::script::Request;
use async_trait::async_trait;
use derive_more::{Display, Error};
use othello_rules::{Game, Turn};

#[derive(Debug, Display, Error)]
pub enum ConnectorError {
    #[display(fmt = "failed to read move: {}", _0)]
    Io(std::io::Error),
}

impl From<std::io::Error> for ConnectorError {
    fn from(err: std::io::Error) -> Self {
        ConnectorError::Io(err)
    }
}

/// An abstract source of move requests, such as a script or a console.
#[async_trait]
pub trait Connector {
    /// Get the next move request. Returns `None` once the source has nothing
    /// more to play.
    async fn next_request(&mut self, game: &Game) -> Result<Option<Request>, ConnectorError>;

    /// Tell the connector how its last request was answered.
    fn report(&mut self, _request: Request, _turn: &Turn) {}
}
