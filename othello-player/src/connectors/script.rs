//! [`Connector`] replaying a [`Script`].

use super::{Connector, ConnectorError};
use crate::script::{Request, Script};
use async_trait::async_trait;
use othello_rules::Game;

pub struct ScriptConnector {
    requests: std::vec::IntoIter<Request>,
}

impl ScriptConnector {
    pub fn new(script: Script) -> Self {
        Self {
            requests: script.into_iter(),
        }
    }

    /// The number of requests not yet handed out.
    pub fn remaining(&self) -> usize {
        self.requests.len()
    }
}

#[async_trait]
impl Connector for ScriptConnector {
    async fn next_request(&mut self, _game: &Game) -> Result<Option<Request>, ConnectorError> {
        Ok(self.requests.next())
    }
}
