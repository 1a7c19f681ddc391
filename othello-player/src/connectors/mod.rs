//! Connectors supply move requests to a match from "the outside world."

mod connector;
mod console;
mod script;

pub use connector::{Connector, ConnectorError};
pub use console::ConsoleConnector;
pub use script::ScriptConnector;
