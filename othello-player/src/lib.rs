//! `othello-player` runs Othello matches on top of `othello-rules`.
//!
//! The rules engine knows nothing about who is playing or where moves come
//! from. This crate supplies those collaborators:
//!
//!  - [`registry`] associates display names with sides for announcing results.
//!  - [`script`] parses scripted move sequences, including the [`SMOKE_TEST`] game.
//!  - [`connectors`] turn scripts or the console into a stream of requests.
//!  - [`runner`] drives requests through the turn contract and reports on the match.
//!  - [`config`] loads match settings from TOML.

pub mod config;
pub mod connectors;
pub mod registry;
pub mod runner;
pub mod script;

pub use config::{ConfigError, MatchConfig};
pub use registry::{Player, Roster};
pub use runner::{run_match, MatchOptions, MatchReport};
pub use script::{Request, Script, ScriptError, SMOKE_TEST};
