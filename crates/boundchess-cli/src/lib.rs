//! Scenario JSON (de)serialization, configuration validation, and the
//! command-line front end: a scenario-file batch runner built around the
//! same shape as a line-oriented protocol handler — parse untrusted input
//! into a typed value, reject malformed input with a specific error
//! variant, log at the boundary — applied to JSON documents instead of
//! protocol commands.

pub mod cli;
pub mod error;
pub mod runner;
pub mod scenario_io;

pub use cli::Cli;
pub use error::CliError;
pub use runner::run;
pub use scenario_io::{CountsJson, CountsOutput, PiecesInput, ScenarioInput, load_scenario};
