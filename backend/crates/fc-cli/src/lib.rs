//! fc-cli library
//!
//! Exports the HTTP client and the status poller for use in tests.

pub(crate) mod client;
pub(crate) mod poller;

#[cfg(test)]
mod tests;

pub use client::{ActionReply, CliClientResult, Client, ClientError};
pub use poller::{DEFAULT_INTERVAL, PollStep, Poller, StatusSource};
