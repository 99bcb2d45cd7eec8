pub(crate) mod client;
pub(crate) mod error;

pub use client::{ActionReply, Client};
pub use error::{ClientError, Result as CliClientResult};
