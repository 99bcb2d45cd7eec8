pub mod access_gate;
pub mod error;

pub use access_gate::AccessGate;
pub use error::{AuthError, Result};

#[cfg(test)]
mod tests;
