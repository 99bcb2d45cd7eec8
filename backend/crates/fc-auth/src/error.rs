use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid password {location}")]
    InvalidPassword { location: ErrorLocation },

    #[error("Shared secret is not configured {location}")]
    MissingSecret { location: ErrorLocation },
}

impl AuthError {
    /// Message returned to clients
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidPassword { .. } => "Invalid password",
            Self::MissingSecret { .. } => "Shared secret is not configured",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
