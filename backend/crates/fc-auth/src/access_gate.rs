//! Shared-secret gate for the mutating lifecycle operations

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Process-wide shared secret, loaded once at startup
pub struct AccessGate {
    secret: Box<[u8]>,
}

impl AccessGate {
    /// # Errors
    /// `AuthError::MissingSecret` for a blank secret; an empty secret would
    /// admit an empty password.
    #[track_caller]
    pub fn new(secret: &str) -> AuthErrorResult<Self> {
        if secret.trim().is_empty() {
            return Err(AuthError::MissingSecret {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            secret: secret.as_bytes().into(),
        })
    }

    /// `true` only for an exact match. An absent credential never matches.
    pub fn authorize(&self, credential: Option<&str>) -> bool {
        match credential {
            Some(candidate) => constant_time_eq(&self.secret, candidate.as_bytes()),
            None => false,
        }
    }

    /// Same check as [`authorize`](Self::authorize), as a `Result` for `?` chains.
    #[track_caller]
    pub fn check(&self, credential: Option<&str>) -> AuthErrorResult<()> {
        if self.authorize(credential) {
            Ok(())
        } else {
            Err(AuthError::InvalidPassword {
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Compares every byte of the longer input so timing does not depend on
/// where the first mismatch sits.
fn constant_time_eq(expected: &[u8], candidate: &[u8]) -> bool {
    let len = expected.len().max(candidate.len());
    let mut diff = u8::from(expected.len() != candidate.len());

    for i in 0..len {
        let a = expected.get(i).copied().unwrap_or(0);
        let b = candidate.get(i).copied().unwrap_or(0);
        diff |= a ^ b;
    }

    diff == 0
}
