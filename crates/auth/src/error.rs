use thiserror::Error;

/// Authentication outcomes other than success.
///
/// Every variant is scoped to a single request and none of them is transient,
/// so callers should surface them rather than retry. Messages never carry
/// secrets, digests, or tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The email is already registered.
    #[error("email already registered")]
    DuplicateIdentity,
    /// Unknown email or wrong password. Deliberately undifferentiated.
    #[error("incorrect email or password")]
    AuthenticationFailed,
    /// The token's expiry has passed.
    #[error("token has expired")]
    Expired,
    /// The token could not be decoded or its signature does not match.
    #[error("could not validate credentials")]
    Malformed,
    /// The token is genuine but its subject is not registered.
    #[error("user not found")]
    UnknownSubject,
    /// A required input was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// The password hasher itself failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),
    /// The token could not be signed.
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(e: argon2::password_hash::Error) -> Self {
        Self::Hashing(e.to_string())
    }
}

impl AuthError {
    /// True for outcomes caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Hashing(_) | Self::Signing(_))
    }
}
