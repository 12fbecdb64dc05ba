use super::*;
use quill_core::Timestamp;

/// Proof that a request carried a valid token for a registered member.
/// Produced by [`Verifier::verify`] and dropped when the request ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject(Claims);

impl Subject {
    pub fn email(&self) -> &str {
        self.0.subject()
    }
    pub fn expires_at(&self) -> Timestamp {
        self.0.exp
    }
}

impl From<Claims> for Subject {
    fn from(claims: Claims) -> Self {
        Self(claims)
    }
}

/// Pull the token out of an `Authorization` header value.
pub fn bearer(header: &str) -> Result<&str, AuthError> {
    let (scheme, token) = header
        .trim()
        .split_once(' ')
        .ok_or(AuthError::Malformed)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::Malformed);
    }
    match token.trim() {
        "" => Err(AuthError::Malformed),
        token => Ok(token),
    }
}
