use super::*;
use std::sync::Arc;

/// The gate in front of every protected operation.
///
/// Checks run cheapest first: signature and structure, then expiry, then
/// whether the subject is still registered. A token for a member that has
/// disappeared from the in-memory store fails with `UnknownSubject` even
/// though its signature is good.
pub struct Verifier {
    crypto: Arc<Crypto>,
    registry: Arc<Registry>,
}

impl Verifier {
    pub fn new(crypto: Arc<Crypto>, registry: Arc<Registry>) -> Self {
        Self { crypto, registry }
    }
    pub fn verify(&self, token: &str) -> Result<Subject, AuthError> {
        let claims = self.crypto.decode(token)?;
        if !self.registry.contains(claims.subject()) {
            log::warn!(
                "[verifier] token {} names unknown subject {}",
                Crypto::fingerprint(token),
                claims.subject()
            );
            return Err(AuthError::UnknownSubject);
        }
        Ok(Subject::from(claims))
    }
    /// Same as [`Verifier::verify`] but starting from an `Authorization` header.
    pub fn verify_header(&self, header: &str) -> Result<Subject, AuthError> {
        self.verify(bearer(header)?)
    }
}
