use super::*;
use quill_core::Timestamp;
use std::sync::Arc;
use std::time::Duration;

/// Token issuer. Signs HS256 JWTs with a process-held symmetric secret and
/// checks signature then expiry on the way back in.
///
/// Tokens are self-contained: nothing is recorded server-side at issuance,
/// so a token stays valid until `exp` no matter what else happens.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    leeway: Duration,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        // expiry is judged against our own clock in `decode`
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
            clock: Arc::new(SystemClock),
            ttl: quill_core::ACCESS_TOKEN_DURATION,
            leeway: quill_core::ACCESS_TOKEN_LEEWAY,
        }
    }
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Sign a token for `subject` that expires `ttl` from now.
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<Token, AuthError> {
        let claims = Claims::new(subject.to_string(), self.now(), ttl);
        let token = self.encode(&claims)?;
        log::debug!(
            "[crypto] issued token {} expiring at {}",
            token.fingerprint(),
            claims.exp
        );
        Ok(token)
    }
    /// Sign a token with the configured default lifetime.
    pub fn issue_default(&self, subject: &str) -> Result<Token, AuthError> {
        self.issue(subject, self.ttl)
    }
    pub fn encode(&self, claims: &Claims) -> Result<Token, AuthError> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
            .map(Token::from)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
    /// Structure and signature first, expiry second. Nothing in the payload
    /// is trusted until the signature has been checked.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("[crypto] rejected token {}: {}", Self::fingerprint(token), e);
                AuthError::Malformed
            })?;
        if claims.expired(self.now(), self.leeway) {
            log::debug!("[crypto] token {} expired at {}", Self::fingerprint(token), claims.exp);
            return Err(AuthError::Expired);
        }
        Ok(claims)
    }

    /// Short SHA-256 fingerprint, safe to log in place of a token.
    pub fn fingerprint(token: &str) -> String {
        use sha2::Digest;
        sha2::Sha256::digest(token.as_bytes())
            .iter()
            .take(6)
            .map(|b| format!("{:02x}", b))
            .collect()
    }
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }
}
