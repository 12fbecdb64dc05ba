use super::*;
use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;
use quill_core::PASSWORD_SALT_BYTES;
use std::sync::OnceLock;

/// One-way Argon2id digest of a password, kept in PHC string form so the
/// salt and cost parameters travel with it.
///
/// The plaintext is gone once this exists. Two digests of the same password
/// differ because each carries its own salt.
#[derive(Clone, PartialEq, Eq)]
pub struct Hashword(String);

impl Hashword {
    /// Salt freshly and hash.
    pub fn new(password: &str) -> Result<Self, AuthError> {
        use rand::Rng;
        let ref mut bytes = [0u8; PASSWORD_SALT_BYTES];
        rand::rng().fill(bytes);
        let salt = SaltString::encode_b64(bytes)?;
        let digest = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(Self(digest.to_string()))
    }

    /// Constant time inside argon2. A digest that no longer parses never matches.
    pub fn matches(&self, password: &str) -> bool {
        match PasswordHash::new(&self.0) {
            Ok(ref digest) => Argon2::default()
                .verify_password(password.as_bytes(), digest)
                .is_ok(),
            Err(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checked against when a login names an unknown email, so that miss
    /// costs one verification like a wrong password does.
    pub(crate) fn decoy() -> &'static Self {
        static DECOY: OnceLock<Hashword> = OnceLock::new();
        DECOY.get_or_init(|| Self::new("decoy").unwrap_or_else(|_| Self(String::new())))
    }
}

impl std::fmt::Debug for Hashword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Hashword(<redacted>)")
    }
}
