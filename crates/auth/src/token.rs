use super::*;

/// Signed bearer token as handed to the client.
///
/// `Debug` prints a fingerprint instead of the token so that logging a
/// token by accident does not leak the credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn into_inner(self) -> String {
        self.0
    }
    pub fn fingerprint(&self) -> String {
        Crypto::fingerprint(&self.0)
    }
}

impl From<String> for Token {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Token").field(&self.fingerprint()).finish()
    }
}
