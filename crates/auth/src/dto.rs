use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub password: String,
}

/// Password-form login. `username` carries the email.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<super::Token> for TokenResponse {
    fn from(token: super::Token) -> Self {
        Self {
            access_token: token.into_inner(),
            token_type: quill_core::TOKEN_TYPE.to_string(),
        }
    }
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &super::Crypto::fingerprint(&self.access_token))
            .field("token_type", &self.token_type)
            .finish()
    }
}
