//! Authentication, tokens, and credential storage.
//!
//! JWT-based authentication with Argon2 password hashing. All state is held
//! in memory and lost when the process exits; a restarted process will
//! reject every previously issued token with [`AuthError::UnknownSubject`]
//! (or [`AuthError::Malformed`] if the signing secret changed too).
//!
//! ## Identity
//!
//! - [`Member`] — Registered identity, keyed by email
//! - [`Registry`] — Credential store holding members and password digests
//! - [`Subject`] — Result of a successful token check
//!
//! ## Security
//!
//! - [`Hashword`] — Argon2 password digest
//! - [`Crypto`] — JWT signing and decoding
//! - [`Claims`] — JWT payload structure
//! - [`Verifier`] — Gate for protected operations
//! - [`Clock`] — Time source for expiry
mod claims;
mod clock;
mod crypto;
mod dto;
mod error;
mod hashword;
mod member;
mod registry;
mod subject;
mod token;
mod verifier;

pub use claims::*;
pub use clock::*;
pub use crypto::*;
pub use dto::*;
pub use error::*;
pub use hashword::*;
pub use member::*;
pub use registry::*;
pub use subject::*;
pub use token::*;
pub use verifier::*;
