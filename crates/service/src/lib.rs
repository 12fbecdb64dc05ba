//! Service facade for quill.
//!
//! Wires the credential store, token issuer, verifier and post store into
//! one [`Quill`] value that an API surface (HTTP, CLI, tests) calls into.
//!
//! Nothing here is durable. Members, posts and the signing secret (unless
//! configured) all vanish when the process exits, and with them every token
//! that was ever issued.
//!
//! - [`Quill`] — Register, login, and token-gated post operations
//! - [`Config`] — Signing secret and token lifetimes
//! - [`Error`] — Union of authentication and post failures
mod config;
mod error;
mod quill;

pub use config::*;
pub use error::*;
pub use quill::*;

pub use quill_auth::LoginRequest;
pub use quill_auth::Member;
pub use quill_auth::RegisterRequest;
pub use quill_auth::TokenResponse;
pub use quill_posts::Post;
pub use quill_posts::PostRequest;
