//! Minimal authenticated blog core.
//!
//! This facade crate re-exports the quill crates for convenient access.
//!
//! **Nothing is persisted.** Members, posts and (unless `JWT_SECRET` is set)
//! the signing secret live for the lifetime of the process only.
//!
//! ## Crate Organization
//!
//! - [`core`] — Typed ids, constants, duration parsing, logging setup
//! - [`auth`] — Password hashing, credential store, token issue and verify
//! - [`posts`] — Blog post store
//! - [`service`] — Facade an API surface calls into

pub use quill_core      as core;
pub use quill_auth      as auth;
pub use quill_posts     as posts;
pub use quill_service   as service;

// Re-export commonly used types at the root
pub use quill_service::*;
