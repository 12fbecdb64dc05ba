//! Blog post storage.
//!
//! - [`Post`] — A single post with a sequential id
//! - [`Blog`] — Process-lifetime store of posts
//! - [`PostRequest`] — Create/update payload
mod blog;
mod dto;
mod error;
mod post;

pub use blog::*;
pub use dto::*;
pub use error::*;
pub use post::*;
