use super::Post;
use quill_core::ID;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    #[error("post {0} not found")]
    NotFound(ID<Post>),
}
