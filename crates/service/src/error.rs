use quill_auth::AuthError;
use quill_posts::PostError;
use thiserror::Error;

/// Everything a [`Quill`](crate::Quill) call can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Post(#[from] PostError),
}

impl Error {
    /// True when the caller sent something wrong, false for server faults.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Auth(e) => e.is_client_error(),
            Self::Post(_) => true,
        }
    }
}
