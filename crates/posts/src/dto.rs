use serde::Deserialize;
use serde::Serialize;

/// Body of a create or update. Both fields replace whatever was there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub description: String,
}

impl PostRequest {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
