use quill_core::ID;
use quill_core::Unique;

/// A blog post. No author is recorded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Post {
    id: ID<Self>,
    title: String,
    description: String,
}

impl Post {
    pub fn new(id: ID<Self>, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
        }
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Unique for Post {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}: {}", self.id, self.title, self.description)
    }
}
