use super::*;
use parking_lot::RwLock;
use quill_core::ID;
use quill_core::Unique;
use std::collections::BTreeMap;

/// Id allocation and the table move together under one lock.
struct Shelf {
    next: ID<Post>,
    posts: BTreeMap<ID<Post>, Post>,
}

impl Default for Shelf {
    fn default() -> Self {
        Self {
            next: ID::from(1),
            posts: BTreeMap::new(),
        }
    }
}

/// In-memory post store.
///
/// Ids come from a counter that only moves forward, so a deleted id is
/// never handed out again. Since ids grow with every insert, iterating the
/// table in id order is iterating it in insertion order.
///
/// Callers are expected to have authorized the request already.
#[derive(Default)]
pub struct Blog {
    shelf: RwLock<Shelf>,
}

impl Blog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, title: String, description: String) -> Post {
        let mut shelf = self.shelf.write();
        let id = shelf.next;
        shelf.next = id.next();
        let post = Post::new(id, title, description);
        shelf.posts.insert(id, post.clone());
        log::debug!("[blog] created post {}", id);
        post
    }

    pub fn list(&self) -> Vec<Post> {
        self.shelf.read().posts.values().cloned().collect()
    }

    pub fn get(&self, id: ID<Post>) -> Option<Post> {
        self.shelf.read().posts.get(&id).cloned()
    }

    /// Replace title and description wholesale.
    pub fn update(
        &self,
        id: ID<Post>,
        title: String,
        description: String,
    ) -> Result<Post, PostError> {
        self.shelf
            .write()
            .posts
            .get_mut(&id)
            .map(|slot| {
                *slot = Post::new(id, title, description);
                slot.clone()
            })
            .inspect(|post| log::debug!("[blog] updated post {}", post.id()))
            .ok_or(PostError::NotFound(id))
    }

    pub fn delete(&self, id: ID<Post>) -> Result<(), PostError> {
        self.shelf
            .write()
            .posts
            .remove(&id)
            .map(|_| log::debug!("[blog] deleted post {}", id))
            .ok_or(PostError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.shelf.read().posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelf.read().posts.is_empty()
    }
}
