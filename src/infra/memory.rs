//! In-memory persistence adapter.
//!
//! Useful in tests and demos, and the reference for what the form core
//! expects from a real adapter: the create-vs-update branch and slug
//! uniqueness both live behind [`PostsGateway`], never in the form.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::gateways::{GatewayError, PostsGateway};
use crate::domain::posts::PostRecord;

#[derive(Debug, Default)]
pub struct InMemoryPosts {
    posts: Mutex<HashMap<Uuid, PostRecord>>,
}

impl InMemoryPosts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<PostRecord> {
        self.guard().values().find(|post| post.slug == slug).cloned()
    }

    fn guard(&self) -> MutexGuard<'_, HashMap<Uuid, PostRecord>> {
        match self.posts.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl PostsGateway for InMemoryPosts {
    async fn create_or_update_post(&self, record: &PostRecord) -> Result<(), GatewayError> {
        let mut posts = self.guard();

        match record.id {
            Some(id) => {
                if !posts.contains_key(&id) {
                    return Err(GatewayError::rejected("unknown post"));
                }
                let taken = posts
                    .iter()
                    .any(|(other, existing)| *other != id && existing.slug == record.slug);
                if taken {
                    return Err(GatewayError::rejected("duplicate slug"));
                }
                posts.insert(id, record.clone());
            }
            None => {
                if posts.values().any(|existing| existing.slug == record.slug) {
                    return Err(GatewayError::rejected("duplicate slug"));
                }
                let id = Uuid::new_v4();
                let mut stored = record.clone();
                stored.id = Some(id);
                posts.insert(id, stored);
            }
        }

        Ok(())
    }
}
