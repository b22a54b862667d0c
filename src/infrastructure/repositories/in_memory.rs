use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    errors::DomainError,
    models::{NewUser, User, UserChanges, UserFilter},
    repositories::UserRepository,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_many(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut matches: Vec<User> = users
            .values()
            .filter(|user| {
                let name_matches = filter.name_contains.as_deref().is_none_or(|needle| {
                    user.name.as_deref().is_some_and(|name| name.contains(needle))
                });
                let email_matches = filter
                    .email_equals
                    .as_deref()
                    .is_none_or(|email| user.email == email);
                name_matches && email_matches
            })
            .cloned()
            .collect();
        matches.sort_by_key(|user| user.id);
        Ok(matches)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, fields: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        // Duplicate check under the write lock, mirroring the unique index.
        if users.values().any(|user| user.email == fields.email) {
            return Err(DomainError::AlreadyExists(format!("email {}", fields.email)));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            name: fields.name,
            email: fields.email,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, fields: UserChanges) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|user| user.id != id && user.email == fields.email)
        {
            return Err(DomainError::AlreadyExists(format!("email {}", fields.email)));
        }
        let user = users
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))?;
        user.name = fields.name;
        user.email = fields.email;
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        users
            .remove(&id)
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }
}
