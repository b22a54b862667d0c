use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::models::{NewUser, User, UserChanges, UserFilter};

/// Persistence gateway for the `User` entity.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_many(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn create(&self, fields: NewUser) -> Result<User, DomainError>;
    async fn update(&self, id: i64, fields: UserChanges) -> Result<User, DomainError>;
    async fn delete(&self, id: i64) -> Result<User, DomainError>;
}
