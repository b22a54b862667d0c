use std::sync::Arc;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub struct DeleteUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Removes the user and returns the deleted record.
    pub async fn execute(&self, id: i64) -> Result<User, DomainError> {
        self.user_repo.delete(id).await
    }
}
