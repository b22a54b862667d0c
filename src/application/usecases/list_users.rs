use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{User, UserFilter},
    repositories::UserRepository,
    validation::is_valid_email,
};

pub struct ListUsersUseCase {
    user_repo: Arc<dyn UserRepository>,
}

pub struct ListUsersRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ListUsersUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, request: ListUsersRequest) -> Result<Vec<User>, DomainError> {
        let mut filter = UserFilter::default();
        if let Some(name) = request.name.filter(|name| !name.is_empty()) {
            filter.name_contains = Some(name);
        }
        if let Some(email) = request.email.filter(|email| !email.is_empty()) {
            if !is_valid_email(&email) {
                return Err(DomainError::Validation("Invalid email".to_string()));
            }
            filter.email_equals = Some(email);
        }

        self.user_repo.find_many(&filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NewUser;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    async fn seeded_repo() -> Arc<InMemoryUserRepository> {
        let repo = Arc::new(InMemoryUserRepository::new());
        for (name, email) in [("Joan", "joan@example.com"), ("Bob", "bob@example.com")] {
            repo.create(NewUser {
                name: Some(name.to_string()),
                email: email.to_string(),
            })
            .await
            .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn filters_by_name_substring() {
        let usecase = ListUsersUseCase::new(seeded_repo().await);
        let users = usecase
            .execute(ListUsersRequest {
                name: Some("Jo".to_string()),
                email: None,
            })
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "joan@example.com");
    }

    #[tokio::test]
    async fn empty_params_are_ignored() {
        let usecase = ListUsersUseCase::new(seeded_repo().await);
        let users = usecase
            .execute(ListUsersRequest {
                name: Some(String::new()),
                email: Some(String::new()),
            })
            .await
            .unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn rejects_malformed_email_filter() {
        let usecase = ListUsersUseCase::new(seeded_repo().await);
        let err = usecase
            .execute(ListUsersRequest {
                name: None,
                email: Some("bad".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(message) if message == "Invalid email"));
    }
}
