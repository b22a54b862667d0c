use std::sync::Arc;

use crate::application::usecases::email_is_unique;
use crate::domain::{
    errors::DomainError,
    models::{User, UserChanges},
    repositories::UserRepository,
    validation::is_valid_email,
};

pub struct UpdateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, request: UpdateUserRequest) -> Result<User, DomainError> {
        // A missing email fails the syntax check, same as an empty one.
        let email = request.email.unwrap_or_default();
        if !is_valid_email(&email) {
            return Err(DomainError::Validation("Invalid email".to_string()));
        }
        if !email_is_unique(self.user_repo.as_ref(), &email).await? {
            return Err(DomainError::AlreadyExists(format!("email {email}")));
        }

        self.user_repo
            .update(
                request.id,
                UserChanges {
                    name: request.name,
                    email,
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NewUser;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    async fn repo_with_user(email: &str) -> Arc<InMemoryUserRepository> {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.create(NewUser {
            name: Some("Ann".to_string()),
            email: email.to_string(),
        })
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn replaces_name_and_email() {
        let repo = repo_with_user("ann@example.com").await;
        let usecase = UpdateUserUseCase::new(repo);
        let user = usecase
            .execute(UpdateUserRequest {
                id: 1,
                name: Some("Anna".to_string()),
                email: Some("anna@example.com".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(user.name.as_deref(), Some("Anna"));
        assert_eq!(user.email, "anna@example.com");
    }

    #[tokio::test]
    async fn missing_email_is_malformed() {
        let repo = repo_with_user("ann@example.com").await;
        let usecase = UpdateUserUseCase::new(repo);
        let err = usecase
            .execute(UpdateUserRequest {
                id: 1,
                name: None,
                email: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(message) if message == "Invalid email"));
    }

    #[tokio::test]
    async fn rejects_email_already_in_use() {
        let repo = repo_with_user("ann@example.com").await;
        repo.create(NewUser {
            name: Some("Bob".to_string()),
            email: "bob@example.com".to_string(),
        })
        .await
        .unwrap();
        let usecase = UpdateUserUseCase::new(repo);
        let err = usecase
            .execute(UpdateUserRequest {
                id: 2,
                name: None,
                email: Some("ann@example.com".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let repo = repo_with_user("ann@example.com").await;
        let usecase = UpdateUserUseCase::new(repo);
        let err = usecase
            .execute(UpdateUserRequest {
                id: 999,
                name: None,
                email: Some("new@example.com".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
