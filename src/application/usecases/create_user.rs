use std::sync::Arc;

use crate::application::usecases::email_is_unique;
use crate::domain::{
    errors::DomainError,
    models::{NewUser, User},
    repositories::UserRepository,
    validation::is_valid_email,
};

pub struct CreateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let Some(email) = request.email.filter(|email| !email.is_empty()) else {
            return Err(DomainError::Validation("Email is required".to_string()));
        };
        if !is_valid_email(&email) {
            return Err(DomainError::Validation("Invalid email".to_string()));
        }
        if !email_is_unique(self.user_repo.as_ref(), &email).await? {
            return Err(DomainError::AlreadyExists(format!("email {email}")));
        }

        self.user_repo
            .create(NewUser {
                name: request.name,
                email,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    fn usecase() -> CreateUserUseCase {
        CreateUserUseCase::new(Arc::new(InMemoryUserRepository::new()))
    }

    #[tokio::test]
    async fn creates_user_with_assigned_id() {
        let usecase = usecase();
        let user = usecase
            .execute(CreateUserRequest {
                name: Some("Ann".to_string()),
                email: Some("ann@example.com".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "ann@example.com");
    }

    #[tokio::test]
    async fn requires_an_email() {
        let usecase = usecase();
        let err = usecase
            .execute(CreateUserRequest {
                name: None,
                email: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(message) if message == "Email is required"));
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let usecase = usecase();
        let err = usecase
            .execute(CreateUserRequest {
                name: None,
                email: Some("not-an-email".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(message) if message == "Invalid email"));
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let usecase = usecase();
        let request = || CreateUserRequest {
            name: None,
            email: Some("dup@example.com".to_string()),
        };
        usecase.execute(request()).await.unwrap();
        let err = usecase.execute(request()).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists(_)));
    }
}
