use poem_openapi::{ApiResponse, Object, payload::Json};

use crate::domain::errors::DomainError;

#[derive(Object, Debug)]
pub struct UserDto {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

#[derive(Object, Debug)]
pub struct UserEnvelopeDto {
    pub data: UserDto,
}

#[derive(Object, Debug)]
pub struct UserListEnvelopeDto {
    pub data: Vec<UserDto>,
}

#[derive(Object, Debug)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(ApiResponse)]
pub enum UserResponse {
    #[oai(status = 200)]
    Ok(Json<UserEnvelopeDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum UserListResponse {
    #[oai(status = 200)]
    Ok(Json<UserListEnvelopeDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

impl From<DomainError> for UserResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_) => Self::NotFound(error_body("User not found")),
            DomainError::AlreadyExists(_) => Self::BadRequest(error_body("Email already exists")),
            DomainError::Validation(message) => Self::BadRequest(Json(ErrorDto { error: message })),
            DomainError::Other(err) => {
                tracing::error!(error = %err, "persistence failure");
                Self::InternalError(error_body("Internal server error"))
            }
        }
    }
}

impl From<DomainError> for UserListResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => Self::BadRequest(Json(ErrorDto { error: message })),
            DomainError::Other(err) => {
                tracing::error!(error = %err, "persistence failure");
                Self::InternalError(error_body("Internal server error"))
            }
            other => Self::BadRequest(Json(ErrorDto {
                error: other.to_string(),
            })),
        }
    }
}

fn error_body(message: &str) -> Json<ErrorDto> {
    Json(ErrorDto {
        error: message.to_string(),
    })
}
