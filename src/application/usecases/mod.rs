pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

use crate::domain::{errors::DomainError, repositories::UserRepository};

/// Uniqueness validation: an existence check against the store. Not
/// transactional; the store-level unique constraint is the backstop for
/// concurrent writers.
pub(crate) async fn email_is_unique(
    repo: &dyn UserRepository,
    email: &str,
) -> Result<bool, DomainError> {
    Ok(repo.find_by_email(email).await?.is_none())
}
