use crate::domain::models::User;
use crate::presentation::http::responses::{UserDto, UserEnvelopeDto, UserListEnvelopeDto};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
    }
}

pub fn user_envelope(user: &User) -> UserEnvelopeDto {
    UserEnvelopeDto {
        data: map_user(user),
    }
}

pub fn user_list_envelope(users: &[User]) -> UserListEnvelopeDto {
    UserListEnvelopeDto {
        data: users.iter().map(map_user).collect(),
    }
}
