use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use serde_json::Value;

use crate::{
    application::usecases::{
        create_user::CreateUserRequest, list_users::ListUsersRequest,
        update_user::UpdateUserRequest,
    },
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{user_envelope, user_list_envelope},
        requests::parse_user_payload,
        responses::{ErrorDto, UserListResponse, UserResponse},
    },
};

#[derive(Clone)]
pub struct UserEndpoints {
    state: Arc<ApiState>,
}

impl UserEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UserEndpoints {
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(
        &self,
        name: Query<Option<String>>,
        email: Query<Option<String>>,
    ) -> UserListResponse {
        let request = ListUsersRequest {
            name: name.0,
            email: email.0,
        };
        match self.state.list_users_usecase.execute(request).await {
            Ok(users) => UserListResponse::Ok(Json(user_list_envelope(&users))),
            Err(err) => err.into(),
        }
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<String>) -> UserResponse {
        let Some(id) = parse_id(&id.0) else {
            return invalid_id();
        };
        match self.state.get_user_usecase.execute(id).await {
            Ok(user) => UserResponse::Ok(Json(user_envelope(&user))),
            Err(err) => err.into(),
        }
    }

    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(&self, body: Json<Value>) -> UserResponse {
        let Some(payload) = parse_user_payload(&body.0) else {
            return invalid_body();
        };
        let request = CreateUserRequest {
            name: payload.name,
            email: payload.email,
        };
        match self.state.create_user_usecase.execute(request).await {
            Ok(user) => UserResponse::Ok(Json(user_envelope(&user))),
            Err(err) => err.into(),
        }
    }

    #[oai(path = "/users/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(&self, id: Path<String>, body: Json<Value>) -> UserResponse {
        let Some(id) = parse_id(&id.0) else {
            return invalid_id();
        };
        let Some(payload) = parse_user_payload(&body.0) else {
            return invalid_body();
        };
        let request = UpdateUserRequest {
            id,
            name: payload.name,
            email: payload.email,
        };
        match self.state.update_user_usecase.execute(request).await {
            Ok(user) => UserResponse::Ok(Json(user_envelope(&user))),
            Err(err) => err.into(),
        }
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<String>) -> UserResponse {
        let Some(id) = parse_id(&id.0) else {
            return invalid_id();
        };
        match self.state.delete_user_usecase.execute(id).await {
            Ok(user) => UserResponse::Ok(Json(user_envelope(&user))),
            Err(err) => err.into(),
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

fn invalid_id() -> UserResponse {
    UserResponse::BadRequest(Json(ErrorDto {
        error: "Id is invalid".to_string(),
    }))
}

fn invalid_body() -> UserResponse {
    UserResponse::BadRequest(Json(ErrorDto {
        error: "Invalid body".to_string(),
    }))
}
