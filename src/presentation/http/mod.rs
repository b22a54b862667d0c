pub mod endpoints;
pub mod mappers;
pub mod middleware;
pub mod requests;
pub mod responses;

use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Route, http::StatusCode, web::Json};
use poem_openapi::OpenApiService;
use poem_openapi::error::ParseRequestPayloadError;

use crate::presentation::http::endpoints::{
    health::HealthEndpoints, root::ApiState, users::UserEndpoints,
};
use crate::presentation::http::middleware::RequestGate;

/// Assembles the routed application: the API under `/api`, the Swagger UI at
/// the root, and the request gate in front of both.
pub fn build_app(state: Arc<ApiState>) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (UserEndpoints::new(state), HealthEndpoints),
        "User API",
        env!("CARGO_PKG_VERSION"),
    );
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/", ui)
        .catch_error(|_: ParseRequestPayloadError| async {
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Invalid body" })),
            )
        })
        .with(RequestGate)
}
