use poem::{
    Endpoint, IntoResponse, Middleware, Request, Response,
    http::{Method, StatusCode, header},
    web::Json,
};

/// Request gate: filters method and content type before any routing runs.
pub struct RequestGate;

impl<E: Endpoint> Middleware<E> for RequestGate {
    type Output = RequestGateEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequestGateEndpoint { inner: ep }
    }
}

pub struct RequestGateEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for RequestGateEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        let allowed = [Method::GET, Method::POST, Method::PUT, Method::DELETE];
        if !allowed.contains(req.method()) {
            return Ok(reject(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"));
        }
        // An absent Content-Type header passes; a present one must be
        // exactly application/json.
        if let Some(value) = req.headers().get(header::CONTENT_TYPE) {
            if value.to_str().ok() != Some("application/json") {
                return Ok(reject(StatusCode::BAD_REQUEST, "Invalid content type"));
            }
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

fn reject(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
