use axum::http::HeaderValue;
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Echoes the caller's request id, or mints one, onto both the request
/// (where the trace span picks it up) and the response.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = match req.headers().get(REQUEST_ID_HEADER) {
        Some(value) => value.clone(),
        None => {
            let minted = Uuid::new_v4().to_string();
            HeaderValue::from_str(&minted).expect("uuid is a valid header value")
        }
    };

    req.headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    let mut response = next.run(req).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);
    response
}
