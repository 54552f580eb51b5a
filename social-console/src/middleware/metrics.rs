use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::services::metrics::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS};

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    let elapsed = start.elapsed().as_secs_f64();

    if let (Some(total), Some(duration)) = (
        HTTP_REQUESTS_TOTAL.get(),
        HTTP_REQUEST_DURATION_SECONDS.get(),
    ) {
        total.with_label_values(&[&method, &path, &status]).inc();
        duration
            .with_label_values(&[&method, &path, &status])
            .observe(elapsed);
    }

    response
}
