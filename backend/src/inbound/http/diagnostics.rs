//! Deliberate failure endpoint.
//!
//! Clients use `GET /error` to check how they render a server failure.

use actix_web::{HttpResponse, get};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;

/// Always fail with a redacted internal error.
#[utoipa::path(
    get,
    path = "/error",
    responses(
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["diagnostics"],
    operation_id = "serverError"
)]
#[get("/error")]
pub async fn server_error() -> ApiResult<HttpResponse> {
    Err(Error::internal("diagnostic failure requested"))
}
