//! Category listing endpoint.
//!
//! ```text
//! GET /categories
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::trivia_dto::{CategoryMap, category_map};

/// Response payload for the category listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    /// Category labels keyed by id.
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
}

/// List every category.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Categories keyed by id", body = CategoriesResponse),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let categories = state.query.categories().await?;
    Ok(HttpResponse::Ok().json(CategoriesResponse {
        categories: category_map(categories),
    }))
}
