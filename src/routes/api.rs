use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::domain::category_path::LISTING_PREFIX;
use crate::dto::listing::ListingResponse;
use crate::forms::listing::ListingQueryPayload;
use crate::repository::StorefrontRepository;
use crate::routes::error_status;
use crate::services::ServiceError;
use crate::services::listing::show_listing;

#[get("/api/v1/list/{path:.*}")]
pub async fn api_v1_listing(
    path: web::Path<String>,
    req: HttpRequest,
    repo: web::Data<StorefrontRepository>,
) -> impl Responder {
    let raw_path = format!("{LISTING_PREFIX}/{}", path.into_inner());

    let result = ListingQueryPayload::from_query(req.query_string())
        .map_err(ServiceError::from)
        .and_then(|query| show_listing(&raw_path, query, repo.get_ref()));

    match result {
        Ok(listing) => HttpResponse::Ok().json(ListingResponse::from(listing)),
        Err(err) => HttpResponse::build(error_status(&err)).json(ListingResponse::from(err)),
    }
}
