use actix_web::{HttpRequest, Responder, get, web};
use tera::Tera;

use crate::domain::category_path::LISTING_PREFIX;
use crate::forms::listing::ListingQueryPayload;
use crate::repository::StorefrontRepository;
use crate::routes::{base_context, error_status, render_template, render_template_with_status};
use crate::services::ServiceError;
use crate::services::listing::show_listing as show_listing_service;

#[get("/list/{path:.*}")]
pub async fn show_listing(
    path: web::Path<String>,
    req: HttpRequest,
    repo: web::Data<StorefrontRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let raw_path = format!("{LISTING_PREFIX}/{}", path.into_inner());

    let result = ListingQueryPayload::from_query(req.query_string())
        .map_err(ServiceError::from)
        .and_then(|query| show_listing_service(&raw_path, query, repo.get_ref()));

    let mut context = base_context("listing");
    match result {
        Ok(listing) => {
            context.insert("listing", &listing);
            render_template(&tera, "listing/index.html", &context)
        }
        Err(err) => {
            log::debug!("Listing `{raw_path}` rendered as not found: {err}");
            context.insert("error", &err.to_string());
            render_template_with_status(&tera, "listing/not_found.html", &context, error_status(&err))
        }
    }
}
