use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod api;
pub mod listing;
pub mod main;

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status).body(tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    }))
}

pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context
}

/// HTTP status used when a service error is rendered as a not-found state.
pub fn error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::InvalidPath | ServiceError::CategoryNotFound => StatusCode::NOT_FOUND,
        ServiceError::Form(_) => StatusCode::BAD_REQUEST,
        ServiceError::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}
