use actix_web::{Responder, get, web};
use tera::Tera;

use crate::repository::StorefrontRepository;
use crate::routes::{base_context, error_status, render_template, render_template_with_status};
use crate::services::main::show_index;

#[get("/")]
pub async fn index(repo: web::Data<StorefrontRepository>, tera: web::Data<Tera>) -> impl Responder {
    let mut context = base_context("index");
    match show_index(repo.get_ref()) {
        Ok(groups) => {
            context.insert("groups", &groups);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            context.insert("error", &err.to_string());
            render_template_with_status(&tera, "listing/not_found.html", &context, error_status(&err))
        }
    }
}
