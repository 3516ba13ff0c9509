use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;
use tera::Tera;

use storefront::repository::{CachedRepository, DieselRepository, StorefrontRepository};
use storefront::routes::api::api_v1_listing;
use storefront::routes::listing::show_listing;

mod common;

fn app_data(test_db: &common::TestDb) -> (web::Data<StorefrontRepository>, web::Data<Tera>) {
    let mut conn = test_db.pool().get().expect("should acquire DB connection");
    common::seed_catalog(&mut conn);
    let repo = CachedRepository::new(DieselRepository::new(test_db.pool()), Duration::ZERO);
    let tera = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html"))
        .expect("templates should parse");
    (web::Data::new(repo), web::Data::new(tera))
}

fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .expect("should be an array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id should be a number"))
        .collect()
}

#[actix_web::test]
async fn api_lists_products_with_blank_price_fields() {
    let test_db = common::TestDb::new();
    let (repo, tera) = app_data(&test_db);
    let app = test::init_service(
        App::new()
            .app_data(repo)
            .app_data(tera)
            .service(api_v1_listing),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/list/electronics/computers?sort=price&order=desc&min_price=&max_price=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(ids(&body["products"]), vec![4, 2, 5]);
    assert_eq!(ids(&body["related_categories"]), vec![4, 5]);
}

#[actix_web::test]
async fn api_reports_errors_as_json() {
    let test_db = common::TestDb::new();
    let (repo, tera) = app_data(&test_db);
    let app = test::init_service(
        App::new()
            .app_data(repo)
            .app_data(tera)
            .service(api_v1_listing),
    )
    .await;

    let cases = [
        ("/api/v1/list/electronics?min_price=abc", StatusCode::BAD_REQUEST),
        ("/api/v1/list/electronics?available=yes", StatusCode::BAD_REQUEST),
        ("/api/v1/list/electronics?min_price=50&max_price=10", StatusCode::BAD_REQUEST),
        ("/api/v1/list/electronics/pool", StatusCode::NOT_FOUND),
        ("/api/v1/list/", StatusCode::NOT_FOUND),
    ];
    for (uri, status) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status, "{uri}");

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string(), "{uri}: {body}");
        assert!(body.get("products").is_none(), "{uri}");
    }
}

#[actix_web::test]
async fn listing_page_renders_filters_and_errors() {
    let test_db = common::TestDb::new();
    let (repo, tera) = app_data(&test_db);
    let app = test::init_service(
        App::new()
            .app_data(repo)
            .app_data(tera)
            .service(show_listing),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/list/electronics/computers?sort=id&order=asc&min_price=&max_price=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Laptop"));
    assert!(html.contains("LAPTOPS"));

    for (uri, status) in [
        ("/list/electronics?available=yes", StatusCode::BAD_REQUEST),
        ("/list/electronics/pool", StatusCode::NOT_FOUND),
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status, "{uri}");
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("Nothing to show here"), "{uri}");
    }
}
