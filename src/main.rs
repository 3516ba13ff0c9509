use std::time::Duration;

use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use storefront::db::establish_connection_pool;
use storefront::models::config::ServerConfig;
use storefront::repository::{CachedRepository, DieselRepository};
use storefront::routes::api::api_v1_listing;
use storefront::routes::listing::show_listing;
use storefront::routes::main::index;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let tera = match Tera::new(&format!("{}/**/*.html", server_config.templates_dir)) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to parse templates: {e}");
            std::process::exit(1);
        }
    };

    let repo = web::Data::new(CachedRepository::new(
        DieselRepository::new(pool),
        Duration::from_secs(server_config.category_cache_ttl_secs),
    ));
    let tera = web::Data::new(tera);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Starting storefront on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(tera.clone())
            .service(index)
            .service(api_v1_listing)
            .service(show_listing)
    })
    .bind(bind_address)?
    .run()
    .await
}
