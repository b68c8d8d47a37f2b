mod web;

use actix_web::web::Data;
use actix_web::{App, HttpServer};

use bookshelf::config::{ApiConfig, HostConfig};

use crate::web::middleware::SecurityHeaders;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = HostConfig::from_env();
    let api = ApiConfig::from_build_env();
    let api_origin = reqwest::Url::parse(&api.base_url)
        .map(|u| u.origin().ascii_serialization())
        .unwrap_or_default();

    let state = web::AppState {
        static_dir: config.static_dir.clone(),
    };
    log::info!(
        "serving {} on {} (api {})",
        state.static_dir.display(),
        config.bind_addr,
        api.base_url
    );

    let data = Data::new(state.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(SecurityHeaders::new(&api_origin))
            .wrap(actix_web::middleware::Logger::default())
            .configure(|cfg| web::routes::configure(cfg, &state))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
