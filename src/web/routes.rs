use actix_files::{Files, NamedFile};
use actix_web::{HttpResponse, Responder, get, web};

use crate::web::AppState;

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Every unknown GET gets the client shell; the in-browser router and its
/// guard decide what to render.
pub async fn spa_index(state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    let index = state.index_file();
    NamedFile::open_async(&index).await.map_err(|e| {
        log::error!("cannot open {}: {}", index.display(), e);
        actix_web::error::ErrorNotFound("client bundle not found")
    })
}

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(healthz)
        .service(Files::new("/pkg", state.static_dir.join("pkg")).prefer_utf8(true))
        .service(Files::new("/images", state.static_dir.join("images")))
        .default_service(web::get().to(spa_index));
}
