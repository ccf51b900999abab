pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod templates_structs;

use actix_web::web;

/// Routes served by the standalone binary: the echo API plus the pitch page.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.configure(api::configure)
        .route("/pitch", web::get().to(handlers::pitch_handlers::form_page))
        .route("/pitch", web::post().to(handlers::pitch_handlers::submit));
}
