use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use pitchdeck::client::ApiClient;
use pitchdeck::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    // A serverless host owns the listener and mounts pitchdeck::api::configure itself.
    if config.serverless {
        log::info!("VERCEL=1 set; not binding a listener");
        return Ok(());
    }

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+) — generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let client = web::Data::new(ApiClient::new(&config.api_base_url));
    let (host, port) = config.bind_addr();

    log::info!("API listening on http://{host}:{port}");
    log::info!("Pitch form posts to {}", client.form_url());

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(client.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(pitchdeck::configure_app)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
