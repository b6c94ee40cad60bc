mod csrf;
mod routes;

use actix_web::{App, HttpServer, web};
use csrf::middleware::BunnerCsrf;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let app_state = csrf::build_state().expect("valid CSRF configuration");

    HttpServer::new(move || {
        let state = app_state.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(BunnerCsrf::new(state.csrf.clone()))
            .route("/greet", web::get().to(routes::greet))
            .route("/transfer", web::post().to(routes::transfer))
            .route("/hooks/payment", web::post().to(routes::payment_hook))
    })
    .bind(("127.0.0.1", 5002))?
    .run()
    .await
}
