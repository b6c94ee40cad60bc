mod csrf;
mod routes;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use csrf::middleware::csrf_middleware;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let app_state = csrf::build_state().expect("valid CSRF configuration");

    let app = Router::new()
        .route("/greet", get(routes::greet))
        .route("/transfer", post(routes::transfer))
        .route("/hooks/payment", post(routes::payment_hook))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            csrf_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    println!("Axum example running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
