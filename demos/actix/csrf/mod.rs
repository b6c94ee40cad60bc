use std::sync::Arc;

use bunner_csrf_rs::{ConfigurationError, Csrf, CsrfOptions, Exclude, Rejection};

pub type SharedCsrf = Arc<Csrf>;

#[derive(Clone)]
pub struct AppState {
    pub csrf: SharedCsrf,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ConfigurationError> {
    let options = CsrfOptions::new()
        .trusted_origins(["https://partner.example.com", "http://localhost:5173"])
        .exclude_with(Exclude::paths(["/hooks/payment"]))
        .rejection(Rejection::new(403, "Cross-site request rejected\n"));

    let csrf = Arc::new(Csrf::new(options)?);

    Ok(AppState {
        csrf,
        greeting: "Welcome to the Actix CSRF example!",
    })
}

pub mod middleware;
