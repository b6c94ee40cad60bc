use std::sync::Arc;

use bunner_csrf_rs::{ConfigurationError, Csrf, CsrfOptions};

pub type SharedCsrf = Arc<Csrf>;
pub type SharedAppState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    pub csrf: SharedCsrf,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<SharedAppState, ConfigurationError> {
    let options = CsrfOptions::new()
        .trusted_origins(["https://partner.example.com"])
        .exclude(|request| request.path.starts_with("/hooks/"));

    let csrf = Arc::new(Csrf::new(options)?);

    Ok(Arc::new(AppState {
        csrf,
        greeting: "Welcome to the Hyper CSRF example!",
    }))
}

pub mod middleware;
