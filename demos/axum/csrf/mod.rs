use std::sync::Arc;

use bunner_csrf_rs::{ConfigurationError, Csrf, CsrfOptions, Exclude};

pub type SharedCsrf = Arc<Csrf>;

#[derive(Clone)]
pub struct AppState {
    pub csrf: SharedCsrf,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ConfigurationError> {
    let options = CsrfOptions {
        trusted_origins: vec!["https://partner.example.com".into()],
        exclude: Some(Exclude::paths(["/hooks/payment"])),
        ..CsrfOptions::default()
    };

    let csrf = Arc::new(Csrf::new(options)?);

    Ok(AppState {
        csrf,
        greeting: "Welcome to the Axum CSRF example!",
    })
}

pub mod middleware;
