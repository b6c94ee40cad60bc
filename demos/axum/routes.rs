use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::csrf::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><form method=\"post\" action=\"/transfer\"><button>Transfer</button></form>",
        state.greeting
    ))
}

pub async fn transfer() -> impl IntoResponse {
    "Transfer accepted\n"
}

pub async fn payment_hook() -> impl IntoResponse {
    "Webhook received\n"
}
