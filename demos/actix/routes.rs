use actix_web::{HttpResponse, Responder, http::header::CONTENT_TYPE, web};

use crate::csrf::AppState;

pub async fn greet(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(format!(
            "<h1>{}</h1><form method=\"post\" action=\"/transfer\"><button>Transfer</button></form>",
            state.greeting
        ))
}

pub async fn transfer() -> impl Responder {
    HttpResponse::Ok().body("Transfer accepted\n")
}

pub async fn payment_hook() -> impl Responder {
    HttpResponse::Ok().body("Webhook received\n")
}
