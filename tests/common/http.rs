#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use bunner_csrf_rs::constants::header;
use bunner_csrf_rs::{Csrf, CsrfDecision, Rejection, RequestContext};
use tower::ServiceExt;

pub const HELLO: &str = "Hello World";

/// Minimal host application: every route answers 200 behind the CSRF middleware.
pub fn app(csrf: Csrf) -> Router {
    Router::new()
        .fallback(|| async { HELLO })
        .layer(axum::middleware::from_fn_with_state(
            Arc::new(csrf),
            csrf_middleware,
        ))
}

pub async fn csrf_middleware(
    State(csrf): State<Arc<Csrf>>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);

    match csrf.check(&owned_ctx.as_request_context()) {
        CsrfDecision::Allow(_) => next.run(request).await,
        CsrfDecision::Deny(_) => rejection_response(csrf.rejection()),
    }
}

fn rejection_response(rejection: &Rejection) -> Response {
    let mut response = Response::new(Body::from(rejection.body.clone()));
    *response.status_mut() =
        StatusCode::from_u16(rejection.status).unwrap_or(StatusCode::FORBIDDEN);
    response
}

struct OwnedRequestContext {
    method: String,
    path: String,
    host: Option<String>,
    origin: Option<String>,
    sec_fetch_site: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            path: request.uri().path().to_string(),
            host: header_value(headers, header::HOST)
                .or_else(|| request.uri().authority().map(|authority| authority.to_string())),
            origin: header_value(headers, header::ORIGIN),
            sec_fetch_site: header_value(headers, header::SEC_FETCH_SITE),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            path: &self.path,
            host: self.host.as_deref(),
            origin: self.origin.as_deref(),
            sec_fetch_site: self.sec_fetch_site.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

pub struct Sent {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub async fn send(app: &Router, method: &str, path: &str, headers: &[(&str, &str)]) -> Sent {
    let mut builder = axum::http::Request::builder().method(method).uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).expect("valid test request");

    send_request(app, request).await
}

/// Sends a prebuilt request, for header values that are not valid `&str`.
pub async fn send_request(app: &Router, request: Request) -> Sent {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");

    Sent {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
    }
}
