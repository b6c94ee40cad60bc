use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use bunner_csrf_rs::{CsrfDecision, Rejection, RequestContext, constants::header};

use super::{AppState, SharedCsrf};

pub async fn csrf_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let csrf: SharedCsrf = state.csrf.clone();

    let owned_ctx = OwnedRequestContext::from_request(&request);
    let context = owned_ctx.as_request_context();

    match csrf.check(&context) {
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
