use std::future::Future;
use std::pin::Pin;

use bunner_csrf_rs::constants::header;
use bunner_csrf_rs::{CsrfDecision, Rejection, RequestContext};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::HeaderMap;
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedCsrf;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CsrfBody = Full<Bytes>;

/// Hyper middleware that mirrors the pattern described in the
/// official "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct BunnerCsrf<S> {
    inner: S,
    csrf: SharedCsrf,
}

impl<S> BunnerCsrf<S> {
    pub fn new(csrf: SharedCsrf, inner: S) -> Self {
        Self { inner, csrf }
    }
}

impl<S> Service<Request<Incoming>> for BunnerCsrf<S>
where
    S: Service<Request<Incoming>, Response = Response<CsrfBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CsrfBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let owned_ctx = OwnedRequestContext::from_request(&req);
        let decision = self.csrf.check(&owned_ctx.as_request_context());

        match decision {
            CsrfDecision::Allow(_) => {
                let inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
            CsrfDecision::Deny(_) => {
                let response = rejection_response(self.csrf.rejection());
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

fn rejection_response(rejection: &Rejection) -> Response<CsrfBody> {
    let mut response = Response::new(Full::new(Bytes::from(rejection.body.clone())));
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
    fn from_request(request: &Request<Incoming>) -> Self {
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
