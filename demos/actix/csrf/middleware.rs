use std::future::{Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{StatusCode, header::HeaderMap};
use actix_web::{Error, HttpRequest, HttpResponse};
use bunner_csrf_rs::{CsrfDecision, Rejection, RequestContext, constants::header};

use super::SharedCsrf;

type LocalBoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + 'a>>;

pub struct BunnerCsrf {
    csrf: SharedCsrf,
}

impl BunnerCsrf {
    pub fn new(csrf: SharedCsrf) -> Self {
        Self { csrf }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BunnerCsrf
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = BunnerCsrfMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BunnerCsrfMiddleware {
            service,
            csrf: self.csrf.clone(),
        }))
    }
}

pub struct BunnerCsrfMiddleware<S> {
    service: S,
    csrf: SharedCsrf,
}

impl<S, B> Service<ServiceRequest> for BunnerCsrfMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let owned_ctx = OwnedRequestContext::from_request(req.request());
        let context = owned_ctx.as_request_context();

        match self.csrf.check(&context) {
            CsrfDecision::Allow(_) => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            CsrfDecision::Deny(_) => {
                let response = rejection_response(req, self.csrf.rejection());
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

fn rejection_response<B>(
    req: ServiceRequest,
    rejection: &Rejection,
) -> ServiceResponse<EitherBody<B>> {
    let status = StatusCode::from_u16(rejection.status).unwrap_or(StatusCode::FORBIDDEN);
    let response = HttpResponse::build(status)
        .body(rejection.body.clone())
        .map_into_right_body();
    req.into_response(response)
}

struct OwnedRequestContext {
    method: String,
    path: String,
    host: Option<String>,
    origin: Option<String>,
    sec_fetch_site: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &HttpRequest) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            path: request.path().to_string(),
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
