#![allow(dead_code)]

use bunner_csrf_rs::constants::method;
use bunner_csrf_rs::{Csrf, CsrfDecision, CsrfOptions, Exclude, Rejection, RequestContext};

#[derive(Default)]
pub struct CsrfBuilder {
    trusted_origins: Vec<String>,
    exclude: Option<Exclude>,
    rejection: Option<Rejection>,
}

impl CsrfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trusted_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trusted_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude<F>(mut self, predicate: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>) -> bool + Send + Sync + 'static,
    {
        self.exclude = Some(Exclude::new(predicate));
        self
    }

    pub fn exclude_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = Some(Exclude::paths(paths));
        self
    }

    pub fn rejection(mut self, rejection: Rejection) -> Self {
        self.rejection = Some(rejection);
        self
    }

    pub fn options(self) -> CsrfOptions {
        CsrfOptions {
            trusted_origins: self.trusted_origins,
            exclude: self.exclude,
            rejection: self.rejection.unwrap_or_default(),
        }
    }

    pub fn build(self) -> Csrf {
        Csrf::new(self.options()).expect("valid CSRF configuration")
    }
}

#[derive(Clone)]
pub struct RequestBuilder {
    method: String,
    path: String,
    host: Option<String>,
    origin: Option<String>,
    sec_fetch_site: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: "/".into(),
            host: None,
            origin: None,
            sec_fetch_site: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn sec_fetch_site(mut self, value: impl Into<String>) -> Self {
        self.sec_fetch_site = Some(value.into());
        self
    }

    pub fn check(&self, csrf: &Csrf) -> CsrfDecision {
        let ctx = RequestContext {
            method: &self.method,
            path: &self.path,
            host: self.host.as_deref(),
            origin: self.origin.as_deref(),
            sec_fetch_site: self.sec_fetch_site.as_deref(),
        };
        csrf.check(&ctx)
    }
}

pub fn csrf() -> CsrfBuilder {
    CsrfBuilder::new()
}

pub fn request(method: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method)
}

pub fn post() -> RequestBuilder {
    RequestBuilder::new(method::POST)
}
