use crate::context::RequestContext;
use crate::result::Rejection;
use std::fmt;
use std::sync::Arc;

pub type ExcludeFn = dyn for<'a> Fn(&RequestContext<'a>) -> bool + Send + Sync;

/// Operator-supplied escape hatch for requests the guard would otherwise deny.
#[derive(Clone)]
pub struct Exclude(Arc<ExcludeFn>);

impl Exclude {
    pub fn new<F>(predicate: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Excludes requests whose path is one of `paths`, compared exactly.
    pub fn paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paths: Vec<String> = paths.into_iter().map(Into::into).collect();
        Self::new(move |request| paths.iter().any(|path| path == request.path))
    }

    pub fn matches(&self, request: &RequestContext<'_>) -> bool {
        (self.0)(request)
    }
}

impl fmt::Debug for Exclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Exclude(<predicate>)")
    }
}

#[derive(Debug, Clone, Default)]
pub struct CsrfOptions {
    pub trusted_origins: Vec<String>,
    pub exclude: Option<Exclude>,
    pub rejection: Rejection,
}

impl CsrfOptions {
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

    pub fn exclude_with(mut self, exclude: Exclude) -> Self {
        self.exclude = Some(exclude);
        self
    }

    pub fn rejection(mut self, rejection: Rejection) -> Self {
        self.rejection = rejection;
        self
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
