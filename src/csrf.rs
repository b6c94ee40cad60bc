use crate::constants::method;
use crate::context::RequestContext;
use crate::error::ConfigurationError;
use crate::options::{CsrfOptions, Exclude};
use crate::origin::origin_matches_host;
use crate::result::{AllowReason, CsrfDecision, DenyReason, Rejection};
use crate::sec_fetch_site::SecFetchSite;
use crate::trusted_origins::TrustedOrigins;

/// Header-based CSRF guard that evaluates requests using [`CsrfOptions`].
///
/// The guard is immutable once built and can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Csrf {
    trusted_origins: TrustedOrigins,
    exclude: Option<Exclude>,
    rejection: Rejection,
}

impl Csrf {
    pub fn new(options: CsrfOptions) -> Result<Self, ConfigurationError> {
        let CsrfOptions {
            trusted_origins,
            exclude,
            rejection,
        } = options;
        let trusted_origins = TrustedOrigins::parse(trusted_origins)?;

        tracing::debug!(
            trusted_origins = trusted_origins.len(),
            exclude = exclude.is_some(),
            "csrf guard configured"
        );

        Ok(Self {
            trusted_origins,
            exclude,
            rejection,
        })
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CsrfDecision {
        let decision = self.evaluate(request);

        match decision {
            CsrfDecision::Allow(reason) => {
                tracing::trace!(
                    ?reason,
                    method = request.method,
                    path = request.path,
                    "csrf allow"
                );
            }
            CsrfDecision::Deny(reason) => {
                tracing::debug!(
                    ?reason,
                    method = request.method,
                    path = request.path,
                    origin = request.origin,
                    sec_fetch_site = request.sec_fetch_site,
                    "csrf deny"
                );
            }
        }

        decision
    }

    fn evaluate(&self, request: &RequestContext<'_>) -> CsrfDecision {
        if Self::is_safe_method(request.method) {
            return CsrfDecision::Allow(AllowReason::SafeMethod);
        }

        if let Some(site) = SecFetchSite::parse(request.sec_fetch_site) {
            if site.is_trusted() {
                return CsrfDecision::Allow(AllowReason::SameOriginFetch);
            }
            return self.exclusion_or(request, DenyReason::CrossSiteFetch);
        }

        let origin = match request.origin {
            Some(origin) if !origin.is_empty() => origin,
            _ => return CsrfDecision::Allow(AllowReason::MissingOrigin),
        };

        if origin_matches_host(origin, request.host) {
            return CsrfDecision::Allow(AllowReason::MatchingHost);
        }

        self.exclusion_or(request, DenyReason::OriginMismatch)
    }

    fn is_safe_method(request_method: &str) -> bool {
        method::SAFE.contains(&request_method)
    }

    fn exclusion_or(&self, request: &RequestContext<'_>, reason: DenyReason) -> CsrfDecision {
        if let Some(origin) = request.origin {
            if self.trusted_origins.contains(origin) {
                return CsrfDecision::Allow(AllowReason::TrustedOrigin);
            }
        }

        match &self.exclude {
            Some(exclude) if exclude.matches(request) => CsrfDecision::Allow(AllowReason::Excluded),
            _ => CsrfDecision::Deny(reason),
        }
    }

    pub fn rejection(&self) -> &Rejection {
        &self.rejection
    }

    pub fn trusted_origins(&self) -> &TrustedOrigins {
        &self.trusted_origins
    }
}

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;
