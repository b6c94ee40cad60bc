use crate::constants::rejection;

/// Why a request was allowed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    SafeMethod,
    SameOriginFetch,
    MissingOrigin,
    MatchingHost,
    TrustedOrigin,
    Excluded,
}

/// Why a request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    CrossSiteFetch,
    OriginMismatch,
}

/// Outcome of evaluating one request. The reason carried by each variant is diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfDecision {
    Allow(AllowReason),
    Deny(DenyReason),
}

impl CsrfDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CsrfDecision::Allow(_))
    }

    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }
}

/// Response an adapter sends instead of calling the downstream handler. It carries no headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub body: String,
}

impl Rejection {
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl Default for Rejection {
    fn default() -> Self {
        Self::new(rejection::STATUS, rejection::BODY)
    }
}
