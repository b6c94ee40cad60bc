use thiserror::Error;

/// Errors raised while building a [`Csrf`](crate::Csrf) guard from
/// [`CsrfOptions`](crate::CsrfOptions).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("trusted_origins has invalid data: {value} ({reason})")]
    InvalidTrustedOrigin {
        value: String,
        #[source]
        reason: url::ParseError,
    },
    #[error("trusted_origins has invalid data: {value} (scheme '{scheme}' is not http or https)")]
    UnsupportedScheme { value: String, scheme: String },
}
