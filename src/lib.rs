pub mod constants;
mod context;
mod csrf;
mod error;
mod options;
mod origin;
mod result;
mod sec_fetch_site;
mod trusted_origins;
mod util;

pub use context::RequestContext;
pub use csrf::Csrf;
pub use error::ConfigurationError;
pub use options::{CsrfOptions, Exclude, ExcludeFn};
pub use origin::origin_matches_host;
pub use result::{AllowReason, CsrfDecision, DenyReason, Rejection};
pub use sec_fetch_site::SecFetchSite;
pub use trusted_origins::TrustedOrigins;
