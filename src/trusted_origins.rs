use crate::error::ConfigurationError;
use indexmap::IndexSet;
use url::Url;

/// Set of operator-declared origins that are always allowed to send unsafe requests.
///
/// Entries are stored as `scheme://host[:port]`, the ASCII serialization of the
/// configured URL's origin. Lookups compare the raw `Origin` header against
/// those entries without normalizing the header first, so
/// `https://Trusted.example.com` or `https://trusted.example.com:443` never
/// match a configured `https://trusted.example.com`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedOrigins {
    origins: IndexSet<String>,
}

impl TrustedOrigins {
    pub fn parse<I, S>(values: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut origins = IndexSet::new();
        for value in values {
            origins.insert(Self::normalize(value.as_ref())?);
        }
        Ok(Self { origins })
    }

    fn normalize(value: &str) -> Result<String, ConfigurationError> {
        let url = Url::parse(value).map_err(|reason| ConfigurationError::InvalidTrustedOrigin {
            value: value.to_owned(),
            reason,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url.origin().ascii_serialization()),
            scheme => Err(ConfigurationError::UnsupportedScheme {
                value: value.to_owned(),
                scheme: scheme.to_owned(),
            }),
        }
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

#[cfg(test)]
#[path = "trusted_origins_test.rs"]
mod trusted_origins_test;
