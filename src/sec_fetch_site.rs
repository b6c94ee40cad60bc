use crate::constants::sec_fetch_site;

/// Parsed value of the browser-generated `Sec-Fetch-Site` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecFetchSite<'a> {
    SameOrigin,
    SameSite,
    CrossSite,
    None,
    Other(&'a str),
}

impl<'a> SecFetchSite<'a> {
    /// An empty header value is treated the same as a missing header.
    pub fn parse(value: Option<&'a str>) -> Option<Self> {
        let value = value?;
        let site = match value {
            "" => return None,
            sec_fetch_site::SAME_ORIGIN => Self::SameOrigin,
            sec_fetch_site::SAME_SITE => Self::SameSite,
            sec_fetch_site::CROSS_SITE => Self::CrossSite,
            sec_fetch_site::NONE => Self::None,
            other => Self::Other(other),
        };
        Some(site)
    }

    /// `same-origin` and `none` prove the request came from the site itself
    /// or from the browser UI.
    pub fn is_trusted(&self) -> bool {
        matches!(self, Self::SameOrigin | Self::None)
    }
}

#[cfg(test)]
#[path = "sec_fetch_site_test.rs"]
mod sec_fetch_site_test;
