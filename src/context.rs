/// Read-only view of the request metadata the guard looks at.
///
/// Header values are taken verbatim from the transport; absent headers are `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub host: Option<&'a str>,
    pub origin: Option<&'a str>,
    pub sec_fetch_site: Option<&'a str>,
}
