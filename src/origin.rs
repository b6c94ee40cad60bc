use crate::util::{equals_ignore_case, split_host_port};
use url::Url;

/// Returns `true` when the `Origin` header names the same host the request was sent to.
///
/// Hosts compare ASCII case-insensitively. A `Host` header without a port matches
/// on host alone; one with a port must also agree with the origin's effective port.
/// Unparsable origins, origins without a host (`null`, `file://`) and a missing
/// `Host` header never match.
pub fn origin_matches_host(origin: &str, host: Option<&str>) -> bool {
    let Some(host) = host.filter(|value| !value.is_empty()) else {
        return false;
    };
    let Ok(url) = Url::parse(origin) else {
        return false;
    };
    let Some(origin_host) = url.host_str() else {
        return false;
    };

    let (request_host, request_port) = split_host_port(host);
    if !equals_ignore_case(origin_host, request_host) {
        return false;
    }

    match request_port {
        None => true,
        Some(port) => port.parse::<u16>().ok() == url.port_or_known_default(),
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
