pub(crate) fn equals_ignore_case(a: &str, b: &str) -> bool {
    a == b || (a.is_ascii() && b.is_ascii() && a.eq_ignore_ascii_case(b))
}

/// Splits `host[:port]` into its parts. Bracketed IPv6 literals keep their brackets.
pub(crate) fn split_host_port(authority: &str) -> (&str, Option<&str>) {
    let port_separator = if authority.starts_with('[') {
        authority
            .find(']')
            .and_then(|end| authority[end + 1..].strip_prefix(':').map(|_| end + 1))
    } else {
        authority.rfind(':')
    };

    match port_separator {
        Some(idx) => (&authority[..idx], Some(&authority[idx + 1..])),
        None => (authority, None),
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
