pub mod header {
    pub const HOST: &str = "Host";
    pub const ORIGIN: &str = "Origin";
    pub const SEC_FETCH_SITE: &str = "Sec-Fetch-Site";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";

    /// Methods that never mutate server state and therefore bypass the guard.
    pub const SAFE: [&str; 3] = [GET, HEAD, OPTIONS];
}

pub mod sec_fetch_site {
    pub const CROSS_SITE: &str = "cross-site";
    pub const NONE: &str = "none";
    pub const SAME_ORIGIN: &str = "same-origin";
    pub const SAME_SITE: &str = "same-site";
}

pub mod rejection {
    pub const STATUS: u16 = 403;
    pub const BODY: &str = "Forbidden\n";
}
