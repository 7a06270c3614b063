pub mod cargo_env {
    pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
}

pub mod api {
    pub const DEFAULT_API_URL: &str = "https://api.withkeystone.com";
    pub const API_KEY_HEADER: &str = "X-API-Key";
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}
