//! Build-time configuration of the console.

/// Used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// `localStorage` key holding the bearer token written by the login page.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Base URL of the REST API, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("API_BASE_URL"))
}

fn normalize_base_url(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}
