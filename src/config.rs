use std::env;

/// Environment variable holding the upload endpoint URL.
pub const ENDPOINT_ENV: &str = "DOCX_UPLOADER_API_URL";

/// Development default used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/upload-docx";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Reads the endpoint from the environment once at startup. Unset or
    /// blank values fall back to the development default.
    pub fn from_env() -> Self {
        Self {
            endpoint: resolve_endpoint(env::var(ENDPOINT_ENV).ok().as_deref()),
        }
    }
}

fn resolve_endpoint(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}
