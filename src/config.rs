use log::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/auth";

pub struct SmokeConfig {
    pub base_url: String,
}

impl SmokeConfig {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("AUTH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        debug!("auth service base url: {}", base_url);
        Self { base_url }
    }
}
