use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(base_url: String, timeout: Duration) -> Config {
        Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}
