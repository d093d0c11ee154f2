use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub store_url: String,
    pub store_timeout_secs: Option<u64>,

    pub jwt_secret: String,
    pub jwt_exp_secs: Option<u64>,

    pub bank_name: Option<String>,
    pub agency: Option<String>,
    pub initial_balance: Option<f64>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(3000)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs.unwrap_or(10))
    }

    /// Lifetime of access tokens, one day unless overridden.
    pub fn jwt_exp(&self) -> u64 {
        self.jwt_exp_secs.unwrap_or(60 * 60 * 24)
    }

    pub fn bank_name(&self) -> &str {
        self.bank_name.as_deref().unwrap_or("Banco Demo")
    }

    pub fn agency(&self) -> &str {
        self.agency.as_deref().unwrap_or("0001")
    }

    pub fn initial_balance(&self) -> f64 {
        self.initial_balance.unwrap_or(0.0)
    }
}
