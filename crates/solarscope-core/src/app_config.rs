#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where solar insights come from.
///
/// `Live` calls the solar provider; `Mock` returns a fixed placeholder record
/// without touching the network. The two are never combined in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarMode {
    Live,
    Mock,
}

impl std::fmt::Display for SolarMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolarMode::Live => write!(f, "live"),
            SolarMode::Mock => write!(f, "mock"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub maps_api_key: Option<String>,
    pub solar_api_key: Option<String>,
    pub solar_mode: SolarMode,
    pub verify_credentials: bool,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub maps_base_url: String,
    pub solar_base_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "maps_api_key",
                &self.maps_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "solar_api_key",
                &self.solar_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("solar_mode", &self.solar_mode)
            .field("verify_credentials", &self.verify_credentials)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("maps_base_url", &self.maps_base_url)
            .field("solar_base_url", &self.solar_base_url)
            .finish()
    }
}
