use std::env;

/// Port used when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 8080;
/// Interface used when `ADDRESS` is unset.
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";

/// Listen settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve the configuration from `ADDRESS` and `PORT`.
    pub fn from_env() -> Self {
        Self::from_values(env::var("ADDRESS").ok(), env::var("PORT").ok())
    }

    fn from_values(address: Option<String>, port: Option<String>) -> Self {
        let address = address
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let port = match port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT value `{value}`, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
        };

        Self { address, port }
    }

    /// URL of the liveness endpoint on the local instance.
    pub fn health_url(&self) -> String {
        format!("http://localhost:{}/healthz", self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
