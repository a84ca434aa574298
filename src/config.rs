use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load from the environment (after `dotenvy` has populated it).
    /// Defaults are suitable for local runs.
    pub fn load() -> anyhow::Result<Self> {
        let host = std::env::var("AGRIADVISOR_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("AGRIADVISOR_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("AGRIADVISOR_PORT must be a port number, got '{raw}'"))?,
            Err(_) => 8080,
        };

        Ok(Self {
            server: ServerConfig { host, port },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
        }
    }
}
