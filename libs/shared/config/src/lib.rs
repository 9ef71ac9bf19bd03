use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_address = env::var("CLINIC_BIND_ADDRESS").unwrap_or_else(|_| {
            warn!("CLINIC_BIND_ADDRESS not set, using 0.0.0.0");
            "0.0.0.0".to_string()
        });

        let port = env::var("CLINIC_PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or_else(|| {
                warn!("CLINIC_PORT not set or invalid, using 3000");
                3000
            });

        Self { bind_address, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_env_missing() {
        env::remove_var("CLINIC_BIND_ADDRESS");
        env::remove_var("CLINIC_PORT");
        let config = AppConfig::from_env();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 3000);
    }
}
