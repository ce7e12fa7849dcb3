use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(AppConfig {
            host,
            port,
            environment,
            log_level,
        })
    }

    /// Colored, target-annotated log lines only for local development.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("ENVIRONMENT");
        env::remove_var("LOG_LEVEL");

        let config = AppConfig::from_env().unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert!(config.is_development());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_unparseable_port_falls_back() {
        env::set_var("PORT", "not-a-port");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 3000);

        env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_production_environment_is_not_development() {
        env::set_var("ENVIRONMENT", "production");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.environment, "production");
        assert!(!config.is_development());

        env::remove_var("ENVIRONMENT");
    }
}
