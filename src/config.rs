use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub site_title: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let site_title = env::var("SITE_TITLE")
            .ok()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| "Disco".to_string());

        Ok(Config {
            service_port,
            service_host,
            site_title,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Site title: {}", self.site_title);
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // Tests below mutate process-wide environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        unsafe {
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
            env::remove_var("SITE_TITLE");
        }
        guard
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
            env::set_var("SITE_TITLE", "Disco Docs");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.site_title, "Disco Docs");
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.site_title, "Disco");
    }

    #[test]
    fn test_blank_title_falls_back_to_default() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SITE_TITLE", "   ");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.site_title, "Disco");
    }

    #[test]
    fn test_invalid_port() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
    }
}
