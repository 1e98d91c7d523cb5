use std::net::SocketAddr;

use anyhow::{Context, Result, bail};

use crate::core::pagination::DEFAULT_PAGE_ROWS;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Rows per list page. Fixed for the life of the process.
    pub page_rows: i64,
    /// Start with the six demo users instead of an empty directory.
    pub seed: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_string("USERDESK_BIND_ADDR", "127.0.0.1:5000")
            .parse::<SocketAddr>()
            .context("USERDESK_BIND_ADDR must be a valid host:port")?;

        let page_rows = env_string("USERDESK_PAGE_ROWS", &DEFAULT_PAGE_ROWS.to_string())
            .parse::<i64>()
            .context("USERDESK_PAGE_ROWS must be an integer")?;

        let seed = env_string("USERDESK_SEED", "true")
            .parse::<bool>()
            .context("USERDESK_SEED must be true or false")?;

        let config = Self {
            bind_addr,
            page_rows,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_rows <= 0 {
            bail!("page rows must be greater than 0, got {}", self.page_rows);
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            page_rows: DEFAULT_PAGE_ROWS,
            seed: true,
        }
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_rows, 3);
        assert_eq!(config.bind_addr.port(), 5000);
    }

    #[test]
    fn zero_rows_is_rejected() {
        let config = AppConfig {
            page_rows: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
