use std::{env, str::FromStr};

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub enum StorageConfig {
    Postgres(DatabaseConfig),
    Memory,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match lookup("STORAGE_BACKEND")
            .unwrap_or_else(|| "postgres".to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "postgres" => StorageConfig::Postgres(DatabaseConfig {
                url: lookup("DB_URL").ok_or_else(|| {
                    AppError::ConfigError(
                        "DB_URL must be set when STORAGE_BACKEND is postgres".to_string(),
                    )
                })?,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            }),
            "memory" => StorageConfig::Memory,
            other => {
                return Err(AppError::ConfigError(format!(
                    "Unknown STORAGE_BACKEND value: {}",
                    other
                )));
            }
        };

        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&lookup, "PORT", 5000)?,
                max_body_size: parse_or(&lookup, "MAX_BODY_SIZE", 1_048_576)?,
            },
            storage,
            cors: CorsConfig {
                allowed_origins: lookup("FRONTEND_URL")
                    .unwrap_or_else(|| "http://localhost:5173".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("Invalid {} value", key))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_with_database_url() {
        let cfg = config(&[("DB_URL", "postgres://localhost/products")]).unwrap();

        assert_eq!(cfg.server_address(), "0.0.0.0:5000");
        assert_eq!(cfg.server.max_body_size, 1_048_576);
        assert_eq!(cfg.cors.allowed_origins, vec!["http://localhost:5173"]);
        match cfg.storage {
            StorageConfig::Postgres(db) => {
                assert_eq!(db.url, "postgres://localhost/products");
                assert_eq!(db.max_connections, 10);
            }
            StorageConfig::Memory => panic!("expected postgres storage"),
        }
    }

    #[test]
    fn postgres_requires_database_url() {
        assert!(matches!(config(&[]), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn memory_backend_needs_no_database() {
        let cfg = config(&[("STORAGE_BACKEND", "Memory"), ("PORT", "8080")]).unwrap();
        assert!(matches!(cfg.storage, StorageConfig::Memory));
        assert_eq!(cfg.server.port, 8080);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("STORAGE_BACKEND", "mongo")]).is_err());
        assert!(config(&[("STORAGE_BACKEND", "memory"), ("PORT", "http")]).is_err());
        assert!(
            config(&[("DB_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", "-1")]).is_err()
        );
    }

    #[test]
    fn splits_cors_origins() {
        let cfg = config(&[
            ("STORAGE_BACKEND", "memory"),
            ("FRONTEND_URL", "http://a.test, http://b.test,"),
        ])
        .unwrap();
        assert_eq!(cfg.cors.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }
}
