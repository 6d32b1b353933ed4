use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_VARIANT_URL: &str = "https://rest.ensembl.org/variation/human/";
pub const DEFAULT_VEP_URL: &str = "https://rest.ensembl.org/vep/human/id/";
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub variant_url: String,
    pub vep_url: String,
    pub request_timeout_secs: u64,
    pub cache_capacity: usize,
    pub log_level: String,
    pub server_host: String,
    pub server_port: u16,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源构建配置，未设置的键使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let cache_capacity = non_zero(
            "CACHE_CAPACITY",
            parse_or(&lookup, "CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY)?,
        )?;
        let request_timeout_secs =
            non_zero("REQUEST_TIMEOUT", parse_or(&lookup, "REQUEST_TIMEOUT", 10u64)?)?;

        Ok(Config {
            variant_url: text("ENSEMBL_VARIANT_URL", DEFAULT_VARIANT_URL),
            vep_url: text("ENSEMBL_VEP_URL", DEFAULT_VEP_URL),
            request_timeout_secs,
            cache_capacity,
            log_level: text("LOG_LEVEL", "info").to_lowercase(),
            server_host: text("SERVER_HOST", "0.0.0.0"),
            server_port: parse_or(&lookup, "SERVER_PORT", 5000)?,
            debug: parse_flag(&lookup, "APP_DEBUG", false)?,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

// 容量和超时为 0 时服务不可用
fn non_zero<T>(key: &'static str, value: T) -> Result<T, ConfigError>
where
    T: Default + PartialEq + ToString,
{
    if value == T::default() {
        Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        })
    } else {
        Ok(value)
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.variant_url, DEFAULT_VARIANT_URL);
        assert_eq!(config.vep_url, DEFAULT_VEP_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.cache_capacity, 50);
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.log_level, "info");
        assert!(!config.debug);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("REQUEST_TIMEOUT", "3"),
            ("LOG_LEVEL", "DEBUG"),
            ("APP_DEBUG", "True"),
            ("SERVER_PORT", "8080"),
        ])
        .unwrap();
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.log_level, "debug");
        assert!(config.debug);
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn rejects_garbage_numbers() {
        let err = config_from(&[("REQUEST_TIMEOUT", "ten")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "REQUEST_TIMEOUT", .. }));
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(config_from(&[("CACHE_CAPACITY", "0")]).is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = config_from(&[("REQUEST_TIMEOUT", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "REQUEST_TIMEOUT", .. }));
    }
}
