use crate::date_window::is_date_format;
use std::env;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/trends.db?mode=rwc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub earliest_date: Option<String>,
    /// Route prefix, normalised to `""` or `/segment` without a trailing slash.
    pub base_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            earliest_date: None,
            base_path: String::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let earliest_date = lookup("EARLIEST_DATE")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .and_then(|value| {
                if is_date_format(&value) {
                    Some(value)
                } else {
                    warn!("ignoring EARLIEST_DATE={value:?}: expected YYYY-MM-DD");
                    None
                }
            });

        let base_path = normalize_base_path(lookup("APP_BASE_PATH").as_deref().unwrap_or(""));

        Self {
            port,
            database_url,
            earliest_date,
            base_path,
        }
    }
}

pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_all_settings() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("EARLIEST_DATE", "2026-01-01"),
            ("APP_BASE_PATH", "/trends/"),
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.earliest_date.as_deref(), Some("2026-01-01"));
        assert_eq!(config.base_path, "/trends");
    }

    #[test]
    fn bad_port_and_earliest_date_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("EARLIEST_DATE", "yesterday"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.earliest_date, None);
    }

    #[test]
    fn empty_earliest_date_counts_as_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[("EARLIEST_DATE", "")]));
        assert_eq!(config.earliest_date, None);
    }

    #[test]
    fn base_path_normalisation() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("trends"), "/trends");
        assert_eq!(normalize_base_path("/trends/"), "/trends");
    }
}
