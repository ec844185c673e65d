// src/config.rs
use std::net::SocketAddr;
use std::path::PathBuf;

/// Site-wide tag display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSettings {
    pub issues_use_colors: bool,
    pub issues_sort_by: String,
    pub issues_sort_order: String,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            issues_use_colors: true,
            issues_sort_by: "name".to_string(),
            issues_sort_order: "asc".to_string(),
        }
    }
}

impl TagSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            issues_use_colors: std::env::var("ISSUES_USE_COLORS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.issues_use_colors),
            // Kept raw; unknown values are reported when a list is rendered.
            issues_sort_by: std::env::var("ISSUES_SORT_BY")
                .unwrap_or(defaults.issues_sort_by),
            issues_sort_order: std::env::var("ISSUES_SORT_ORDER")
                .unwrap_or(defaults.issues_sort_order),
        }
    }
}

/// Reads a boolean-ish setting: `true`/`yes`/`on` or a positive integer.
pub fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => true,
        _ => value.parse::<i64>().map(|n| n > 0).unwrap_or(false),
    }
}

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub tags_file: PathBuf,
    pub settings: TagSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            host: std::env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            tags_file: std::env::var("TAGS_FILE")
                .unwrap_or_else(|_| "tags.json".to_string())
                .into(),
            settings: TagSettings::from_env(),
        })
    }

    pub fn server_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("7"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" Yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("-1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_server_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            tags_file: PathBuf::from("tags.json"),
            settings: TagSettings::default(),
        };
        assert_eq!(config.server_addr().unwrap().to_string(), "127.0.0.1:8080");
    }
}
