use regex::Regex;
use std::env;

use crate::core::filter::{DomainFilter, ZoneIdFilter};
use crate::error::Error;
use crate::providers::efficientip::ServerConfig;

#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub domain_filter: Vec<String>,
    pub exclude_domains: Vec<String>,
    pub regex_domain_filter: Option<Regex>,
    pub regex_domain_exclusion: Option<Regex>,
    pub zone_id_filter: Vec<String>,
    pub dry_run: bool,
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, Error> {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::ConfigError(format!("{key} is not set")))
}

fn list(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Vec<String> {
    lookup(key)
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> Result<bool, Error> {
    match lookup(key).as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(Error::ConfigError(format!("{key}: invalid boolean '{v}'"))),
    }
}

fn pattern(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Regex>, Error> {
    match lookup(key).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => Regex::new(&v)
            .map(Some)
            .map_err(|e| Error::ConfigError(format!("{key}: {e}"))),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let port = match lookup("EFFICIENTIP_PORT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| Error::ConfigError(format!("EFFICIENTIP_PORT: invalid port '{v}'")))?,
            None => 443,
        };

        Ok(Config {
            server: ServerConfig {
                host: required(&lookup, "EFFICIENTIP_HOST")?,
                port,
                username: required(&lookup, "EFFICIENTIP_USERNAME")?,
                password: required(&lookup, "EFFICIENTIP_PASSWORD")?,
                ssl_verify: flag(&lookup, "EFFICIENTIP_SSL_VERIFY", true)?,
            },
            domain_filter: list(&lookup, "DOMAIN_FILTER"),
            exclude_domains: list(&lookup, "EXCLUDE_DOMAINS"),
            regex_domain_filter: pattern(&lookup, "REGEX_DOMAIN_FILTER")?,
            regex_domain_exclusion: pattern(&lookup, "REGEX_DOMAIN_EXCLUSION")?,
            zone_id_filter: list(&lookup, "ZONE_ID_FILTER"),
            dry_run: flag(&lookup, "DRY_RUN", false)?,
        })
    }

    pub fn domain_filter(&self) -> DomainFilter {
        if self.regex_domain_filter.is_some() || self.regex_domain_exclusion.is_some() {
            DomainFilter::with_regex(
                self.regex_domain_filter.clone(),
                self.regex_domain_exclusion.clone(),
            )
        } else {
            DomainFilter::with_exclusions(&self.domain_filter, &self.exclude_domains)
        }
    }

    pub fn zone_id_filter(&self) -> ZoneIdFilter {
        ZoneIdFilter::new(&self.zone_id_filter)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const BASE: [(&str, &str); 3] = [
        ("EFFICIENTIP_HOST", "sds.example.com"),
        ("EFFICIENTIP_USERNAME", "ipmadmin"),
        ("EFFICIENTIP_PASSWORD", "secret"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&BASE)).unwrap();
        assert_eq!(config.server.host, "sds.example.com");
        assert_eq!(config.server.port, 443);
        assert!(config.server.ssl_verify);
        assert!(!config.dry_run);
        assert!(config.domain_filter.is_empty());
        assert!(!config.domain_filter().is_configured());
        assert!(!config.zone_id_filter().is_configured());
    }

    #[test]
    fn test_full_configuration() {
        let mut pairs = BASE.to_vec();
        pairs.extend([
            ("EFFICIENTIP_PORT", "8443"),
            ("EFFICIENTIP_SSL_VERIFY", "false"),
            ("DOMAIN_FILTER", "example.com, example.org"),
            ("EXCLUDE_DOMAINS", "internal.example.com"),
            ("ZONE_ID_FILTER", "12,14"),
            ("DRY_RUN", "true"),
        ]);
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.server.port, 8443);
        assert!(!config.server.ssl_verify);
        assert!(config.dry_run);
        assert_eq!(config.domain_filter, vec!["example.com", "example.org"]);
        assert_eq!(config.zone_id_filter, vec!["12", "14"]);

        let filter = config.domain_filter();
        assert!(filter.matches("www.example.org"));
        assert!(!filter.matches("internal.example.com"));
        assert!(config.zone_id_filter().matches("14"));
    }

    #[test]
    fn test_regex_filter_takes_precedence() {
        let mut pairs = BASE.to_vec();
        pairs.extend([
            ("DOMAIN_FILTER", "example.org"),
            ("REGEX_DOMAIN_FILTER", r"\.example\.com$"),
        ]);
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        let filter = config.domain_filter();
        assert!(filter.matches("a.example.com"));
        assert!(!filter.matches("a.example.org"));
    }

    #[test]
    fn test_missing_required_values() {
        let result = Config::from_lookup(lookup_from(&BASE[..2]));
        assert_matches!(
            result,
            Err(Error::ConfigError(msg)) if msg.contains("EFFICIENTIP_PASSWORD")
        );
    }

    #[test]
    fn test_invalid_values() {
        let mut pairs = BASE.to_vec();
        pairs.push(("EFFICIENTIP_PORT", "https"));
        assert_matches!(Config::from_lookup(lookup_from(&pairs)), Err(Error::ConfigError(_)));

        let mut pairs = BASE.to_vec();
        pairs.push(("DRY_RUN", "maybe"));
        assert_matches!(Config::from_lookup(lookup_from(&pairs)), Err(Error::ConfigError(_)));

        let mut pairs = BASE.to_vec();
        pairs.push(("REGEX_DOMAIN_FILTER", "(unclosed"));
        assert_matches!(Config::from_lookup(lookup_from(&pairs)), Err(Error::ConfigError(_)));
    }

    #[test]
    fn test_mock_default() {
        let config = Config::default();
        assert_eq!(config.server.port, 443);
        assert!(config.domain_filter().matches("example.com"));
    }
}
