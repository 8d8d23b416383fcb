use std::{collections::HashMap, time::Duration};

use confluence_domain_handlers::config::app_config::{AppConfig, ConfigError};

fn lookup_from(entries: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |name| values.get(name).cloned()
}

#[test]
fn from_lookup_reads_required_values_and_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("CONFLUENCE_BASE_URL", "https://acme.atlassian.net/wiki/"),
        ("CONFLUENCE_API_TOKEN", "token"),
    ]))
    .expect("valid config");

    assert_eq!(config.confluence_base_url, "https://acme.atlassian.net/wiki");
    assert_eq!(config.confluence_api_token, "token");
    assert_eq!(config.confluence_email, None);
    assert_eq!(config.port, 8081);
    assert_eq!(config.request_timeout, Duration::from_secs(30));
}

#[test]
fn from_lookup_reads_optional_overrides() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("CONFLUENCE_BASE_URL", "http://localhost:8090"),
        ("CONFLUENCE_API_TOKEN", "token"),
        ("CONFLUENCE_EMAIL", "bot@acme.io"),
        ("CONFLUENCE_TIMEOUT_SECONDS", "5"),
        ("PORT", "9000"),
    ]))
    .expect("valid config");

    assert_eq!(config.confluence_email.as_deref(), Some("bot@acme.io"));
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert_eq!(config.port, 9000);
}

#[test]
fn from_lookup_fails_when_base_url_is_missing() {
    let result = AppConfig::from_lookup(lookup_from(&[("CONFLUENCE_API_TOKEN", "token")]));

    assert!(matches!(
        result,
        Err(ConfigError::MissingVariable("CONFLUENCE_BASE_URL"))
    ));
}

#[test]
fn from_lookup_treats_blank_token_as_missing() {
    let result = AppConfig::from_lookup(lookup_from(&[
        ("CONFLUENCE_BASE_URL", "https://acme.atlassian.net/wiki"),
        ("CONFLUENCE_API_TOKEN", "   "),
    ]));

    assert!(matches!(
        result,
        Err(ConfigError::MissingVariable("CONFLUENCE_API_TOKEN"))
    ));
}

#[test]
fn from_lookup_rejects_malformed_values() {
    let not_a_url = AppConfig::from_lookup(lookup_from(&[
        ("CONFLUENCE_BASE_URL", "acme wiki"),
        ("CONFLUENCE_API_TOKEN", "token"),
    ]));
    assert!(matches!(
        not_a_url,
        Err(ConfigError::InvalidVariable {
            name: "CONFLUENCE_BASE_URL",
            ..
        })
    ));

    let wrong_scheme = AppConfig::from_lookup(lookup_from(&[
        ("CONFLUENCE_BASE_URL", "ftp://acme.io"),
        ("CONFLUENCE_API_TOKEN", "token"),
    ]));
    assert!(matches!(
        wrong_scheme,
        Err(ConfigError::InvalidVariable {
            name: "CONFLUENCE_BASE_URL",
            ..
        })
    ));

    let zero_timeout = AppConfig::from_lookup(lookup_from(&[
        ("CONFLUENCE_BASE_URL", "https://acme.atlassian.net/wiki"),
        ("CONFLUENCE_API_TOKEN", "token"),
        ("CONFLUENCE_TIMEOUT_SECONDS", "0"),
    ]));
    assert!(matches!(
        zero_timeout,
        Err(ConfigError::InvalidVariable {
            name: "CONFLUENCE_TIMEOUT_SECONDS",
            ..
        })
    ));

    let bad_port = AppConfig::from_lookup(lookup_from(&[
        ("CONFLUENCE_BASE_URL", "https://acme.atlassian.net/wiki"),
        ("CONFLUENCE_API_TOKEN", "token"),
        ("PORT", "http"),
    ]));
    assert!(matches!(
        bad_port,
        Err(ConfigError::InvalidVariable { name: "PORT", .. })
    ));
}
