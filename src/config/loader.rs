//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SteerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Errors surfaced while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and semantically validate a TOML configuration document.
pub fn parse_config(content: &str) -> Result<SteerConfig, ConfigError> {
    let config: SteerConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<SteerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    #[test]
    fn parses_full_document() {
        let content = r#"
            [observability]
            log_filter = "vip_steer=debug"

            [[vip]]
            name = "web-80"
            address = "10.0.0.100"

            [[vip.backend]]
            address = "192.168.1.10"
            port = 8080

            [[vip.backend]]
            address = "192.168.1.11"

            [[vip]]
            name = "drained"
            address = "10.0.0.101"
        "#;

        let config = parse_config(content).unwrap();
        assert_eq!(config.observability.log_filter, "vip_steer=debug");
        assert_eq!(config.vips.len(), 2);

        let web = &config.vips[0];
        assert_eq!(web.name, "web-80");
        assert_eq!(web.address, "10.0.0.100".parse::<IpAddr>().unwrap());
        assert_eq!(web.backends.len(), 2);
        assert_eq!(web.backends[0].port, Some(8080));
        assert_eq!(web.backends[1].port, None);

        assert!(config.vips[1].backends.is_empty());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.vips.is_empty());
        assert_eq!(config.observability.log_filter, "vip_steer=info");
    }

    #[test]
    fn malformed_address_is_a_parse_error() {
        let content = r#"
            [[vip]]
            name = "bad"
            address = "999.999.999.999"
        "#;
        assert!(matches!(
            parse_config(content),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn semantic_problems_are_validation_errors() {
        let content = r#"
            [[vip]]
            name = "a"
            address = "10.0.0.100"

            [[vip]]
            name = "b"
            address = "10.0.0.100"
        "#;
        match parse_config(content) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_config(Path::new("/nonexistent/vip-steer.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
