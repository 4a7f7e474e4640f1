use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::EndpointConfig;

/// Errors raised while loading the endpoint configuration.
///
/// All of these are fatal: the agent reports the error once and exits
/// without entering the check loop.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in configuration")]
    Parse(#[from] serde_yaml::Error),

    #[error("the YAML configuration must be a sequence of endpoint definitions")]
    NotASequence,
}

/// Load endpoint definitions from a YAML file.
pub fn load_endpoints(path: &Path) -> Result<Vec<EndpointConfig>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_endpoints(&raw)
}

/// Parse a YAML document into endpoint definitions.
///
/// The top level must be a sequence; any other shape is rejected before the
/// individual entries are deserialized.
pub fn parse_endpoints(raw: &str) -> Result<Vec<EndpointConfig>, ConfigError> {
    let value: serde_yaml::Value = serde_yaml::from_str(raw)?;
    if !value.is_sequence() {
        return Err(ConfigError::NotASequence);
    }
    Ok(serde_yaml::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_sequence_of_endpoints() {
        let yaml = r#"
            - url: https://example.com/health
            - url: https://api.example.com/status
              method: HEAD
        "#;

        let endpoints = parse_endpoints(yaml).expect("valid config rejected");
        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints[0].url, "https://example.com/health");
        assert_eq!(endpoints[0].method, "GET");
        assert_eq!(endpoints[1].method, "HEAD");
    }

    #[test]
    fn rejects_a_top_level_mapping() {
        let yaml = r#"
            endpoints:
              - url: https://example.com
        "#;

        let err = parse_endpoints(yaml).expect_err("mapping accepted");
        assert!(matches!(err, ConfigError::NotASequence));
    }

    #[test]
    fn rejects_a_top_level_scalar() {
        let err = parse_endpoints("just a string").expect_err("scalar accepted");
        assert!(matches!(err, ConfigError::NotASequence));
    }

    #[test]
    fn rejects_invalid_yaml() {
        let err = parse_endpoints("- url: [unclosed").expect_err("broken YAML accepted");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_an_entry_without_a_url() {
        let yaml = "- method: GET";
        let err = parse_endpoints(yaml).expect_err("entry without url accepted");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_endpoints(Path::new("/nonexistent/upwatch-config.yml"))
            .expect_err("missing file accepted");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
