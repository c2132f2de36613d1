//! Run configuration resolved from the process environment.
//!
//! `CHANGES_URL` and `FILES_INPUT` are the primary configuration
//! surface; CLI flags may override them for local runs. Blank values
//! count as missing.

use crate::error::{Error, Result};

pub const CHANGES_URL_VAR: &str = "CHANGES_URL";
pub const FILES_INPUT_VAR: &str = "FILES_INPUT";

#[derive(Debug, Clone)]
pub struct Config {
    /// URL serving newline-delimited old/new class-name pairs.
    pub changes_url: String,
    /// Comma-separated file paths, directories, or glob patterns.
    pub files_input: String,
}

impl Config {
    /// Resolves configuration from explicit overrides, falling back to
    /// the environment for anything not supplied.
    pub fn resolve(changes_url: Option<String>, files_input: Option<String>) -> Result<Self> {
        let changes_url = resolve_value(changes_url, CHANGES_URL_VAR)?;
        let files_input = resolve_value(files_input, FILES_INPUT_VAR)?;

        Ok(Self {
            changes_url,
            files_input,
        })
    }
}

fn resolve_value(override_value: Option<String>, env_var: &str) -> Result<String> {
    let value = match override_value {
        Some(v) => v,
        None => std::env::var(env_var).unwrap_or_default(),
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::config_missing_key(env_var));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn explicit_values_bypass_environment() {
        let config = Config::resolve(
            Some("http://example.test/changes.txt".to_string()),
            Some("styles/,extra.css".to_string()),
        )
        .unwrap();

        assert_eq!(config.changes_url, "http://example.test/changes.txt");
        assert_eq!(config.files_input, "styles/,extra.css");
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let config = Config::resolve(
            Some("  http://example.test/changes.txt  ".to_string()),
            Some(" styles/ ".to_string()),
        )
        .unwrap();

        assert_eq!(config.changes_url, "http://example.test/changes.txt");
        assert_eq!(config.files_input, "styles/");
    }

    // Single test for every env-touching case: CHANGES_URL/FILES_INPUT
    // are process-global, so splitting these across test functions
    // would race under the parallel test runner.
    #[test]
    fn environment_is_the_fallback_source() {
        std::env::remove_var(CHANGES_URL_VAR);
        std::env::remove_var(FILES_INPUT_VAR);

        let err = Config::resolve(None, Some("styles/".to_string())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissingKey);
        assert_eq!(err.details["key"], CHANGES_URL_VAR);

        std::env::set_var(CHANGES_URL_VAR, "http://example.test/changes.txt");
        std::env::set_var(FILES_INPUT_VAR, "styles/");

        let config = Config::resolve(None, None).unwrap();
        assert_eq!(config.changes_url, "http://example.test/changes.txt");
        assert_eq!(config.files_input, "styles/");

        let overridden =
            Config::resolve(Some("http://other.test/list.txt".to_string()), None).unwrap();
        assert_eq!(overridden.changes_url, "http://other.test/list.txt");

        std::env::remove_var(CHANGES_URL_VAR);
        std::env::remove_var(FILES_INPUT_VAR);
    }

    #[test]
    fn blank_override_is_missing() {
        let err = Config::resolve(
            Some("   ".to_string()),
            Some("styles/".to_string()),
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ConfigMissingKey);
        assert_eq!(err.details["key"], CHANGES_URL_VAR);
    }
}
