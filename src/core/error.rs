use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigMissingKey,

    FetchRequestFailed,
    FetchBadStatus,

    GlobInvalidPattern,
    GlobReadFailed,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigMissingKey => "config.missing_key",

            ErrorCode::FetchRequestFailed => "fetch.request_failed",
            ErrorCode::FetchBadStatus => "fetch.bad_status",

            ErrorCode::GlobInvalidPattern => "glob.invalid_pattern",
            ErrorCode::GlobReadFailed => "glob.read_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMissingKeyDetails {
    pub key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequestFailedDetails {
    pub url: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchBadStatusDetails {
    pub url: String,
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobInvalidPatternDetails {
    pub pattern: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobReadFailedDetails {
    pub pattern: String,
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn config_missing_key(key: impl Into<String>) -> Self {
        let key = key.into();
        let details = serde_json::to_value(ConfigMissingKeyDetails { key: key.clone() })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(
            ErrorCode::ConfigMissingKey,
            format!("Missing required configuration: {}", key),
            details,
        )
        .with_hint(format!("Set the {} environment variable", key))
    }

    pub fn fetch_request_failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        let details = serde_json::to_value(FetchRequestFailedDetails {
            url: url.into(),
            error: error.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::FetchRequestFailed,
            "Failed to fetch change list",
            details,
        )
    }

    pub fn fetch_bad_status(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let details = serde_json::to_value(FetchBadStatusDetails {
            url: url.into(),
            status,
            body: body.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::FetchBadStatus,
            format!("Change list fetch returned HTTP {}", status),
            details,
        )
    }

    pub fn glob_invalid_pattern(pattern: impl Into<String>, error: impl Into<String>) -> Self {
        let details = serde_json::to_value(GlobInvalidPatternDetails {
            pattern: pattern.into(),
            error: error.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::GlobInvalidPattern, "Invalid glob pattern", details)
    }

    pub fn glob_read_failed(
        pattern: impl Into<String>,
        path: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        let details = serde_json::to_value(GlobReadFailedDetails {
            pattern: pattern.into(),
            path: path.into(),
            error: error.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::GlobReadFailed,
            "Failed to read path during glob expansion",
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let error: String = error.into();
        let details = serde_json::json!({
            "error": error,
            "context": context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
