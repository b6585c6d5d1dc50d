//! Logging configuration, read from the process environment.
//!
//! - `RUST_LOG`: filter directives (default `warn`).
//! - `LOG_FORMAT`: `json` (default) or `pretty`.

/// Filter used when `RUST_LOG` is unset or empty.
pub const DEFAULT_FILTER: &str = "warn";

/// Output encoding of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value (case-insensitive). `None` if unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" | "text" => Some(Self::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives.
    pub filter: String,
    pub format: LogFormat,
    /// Raw `LOG_FORMAT` value that could not be parsed (reported once logging is up).
    pub rejected_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var("LOG_FORMAT").ok().as_deref(),
        )
    }

    /// Build from raw variable values (`None` = unset).
    pub fn from_vars(rust_log: Option<&str>, log_format: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = rust_log.map(str::trim).filter(|f| !f.is_empty()) {
            config.filter = filter.to_string();
        }

        if let Some(raw) = log_format {
            match LogFormat::parse(raw) {
                Some(format) => config.format = format,
                None => config.rejected_format = Some(raw.to_string()),
            }
        }

        config
    }
}
