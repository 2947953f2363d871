use std::str::FromStr;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// How rental agreements are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The fixed-format customer report
    Report,
    /// One pretty-printed JSON summary per agreement
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" | "text" => Ok(OutputFormat::Report),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

pub struct Config {
    pub log_format: LogFormat,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var("TOOLTIME_LOG_FORMAT").ok().as_deref(),
            std::env::var("TOOLTIME_OUTPUT").ok().as_deref(),
        )
    }

    /// Builds the config from raw values. Missing or unrecognized values fall
    /// back to text logs and report output.
    pub fn from_vars(log_format: Option<&str>, output: Option<&str>) -> Self {
        Self {
            log_format: log_format
                .and_then(|v| v.parse().ok())
                .unwrap_or(LogFormat::Text),
            output: output
                .and_then(|v| v.parse().ok())
                .unwrap_or(OutputFormat::Report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.output, OutputFormat::Report);
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_vars(Some("JSON"), Some(" json "));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_unrecognized_values_fall_back() {
        let config = Config::from_vars(Some("xml"), Some("pdf"));
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.output, OutputFormat::Report);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
