use std::fmt;

/// Rejected configuration. Raised at construction time only; the frame step
/// itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidBounds {
        width: f32,
        height: f32,
    },
    OutOfRange {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { width, height } => {
                write!(f, "invalid arena bounds: {width}x{height} (both must be > 0)")
            }
            Self::OutOfRange {
                field,
                value,
                expected,
            } => write!(f, "{field} out of range: {value} (expected {expected})"),
            Self::Parse(msg) => write!(f, "failed to parse config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
