#[derive(Debug)]
pub enum FlapError {
    InvalidEpoch { value: String, reason: String },
    InvalidConfig { reason: String },
    Serde(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for FlapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEpoch { value, reason } => {
                write!(f, "Invalid epoch '{value}': {reason}")
            }
            Self::InvalidConfig { reason } => write!(f, "Invalid config: {reason}"),
            Self::Serde(e) => write!(f, "Serialization error: {e}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for FlapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serde(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FlapError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}

impl From<std::io::Error> for FlapError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
