use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FlapError;

/// Display configuration, fixed at process start.
///
/// Loadable from JSON; every field has a default so `{}` is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// UTC reference instant the day count starts from, RFC 3339.
    #[serde(default = "default_epoch")]
    pub epoch: String,
    /// Number of random scramble frames shown before settling.
    #[serde(default = "default_frame_count")]
    pub frame_count: u32,
    /// Delay between consecutive scramble frames.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// The displayed digit string never shrinks below this width.
    #[serde(default = "default_min_digit_width")]
    pub min_digit_width: usize,
}

fn default_epoch() -> String {
    "2015-10-22T00:00:00Z".to_string()
}

fn default_frame_count() -> u32 {
    30
}

fn default_frame_interval_ms() -> u64 {
    50
}

fn default_min_digit_width() -> usize {
    4
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            frame_count: default_frame_count(),
            frame_interval_ms: default_frame_interval_ms(),
            min_digit_width: default_min_digit_width(),
        }
    }
}

impl DisplayConfig {
    /// Parse the configured epoch into a UTC instant.
    ///
    /// A malformed epoch is a startup-time fault: the error is fatal to
    /// constructing the display, never a runtime-recoverable condition.
    pub fn epoch_utc(&self) -> Result<DateTime<Utc>, FlapError> {
        DateTime::parse_from_rfc3339(&self.epoch)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| FlapError::InvalidEpoch {
                value: self.epoch.clone(),
                reason: e.to_string(),
            })
    }

    pub fn validate(&self) -> Result<(), FlapError> {
        if self.frame_interval_ms == 0 {
            return Err(FlapError::InvalidConfig {
                reason: "frame_interval_ms must be at least 1".to_string(),
            });
        }
        if self.min_digit_width == 0 {
            return Err(FlapError::InvalidConfig {
                reason: "min_digit_width must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Whether the display is still scrambling or showing the true count.
///
/// Created `Scrambling`, transitions once to `Settled`, never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPhase {
    Scrambling,
    Settled,
}

/// One published display state: the digit string plus its animation phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitFrame {
    pub digits: String,
    pub phase: AnimationPhase,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.epoch, "2015-10-22T00:00:00Z");
        assert_eq!(config.frame_count, 30);
        assert_eq!(config.frame_interval_ms, 50);
        assert_eq!(config.min_digit_width, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: DisplayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.epoch, "2015-10-22T00:00:00Z");
        assert_eq!(config.frame_count, 30);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config: DisplayConfig =
            serde_json::from_str(r#"{ "frame_count": 5, "epoch": "2020-01-01T00:00:00Z" }"#)
                .unwrap();
        assert_eq!(config.frame_count, 5);
        assert_eq!(config.epoch, "2020-01-01T00:00:00Z");
        assert_eq!(config.frame_interval_ms, 50);
    }

    #[test]
    fn test_epoch_parses_to_utc() {
        let epoch = DisplayConfig::default().epoch_utc().unwrap();
        assert_eq!(epoch, Utc.with_ymd_and_hms(2015, 10, 22, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_epoch_with_offset_normalizes_to_utc() {
        let config = DisplayConfig {
            epoch: "2015-10-22T05:30:00+05:30".to_string(),
            ..Default::default()
        };
        let epoch = config.epoch_utc().unwrap();
        assert_eq!(epoch, Utc.with_ymd_and_hms(2015, 10, 22, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_malformed_epoch_rejected() {
        let config = DisplayConfig {
            epoch: "next tuesday".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.epoch_utc(),
            Err(FlapError::InvalidEpoch { .. })
        ));
    }

    #[test]
    fn test_zero_frame_interval_rejected() {
        let config = DisplayConfig {
            frame_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FlapError::InvalidConfig { .. })
        ));
    }
}
