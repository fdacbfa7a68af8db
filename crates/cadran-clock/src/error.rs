use std::fmt;

use cadran_engine::paint::ColorParseError;

use crate::params::ParamKey;

/// Configuration error raised when a control-panel value is rejected.
///
/// Every variant is produced at set time; a [`crate::RenderParams`] that
/// exists is always drawable.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockError {
    /// The key is not one of the tunable parameters.
    UnknownParam(String),
    /// Not one of the supported IANA ids or country names.
    UnknownTimezone(String),
    /// Not one of the supported font families.
    UnknownFont(String),
    /// The value is not a finite number.
    InvalidNumber { key: ParamKey, value: String },
    /// The number falls outside the control's range.
    OutOfRange { key: ParamKey, value: f32, min: f32, max: f32 },
    InvalidColor { key: ParamKey, source: ColorParseError },
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::UnknownParam(key) => write!(f, "unknown parameter {key:?}"),
            ClockError::UnknownTimezone(tz) => write!(f, "unknown timezone {tz:?}"),
            ClockError::UnknownFont(name) => write!(f, "unknown font {name:?}"),
            ClockError::InvalidNumber { key, value } => {
                write!(f, "{key}: {value:?} is not a number")
            }
            ClockError::OutOfRange { key, value, min, max } => {
                write!(f, "{key}: {value} is outside [{min}, {max}]")
            }
            ClockError::InvalidColor { key, source } => write!(f, "{key}: {source}"),
        }
    }
}

impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClockError::InvalidColor { source, .. } => Some(source),
            _ => None,
        }
    }
}
