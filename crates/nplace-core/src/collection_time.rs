//! Daily collection slot for a tracked keyword.
//!
//! Keywords are collected once per day. The creation dialog only offers the
//! 24 top-of-the-hour slots, but the backend stores a full `time` and echoes
//! it back as `"HH:MM:SS"`, so parsing accepts any minute and an optional
//! seconds component.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionTime {
    hour: u8,
    minute: u8,
}

impl CollectionTime {
    /// Slot preselected by the add-keyword dialog.
    pub const DEFAULT: Self = Self {
        hour: 15,
        minute: 0,
    };

    /// Top-of-the-hour slot for `hour`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCollectionTime`] if `hour` is not in `0..24`.
    pub fn at_hour(hour: u8) -> Result<Self, CoreError> {
        if hour > 23 {
            return Err(CoreError::InvalidCollectionTime {
                value: hour.to_string(),
                reason: "hour must be between 0 and 23".to_string(),
            });
        }
        Ok(Self { hour, minute: 0 })
    }

    /// All 24 selectable slots, `00:00` through `23:00`.
    pub fn slots() -> impl Iterator<Item = Self> {
        (0u8..24).map(|hour| Self { hour, minute: 0 })
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl Default for CollectionTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for CollectionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for CollectionTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidCollectionTime {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.trim().split(':');
        let hour = parts
            .next()
            .ok_or_else(|| invalid("missing hour"))?
            .parse::<u8>()
            .map_err(|_| invalid("hour is not a number"))?;
        let minute = parts
            .next()
            .ok_or_else(|| invalid("expected HH:MM"))?
            .parse::<u8>()
            .map_err(|_| invalid("minute is not a number"))?;

        // Seconds (and any fractional part) are accepted but not kept.
        if let Some(seconds) = parts.next() {
            let whole = seconds.split('.').next().unwrap_or_default();
            whole
                .parse::<u8>()
                .ok()
                .filter(|s| *s < 60)
                .ok_or_else(|| invalid("seconds out of range"))?;
        }
        if parts.next().is_some() {
            return Err(invalid("too many components"));
        }

        if hour > 23 {
            return Err(invalid("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(invalid("minute must be between 0 and 59"));
        }
        Ok(Self { hour, minute })
    }
}

impl TryFrom<String> for CollectionTime {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CollectionTime> for String {
    fn from(value: CollectionTime) -> Self {
        value.to_string()
    }
}
