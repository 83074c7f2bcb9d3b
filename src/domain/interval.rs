//! Poll interval value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::IntervalParseError;

/// Default clipboard poll interval (250 milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Shortest accepted poll interval
pub const MIN_POLL_INTERVAL_MS: u64 = 50;

/// Value object for the clipboard poll period.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollInterval {
    milliseconds: u64,
}

impl PollInterval {
    /// Create an interval from milliseconds, rejecting values below the minimum
    pub fn from_millis(ms: u64) -> Result<Self, IntervalParseError> {
        if ms < MIN_POLL_INTERVAL_MS {
            return Err(IntervalParseError {
                input: format!("{}ms", ms),
            });
        }
        Ok(Self { milliseconds: ms })
    }

    /// Get the interval in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self {
            milliseconds: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl FromStr for PollInterval {
    type Err = IntervalParseError;

    /// Supported formats: "250ms", "1s", "1s500ms"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let err = || IntervalParseError {
            input: s.to_string(),
        };

        let mut total_ms: u64 = 0;
        let mut current_num = String::new();
        let mut found_any = false;
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
                continue;
            }
            if current_num.is_empty() {
                return Err(err());
            }
            let value: u64 = current_num.parse().map_err(|_| err())?;
            current_num.clear();

            match ch {
                'm' if chars.peek() == Some(&'s') => {
                    chars.next();
                    total_ms = total_ms.checked_add(value).ok_or_else(err)?;
                }
                's' => {
                    let ms = value.checked_mul(1000).ok_or_else(err)?;
                    total_ms = total_ms.checked_add(ms).ok_or_else(err)?;
                }
                _ => return Err(err()),
            }
            found_any = true;
        }

        if !current_num.is_empty() || !found_any {
            return Err(err());
        }

        if total_ms < MIN_POLL_INTERVAL_MS {
            return Err(err());
        }

        Ok(Self {
            milliseconds: total_ms,
        })
    }
}

impl fmt::Display for PollInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.milliseconds / 1000;
        let ms = self.milliseconds % 1000;

        match (secs, ms) {
            (0, ms) => write!(f, "{}ms", ms),
            (secs, 0) => write!(f, "{}s", secs),
            (secs, ms) => write!(f, "{}s{}ms", secs, ms),
        }
    }
}
