use std::time::Duration;

use thiserror::Error;

/// Timings for the simulated processing latency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppSettings {
    result_delay: Duration,
    reply_delay: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct AppSettingsDraft {
    pub result_delay_ms: Option<u64>,
    pub reply_delay_ms: Option<u64>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppSettingsError {
    #[error("{field} must be at most {max} ms, got {value} ms")]
    DelayTooLong {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

impl AppSettings {
    pub const DEFAULT_RESULT_DELAY_MS: u64 = 2_000;
    pub const DEFAULT_REPLY_DELAY_MS: u64 = 1_500;
    pub const MAX_DELAY_MS: u64 = 60_000;

    /// No artificial latency; used by headless runs and tests.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            result_delay: Duration::ZERO,
            reply_delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn result_delay(&self) -> Duration {
        self.result_delay
    }

    #[must_use]
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            result_delay: Duration::from_millis(Self::DEFAULT_RESULT_DELAY_MS),
            reply_delay: Duration::from_millis(Self::DEFAULT_REPLY_DELAY_MS),
        }
    }
}

impl AppSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft, filling unset values with defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError::DelayTooLong` if a delay exceeds
    /// `AppSettings::MAX_DELAY_MS`.
    pub fn validate(self) -> Result<AppSettings, AppSettingsError> {
        let result_delay_ms = checked_delay(
            "result delay",
            self.result_delay_ms
                .unwrap_or(AppSettings::DEFAULT_RESULT_DELAY_MS),
        )?;
        let reply_delay_ms = checked_delay(
            "reply delay",
            self.reply_delay_ms
                .unwrap_or(AppSettings::DEFAULT_REPLY_DELAY_MS),
        )?;

        Ok(AppSettings {
            result_delay: Duration::from_millis(result_delay_ms),
            reply_delay: Duration::from_millis(reply_delay_ms),
        })
    }
}

fn checked_delay(field: &'static str, value: u64) -> Result<u64, AppSettingsError> {
    if value > AppSettings::MAX_DELAY_MS {
        return Err(AppSettingsError::DelayTooLong {
            field,
            value,
            max: AppSettings::MAX_DELAY_MS,
        });
    }
    Ok(value)
}
