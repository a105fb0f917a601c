//! Runtime configuration.
//!
//! Defaults match what the site ships with. The CLI can override them
//! through environment variables (or a `.env` file):
//!
//! | Variable                   | Default    |
//! |----------------------------|------------|
//! | `PAPERCHECK_MAX_FILE_SIZE` | 10485760   |
//! | `PAPERCHECK_TICK_MS`       | 200        |
//! | `PAPERCHECK_PROGRESS_STEP` | 10         |
//! | `PAPERCHECK_COMPLETION_MS` | 2500       |
//! | `PAPERCHECK_REDIRECT_MS`   | 1500       |

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::upload::{SubmissionTiming, UploadPolicy};

/// Complete configuration of the upload flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub upload: UploadPolicy,
    pub timing: SubmissionTiming,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults
    /// for missing keys.
    pub fn from_lookup<L>(lookup: L) -> ConfigResult<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let max_file_size = parse_positive(&lookup, "PAPERCHECK_MAX_FILE_SIZE", default.upload.max_file_size)?;
        let tick = parse_positive(&lookup, "PAPERCHECK_TICK_MS", millis(default.timing.tick_interval))?;
        let step = parse_positive(&lookup, "PAPERCHECK_PROGRESS_STEP", default.timing.progress_step)?;
        let completion = parse_positive(
            &lookup,
            "PAPERCHECK_COMPLETION_MS",
            millis(default.timing.completion_delay),
        )?;
        // Zero is a valid redirect delay: navigate as soon as processing completes.
        let redirect = parse_or(&lookup, "PAPERCHECK_REDIRECT_MS", millis(default.timing.redirect_delay))?;

        Ok(Self {
            upload: UploadPolicy {
                max_file_size,
                ..default.upload
            },
            timing: SubmissionTiming {
                tick_interval: Duration::from_millis(tick),
                progress_step: step.min(100),
                completion_delay: Duration::from_millis(completion),
                redirect_delay: Duration::from_millis(redirect),
            },
        })
    }
}

fn millis(d: Duration) -> u64 {
    d.as_millis() as u64
}

fn parse_or<L, T>(lookup: &L, key: &str, default: T) -> ConfigResult<T>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

fn parse_positive<L, T>(lookup: &L, key: &str, default: T) -> ConfigResult<T>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr + PartialEq + Default,
{
    let value = parse_or(lookup, key, default)?;
    if value == T::default() {
        return Err(ConfigError::NonPositive {
            key: key.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.upload.max_file_size, 10 * 1024 * 1024);
        assert_eq!(config.timing.tick_interval, Duration::from_millis(200));
        assert_eq!(config.timing.progress_step, 10);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PAPERCHECK_MAX_FILE_SIZE", "1024"),
            ("PAPERCHECK_TICK_MS", " 50 "),
            ("PAPERCHECK_REDIRECT_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.upload.max_file_size, 1024);
        assert_eq!(config.upload.accepted_types.len(), 3);
        assert_eq!(config.timing.tick_interval, Duration::from_millis(50));
        assert_eq!(config.timing.redirect_delay, Duration::ZERO);
    }

    #[test]
    fn test_invalid_value() {
        let err = AppConfig::from_lookup(lookup(&[("PAPERCHECK_TICK_MS", "fast")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "PAPERCHECK_TICK_MS".into(),
                value: "fast".into(),
            }
        );
    }

    #[test]
    fn test_zero_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("PAPERCHECK_PROGRESS_STEP", "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonPositive {
                key: "PAPERCHECK_PROGRESS_STEP".into(),
            }
        );
    }
}
