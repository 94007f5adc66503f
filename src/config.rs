//! Game configuration, read from the environment (and `.env`, if present).

use crate::application::DEFAULT_PENALTY;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const WINDOW_WIDTH: i32 = 1000;
pub const WINDOW_HEIGHT: i32 = 800;

/// Errors from reading configuration values
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value, reason } => {
                write!(f, "{key}={value:?} is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub penalty: Duration,
    /// Gap between tiles and around the grid, in pixels
    pub spacing: f32,
    /// Fixed seed for a reproducible deck; `None` draws from the OS
    pub seed: Option<u64>,
    pub asset_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 4,
            penalty: DEFAULT_PENALTY,
            spacing: 10.0,
            seed: None,
            asset_dir: "assets".to_owned(),
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `MEMORY_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(rows) = parse(&lookup, "MEMORY_ROWS")? {
            config.rows = rows;
        }
        if let Some(columns) = parse(&lookup, "MEMORY_COLUMNS")? {
            config.columns = columns;
        }
        if let Some(ms) = parse::<u64, _>(&lookup, "MEMORY_PENALTY_MS")? {
            config.penalty = Duration::from_millis(ms);
        }
        if let Some(spacing) = parse::<f32, _>(&lookup, "MEMORY_SPACING")? {
            config.spacing = spacing;
        }
        config.seed = parse(&lookup, "MEMORY_SEED")?;
        if let Some(dir) = lookup("MEMORY_ASSET_DIR") {
            config.asset_dir = dir;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject layouts that cannot be fully paired
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tiles = self.rows.checked_mul(self.columns).unwrap_or(0);
        if tiles == 0 || tiles % 2 != 0 {
            return Err(ConfigError::Invalid {
                key: "MEMORY_ROWS/MEMORY_COLUMNS",
                value: format!("{}x{}", self.rows, self.columns),
                reason: "tile count must be even, non-zero and fit in memory".to_owned(),
            });
        }
        if self.spacing.is_nan() || self.spacing < 0.0 {
            return Err(ConfigError::Invalid {
                key: "MEMORY_SPACING",
                value: self.spacing.to_string(),
                reason: "must be zero or positive".to_owned(),
            });
        }
        Ok(())
    }

    /// Zero when `rows * columns` overflows, which `validate` rejects
    pub fn face_count(&self) -> usize {
        self.rows.checked_mul(self.columns).map_or(0, |tiles| tiles / 2)
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|err: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<GameConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.face_count(), 8);
        assert_eq!(config.penalty, Duration::from_secs(1));
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("MEMORY_ROWS", "3"),
            ("MEMORY_COLUMNS", " 6 "),
            ("MEMORY_PENALTY_MS", "250"),
            ("MEMORY_SEED", "12345"),
            ("MEMORY_ASSET_DIR", "img"),
        ])
        .unwrap();

        assert_eq!((config.rows, config.columns), (3, 6));
        assert_eq!(config.face_count(), 9);
        assert_eq!(config.penalty, Duration::from_millis(250));
        assert_eq!(config.seed, Some(12345));
        assert_eq!(config.asset_dir, "img");
    }

    #[test]
    fn test_odd_grid_rejected() {
        let err = from_pairs(&[("MEMORY_ROWS", "3"), ("MEMORY_COLUMNS", "3")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { value, .. } if value == "3x3"));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let err = from_pairs(&[
            ("MEMORY_ROWS", "4294967296"),
            ("MEMORY_COLUMNS", "4294967296"),
        ]);
        assert!(matches!(err, Err(ConfigError::Invalid { .. })));

        let config = GameConfig {
            rows: usize::MAX,
            columns: 2,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.face_count(), 0);
    }

    #[test]
    fn test_unparsable_value_names_key() {
        let err = from_pairs(&[("MEMORY_PENALTY_MS", "soon")]).unwrap_err();
        let ConfigError::Invalid { key, value, .. } = err;
        assert_eq!(key, "MEMORY_PENALTY_MS");
        assert_eq!(value, "soon");
    }
}
