//! Construction parameters for the board, validated once up front.

use std::{num::NonZeroUsize, time::Duration};

use bevy::prelude::Resource;

use crate::{error::LifeError, prelude::*};

/// Validated board parameters. Only constructible through [`LifeConfig::new`]
/// (or the env helpers that call it), so every instance is usable as is.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    render_target: String,
    rows: NonZeroUsize,
    cols: NonZeroUsize,
    interval: Duration,
}

impl LifeConfig {
    /// Builds a config, rejecting non-positive dimensions and a zero interval.
    pub fn new(
        render_target: impl Into<String>,
        rows: i64,
        cols: i64,
        interval_ms: u64,
    ) -> Result<Self, LifeError> {
        let rows = positive_dim("rows", rows)?;
        let cols = positive_dim("cols", cols)?;
        if interval_ms == 0 {
            return Err(LifeError::config("interval must be at least 1 ms"));
        }
        Ok(Self {
            render_target: render_target.into(),
            rows,
            cols,
            interval: Duration::from_millis(interval_ms),
        })
    }

    /// Reads overrides from the process environment:
    /// `LIFE_TARGET`, `LIFE_ROWS`, `LIFE_COLS`, `LIFE_INTERVAL_MS`.
    pub fn from_env() -> Result<Self, LifeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LifeConfig::from_env`] with an injectable variable lookup.
    /// Missing keys fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LifeError> {
        let target = lookup("LIFE_TARGET").unwrap_or_else(|| DEFAULT_TARGET.to_owned());
        let rows = parse_var(&lookup, "LIFE_ROWS", DEFAULT_ROWS as i64)?;
        let cols = parse_var(&lookup, "LIFE_COLS", DEFAULT_COLS as i64)?;
        let interval_ms = parse_var(&lookup, "LIFE_INTERVAL_MS", DEFAULT_INTERVAL_MS)?;
        Self::new(target, rows, cols, interval_ms)
    }

    /// Title of the window hosting the board.
    pub fn render_target(&self) -> &str {
        &self.render_target
    }

    pub fn rows(&self) -> NonZeroUsize {
        self.rows
    }

    pub fn cols(&self) -> NonZeroUsize {
        self.cols
    }

    /// Time between two scheduled generations.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            render_target: DEFAULT_TARGET.to_owned(),
            rows: NonZeroUsize::MIN.saturating_add(DEFAULT_ROWS - 1),
            cols: NonZeroUsize::MIN.saturating_add(DEFAULT_COLS - 1),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

fn positive_dim(name: &str, value: i64) -> Result<NonZeroUsize, LifeError> {
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| LifeError::config(format!("{name} must be positive, got {value}")))
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, LifeError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| LifeError::config(format!("{key} is not a number: {raw:?}"))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(
            LifeConfig::new("x", 0, 5, 500),
            Err(LifeError::InvalidConfiguration { .. })
        ));
        assert!(LifeConfig::new("x", 5, -3, 500).is_err());
        assert!(LifeConfig::new("x", 5, 5, 0).is_err());

        let cfg = LifeConfig::new("board", 3, 4, 250).unwrap();
        assert_eq!(cfg.render_target(), "board");
        assert_eq!(cfg.rows().get(), 3);
        assert_eq!(cfg.cols().get(), 4);
        assert_eq!(cfg.interval(), Duration::from_millis(250));
    }

    #[test]
    fn default_matches_constants() {
        let cfg = LifeConfig::default();
        assert_eq!(cfg.rows().get(), DEFAULT_ROWS);
        assert_eq!(cfg.cols().get(), DEFAULT_COLS);
        assert_eq!(cfg.interval(), Duration::from_millis(500));
        assert_eq!(cfg, LifeConfig::from_lookup(|_| None).unwrap());
    }

    #[test]
    fn env_overrides() {
        let cfg = LifeConfig::from_lookup(|key| match key {
            "LIFE_ROWS" => Some("10".into()),
            "LIFE_INTERVAL_MS" => Some(" 120 ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.rows().get(), 10);
        assert_eq!(cfg.cols().get(), DEFAULT_COLS);
        assert_eq!(cfg.interval(), Duration::from_millis(120));

        let err = LifeConfig::from_lookup(|key| (key == "LIFE_COLS").then(|| "wide".into()));
        assert!(matches!(err, Err(LifeError::InvalidConfiguration { .. })));
    }
}
