use std::{str::FromStr, time::Duration};

use color_eyre::{eyre::WrapErr, Result};

use crate::engine::{config::DEFAULT_GRID_SIZE, GameConfig};

pub const DEFAULT_PORT: u16 = 6502;

pub const PORT_VAR: &str = "GRIDSNAKE_PORT";
pub const GRID_SIZE_VAR: &str = "GRIDSNAKE_GRID_SIZE";
pub const TICK_MS_VAR: &str = "GRIDSNAKE_TICK_MS";
pub const SEED_VAR: &str = "GRIDSNAKE_SEED";

/// Process-level knobs for the host, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port:          u16,
    pub grid_size:     i64,
    pub tick_interval: Duration,
    pub seed:          Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        let game = GameConfig::default();
        Self {
            port:          DEFAULT_PORT,
            grid_size:     DEFAULT_GRID_SIZE,
            tick_interval: game.tick_interval,
            seed:          None,
        }
    }
}

impl Settings {
    /// # Errors
    ///
    /// Fails if a variable is set but does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// # Errors
    ///
    /// Fails if a variable is set but does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let tick_ms: Option<u64> = parse_var(&lookup, TICK_MS_VAR)?;

        Ok(Self {
            port:          parse_var(&lookup, PORT_VAR)?.unwrap_or(defaults.port),
            grid_size:     parse_var(&lookup, GRID_SIZE_VAR)?
                .unwrap_or(defaults.grid_size),
            tick_interval: tick_ms
                .map_or(defaults.tick_interval, Duration::from_millis),
            seed:          parse_var(&lookup, SEED_VAR)?,
        })
    }

    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_grid_size(self.grid_size)
            .with_tick_interval(self.tick_interval)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .wrap_err_with(|| format!("{name} has an invalid value {raw:?}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.port, 6502);
        assert_eq!(settings.tick_interval, Duration::from_millis(250));
    }

    #[test]
    fn reads_every_variable() {
        let settings = Settings::from_lookup(lookup(&[
            (PORT_VAR, "8080"),
            (GRID_SIZE_VAR, "12"),
            (TICK_MS_VAR, "100"),
            (SEED_VAR, "7"),
        ]))
        .unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.grid_size, 12);
        assert_eq!(settings.tick_interval, Duration::from_millis(100));
        assert_eq!(settings.seed, Some(7));

        let config = settings.game_config();
        assert_eq!(config.grid_size, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn oversized_grid_fails_validation() {
        let settings =
            Settings::from_lookup(lookup(&[(GRID_SIZE_VAR, "4000000000")]))
                .unwrap();
        assert!(settings.game_config().validate().is_err());
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = Settings::from_lookup(lookup(&[(TICK_MS_VAR, "fast")]))
            .unwrap_err();
        assert!(err.to_string().contains(TICK_MS_VAR));
    }
}
