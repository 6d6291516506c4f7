use std::env;
use log::warn;

use crate::color::Rounding;

pub const DEFAULT_PRECISION: usize = 3;
pub const MAX_PRECISION: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rounding: Rounding,
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounding: Rounding::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading keys through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let rounding = match lookup("SASS_ROUNDING") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Unknown SASS_ROUNDING value '{}', using {:?}", raw, Rounding::default());
                Rounding::default()
            }),
            None => Rounding::default(),
        };
        let precision = lookup("SASS_PRECISION")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .map(|p| p.min(MAX_PRECISION))
            .unwrap_or(DEFAULT_PRECISION);
        Self { rounding, precision }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
