use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// Level filter read from `logging.level` or `A0_LOG_LEVEL`.
///
/// Anything that is not a level name, non-string TOML values included,
/// resolves to the default level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawLevel")]
pub struct LogLevel(LevelFilter);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Name(String),
    Other(IgnoredAny),
}

impl LogLevel {
    /// Case-insensitive level name; unknown names give the default
    pub fn named(name: &str) -> Self {
        name.trim().parse().map(Self).unwrap_or_default()
    }

    pub const fn filter(self) -> LevelFilter {
        self.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self(DEFAULT_LOG_LEVEL)
    }
}

impl From<RawLevel> for LogLevel {
    fn from(raw: RawLevel) -> Self {
        match raw {
            RawLevel::Name(name) => Self::named(&name),
            RawLevel::Other(_) => Self::default(),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::named(s))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str().to_lowercase())
    }
}
