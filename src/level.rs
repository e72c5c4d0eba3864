// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels.
//!
//! Lower values are more severe.  [`Level::Off`] and [`Level::All`] are bounds for
//! configuring a [`Logger`](crate::Logger), not severities a message can carry.

use std::fmt::Display;
use std::str::FromStr;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Filter bound: nothing is logged
    Off = 0,
    /// The process cannot continue
    Fatal = 1,
    /// Runtime error
    Error = 2,
    /// Suspicious condition
    Warn = 3,
    Info = 4,
    Debug = 5,
    Trace = 6,
    /// Filter bound: everything is logged
    All = 7,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
            Level::All => "ALL",
        }
    }

    /**
    Whether a message may be tagged with this level.

    Only `Fatal` through `Trace` qualify.
    */
    pub const fn is_message_level(self) -> bool {
        !matches!(self, Level::Off | Level::All)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid log level {0}, expected 0..=7")]
pub struct InvalidLevel(pub u8);

impl TryFrom<u8> for Level {
    type Error = InvalidLevel;

    fn try_from(value: u8) -> Result<Self, InvalidLevel> {
        Ok(match value {
            0 => Level::Off,
            1 => Level::Fatal,
            2 => Level::Error,
            3 => Level::Warn,
            4 => Level::Info,
            5 => Level::Debug,
            6 => Level::Trace,
            7 => Level::All,
            other => return Err(InvalidLevel(other)),
        })
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level name {0:?}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OFF" => Ok(Level::Off),
            "FATAL" => Ok(Level::Fatal),
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            "ALL" => Ok(Level::All),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_total() {
        let levels = [
            Level::Off,
            Level::Fatal,
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
            Level::All,
        ];
        for (i, level) in levels.iter().enumerate() {
            assert_eq!(u8::from(*level), i as u8);
            assert_eq!(Level::try_from(i as u8), Ok(*level));
        }
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bounds_are_not_message_levels() {
        assert!(!Level::Off.is_message_level());
        assert!(!Level::All.is_message_level());
        assert!(Level::Fatal.is_message_level());
        assert!(Level::Trace.is_message_level());
    }

    #[test]
    fn converts_through_generic_try_from() {
        fn convert<T: TryFrom<u8>>(value: u8) -> Result<T, T::Error> {
            T::try_from(value)
        }
        assert_eq!(convert::<Level>(2), Ok(Level::Error));
        assert_eq!(convert::<Level>(200), Err(InvalidLevel(200)));
        assert_eq!(
            InvalidLevel(200).to_string(),
            "invalid log level 200, expected 0..=7"
        );
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Level::try_from(8), Err(InvalidLevel(8)));
    }

    #[test]
    fn parse_names() {
        assert_eq!("info".parse::<Level>(), Ok(Level::Info));
        assert_eq!(" WARNING ".parse::<Level>(), Ok(Level::Warn));
        assert!("verbose".parse::<Level>().is_err());
        assert_eq!(Level::Debug.to_string(), "DEBUG");
    }
}
