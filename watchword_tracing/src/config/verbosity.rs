use serde::Deserialize;
use tracing_core::{Level, LevelFilter};

/// How much gets through: either nothing ([`Off`](Verbosity::Off)) or
/// everything at or above one `tracing` [`Level`].
///
/// Variants are ordered from quiet to chatty, so `Trace > Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Nothing.
    #[serde(alias = "none", alias = "OFF")]
    Off,

    /// [`Level::ERROR`] only.
    #[serde(alias = "err", alias = "ERROR")]
    Error,

    /// [`Level::WARN`] and up.
    #[serde(alias = "warning", alias = "WARN")]
    Warn,

    /// [`Level::INFO`] and up.
    #[default]
    #[serde(alias = "INFO")]
    Info,

    /// [`Level::DEBUG`] and up.
    #[serde(alias = "DEBUG")]
    Debug,

    /// Everything.
    #[serde(alias = "TRACE")]
    Trace,
}

impl Verbosity {
    /// Returns the least severe level let through, or [`None`] for
    /// [`Off`](Verbosity::Off).
    pub fn level(&self) -> Option<Level> {
        match self {
            Self::Off => None,
            Self::Error => Some(Level::ERROR),
            Self::Warn => Some(Level::WARN),
            Self::Info => Some(Level::INFO),
            Self::Debug => Some(Level::DEBUG),
            Self::Trace => Some(Level::TRACE),
        }
    }
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        LevelFilter::from(verbosity.level())
    }
}

impl From<&Verbosity> for LevelFilter {
    fn from(verbosity: &Verbosity) -> Self {
        LevelFilter::from(*verbosity)
    }
}

impl From<Level> for Verbosity {
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else if level == Level::DEBUG {
            Self::Debug
        } else {
            Self::Trace
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize() {
        // Given
        let input = "[none, err, warning, INFO, debug, TRACE]";

        // When
        let output = serde_yml::from_str::<Vec<Verbosity>>(input).unwrap();

        // Then
        assert_eq!(
            output,
            vec![
                Verbosity::Off,
                Verbosity::Error,
                Verbosity::Warn,
                Verbosity::Info,
                Verbosity::Debug,
                Verbosity::Trace,
            ],
        );
    }

    #[test]
    fn levels() {
        assert_eq!(Verbosity::Off.level(), None);
        assert_eq!(Verbosity::Warn.level(), Some(Level::WARN));
        assert_eq!(Verbosity::from(Level::DEBUG), Verbosity::Debug);
        assert_eq!(LevelFilter::from(Verbosity::Off), LevelFilter::OFF);
        assert_eq!(LevelFilter::from(&Verbosity::Trace), LevelFilter::TRACE);
        assert!(Verbosity::Trace > Verbosity::Error);
    }
}
