use std::fmt::{Debug, Formatter};
use tracing::{Level, event};
use crate::TracingConfig;
use watchword_core::{Activation, LogSink};

/// The `tracing` target of the events emitted by [`TracingSink`].
pub const TARGET: &str = "watchword::tokens";

/// A [`LogSink`] that emits one `tracing` event per logged activation, at a
/// fixed [`Level`], under the [`TARGET`] target.
///
/// The event message is the displayed activation (`⏎ group:token`). The
/// group, the token, the activity flag, and the payload are attached as
/// fields.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    /// Creates a sink emitting events at the given level.
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a sink emitting events at the configured
    /// [token level](TracingConfig::tokens), or [`None`] if that level is
    /// [`Off`](crate::Verbosity::Off).
    pub fn from_config(config: impl AsRef<TracingConfig>) -> Option<Self> {
        config.as_ref().tokens().level().map(Self::new)
    }

    /// Reports the level of the emitted events.
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(Level::INFO)
    }
}

/// Renders a payload slice as a list.
struct PayloadField<'p, 'a>(&'p [&'a dyn Debug]);

impl Debug for PayloadField<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl LogSink for TracingSink {
    fn log(&self, activation: &Activation<'_>, payload: &[&dyn Debug]) {
        let group = activation.group().name();
        let token = activation.token().unwrap_or_default();
        let active = activation.is_active();
        let payload = PayloadField(payload);

        macro_rules! emit {
            ($level:expr) => {
                event!(
                    target: TARGET,
                    $level,
                    group,
                    token,
                    active,
                    payload = ?payload,
                    "{}",
                    activation,
                )
            };
        }

        if self.level == Level::ERROR {
            emit!(Level::ERROR);
        } else if self.level == Level::WARN {
            emit!(Level::WARN);
        } else if self.level == Level::INFO {
            emit!(Level::INFO);
        } else if self.level == Level::DEBUG {
            emit!(Level::DEBUG);
        } else {
            emit!(Level::TRACE);
        }
    }
}
