use crate::{TARGET, Verbosity};
use serde::de::{Error as DeError, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt::Formatter;

pub mod verbosity;

/// Decides how watchword tokens, and whatever else the host logs, reach the
/// terminal when routed through `tracing`.
///
/// Two levels matter:
///
/// - [`tokens`](TracingConfig::tokens) is the level at which every printed
///   token is emitted, under the [`TARGET`] target. At
///   [`Off`](Verbosity::Off), tokens are not routed through `tracing` at all
///   and keep going to the console sink of the context.
/// - [`verbosity`](TracingConfig::verbosity) filters every other target,
///   unless a per-target entry in [`targets`](TracingConfig::targets) says
///   otherwise.
///
/// An explicit `targets` entry for [`TARGET`] overrides the token filter,
/// e.g., to mute tokens without touching the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    tokens: Verbosity,
    verbosity: Verbosity,
    color: bool,
    show_timestamp: bool,
    show_target: bool,
    targets: BTreeMap<String, Verbosity>,
}

impl TracingConfig {
    /// Replaces the level at which tokens are emitted.
    pub fn with_tokens(mut self, tokens: impl Into<Verbosity>) -> Self {
        self.tokens = tokens.into();

        self
    }

    /// Replaces the filter applied to targets without their own entry.
    pub fn with_verbosity(mut self, verbosity: impl Into<Verbosity>) -> Self {
        self.verbosity = verbosity.into();

        self
    }

    /// Adds (or replaces) the filter of one target.
    pub fn with_target(mut self, target: impl Into<String>, verbosity: impl Into<Verbosity>) -> Self {
        self.targets.insert(target.into(), verbosity.into());

        self
    }

    /// Turns ANSI colors on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;

        self
    }

    /// Turns the leading timestamp on or off.
    pub fn with_timestamp(mut self, show_timestamp: bool) -> Self {
        self.show_timestamp = show_timestamp;

        self
    }
}

impl TracingConfig {
    /// Reports the level at which tokens are emitted.
    pub fn tokens(&self) -> Verbosity {
        self.tokens
    }

    /// Reports the filter applied to targets without their own entry.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Reports whether lines are written with ANSI colors.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Reports whether lines start with a timestamp.
    pub fn show_timestamp(&self) -> bool {
        self.show_timestamp
    }

    /// Reports whether lines name their target.
    pub fn show_target(&self) -> bool {
        self.show_target
    }

    /// Reports the per-target filters as configured.
    pub fn targets(&self) -> &BTreeMap<String, Verbosity> {
        &self.targets
    }

    /// Resolves the per-target filters, starting from the token filter on
    /// [`TARGET`] and applying the configured entries on top.
    pub fn resolved_targets(&self) -> BTreeMap<&str, Verbosity> {
        let mut resolved = BTreeMap::from([(TARGET, self.tokens)]);
        resolved.extend(
            self.targets
                .iter()
                .map(|(target, verbosity)| (target.as_str(), *verbosity)),
        );

        resolved
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            tokens: Verbosity::Info,
            verbosity: Verbosity::Warn,
            color: true,
            show_timestamp: false,
            show_target: false,
            targets: BTreeMap::new(),
        }
    }
}

impl AsRef<TracingConfig> for TracingConfig {
    fn as_ref(&self) -> &TracingConfig {
        self
    }
}

const _: () = {
    impl<'de> Deserialize<'de> for TracingConfig {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(TracingConfigVisitor)
        }
    }

    struct TracingConfigVisitor;

    impl<'de> Visitor<'de> for TracingConfigVisitor {
        type Value = TracingConfig;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            formatter.write_str("a map of watchword tracing settings")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut config = TracingConfig::default();
            let mut seen = Vec::new();

            while let Some(field) = map.next_key::<Field>()? {
                if field != Field::Ignore && seen.contains(&field) {
                    return Err(A::Error::duplicate_field(field.name()));
                }
                seen.push(field);

                match field {
                    Field::Tokens => config.tokens = map.next_value()?,
                    Field::Verbosity => config.verbosity = map.next_value()?,
                    Field::Color => config.color = map.next_value()?,
                    Field::ShowTimestamp => config.show_timestamp = map.next_value()?,
                    Field::ShowTarget => config.show_target = map.next_value()?,
                    Field::Targets => config.targets = map.next_value()?,
                    Field::Ignore => {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
            }

            Ok(config)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
    #[serde(field_identifier, rename_all = "snake_case")]
    enum Field {
        #[serde(alias = "token_level", alias = "watchword")]
        Tokens,
        #[serde(alias = "level")]
        Verbosity,
        #[serde(alias = "colour")]
        Color,
        #[serde(alias = "timestamp")]
        ShowTimestamp,
        #[serde(alias = "target")]
        ShowTarget,
        Targets,
        #[serde(other)]
        Ignore,
    }

    impl Field {
        fn name(self) -> &'static str {
            match self {
                Self::Tokens => "tokens",
                Self::Verbosity => "verbosity",
                Self::Color => "color",
                Self::ShowTimestamp => "show_timestamp",
                Self::ShowTarget => "show_target",
                Self::Targets => "targets",
                Self::Ignore => "_",
            }
        }
    }
};
