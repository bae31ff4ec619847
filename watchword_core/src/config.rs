use serde::de::{Error as DeError, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt::Formatter;
use std::path::{Path, PathBuf};

/// The name of the environment variable that supplies the default watch token.
pub const DEFAULT_ENV_VAR: &str = "WATCHWORD";

/// The character separating the group name from the watch token.
pub const DEFAULT_SEPARATOR: char = ':';

/// The dictionary consulted after the built-in words run out.
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Process-level configuration of a [`Context`](crate::Context).
///
/// Every field is optional when deserializing. An explicit empty string for
/// `dictionary` disables the file-backed source altogether, while an absent or
/// `null` value keeps [`DEFAULT_DICTIONARY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchwordConfig {
    env_var: String,
    separator: char,
    dictionary: Option<PathBuf>,
    nowatch_log: bool,
    color: bool,
}

impl WatchwordConfig {
    /// Replaces the name of the watch-token environment variable.
    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();

        self
    }

    /// Replaces the group/watch separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;

        self
    }

    /// Replaces the dictionary path; [`None`] disables the dictionary.
    pub fn with_dictionary(mut self, dictionary: Option<PathBuf>) -> Self {
        self.dictionary = dictionary;

        self
    }

    /// Replaces the default of the per-call `nowatch_log` option.
    pub fn with_nowatch_log(mut self, nowatch_log: bool) -> Self {
        self.nowatch_log = nowatch_log;

        self
    }

    /// Enables or disables ANSI colors in the console sink.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;

        self
    }
}

impl WatchwordConfig {
    /// Reports the name of the environment variable holding the watch token.
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// Reports the character separating a group name from a watch token.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Reports the dictionary path, if the dictionary is enabled.
    pub fn dictionary(&self) -> Option<&Path> {
        self.dictionary.as_deref()
    }

    /// Reports whether watch-only calls are active when no watch token is set.
    pub fn nowatch_log(&self) -> bool {
        self.nowatch_log
    }

    /// Reports whether the console sink paints tokens with ANSI colors.
    pub fn color(&self) -> bool {
        self.color
    }
}

impl Default for WatchwordConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_string(),
            separator: DEFAULT_SEPARATOR,
            dictionary: Some(PathBuf::from(DEFAULT_DICTIONARY)),
            nowatch_log: false,
            color: true,
        }
    }
}

impl AsRef<WatchwordConfig> for WatchwordConfig {
    fn as_ref(&self) -> &WatchwordConfig {
        self
    }
}

const _: () = {
    impl<'de> Deserialize<'de> for WatchwordConfig {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(WatchwordConfigVisitor)
        }
    }

    struct WatchwordConfigVisitor;

    impl<'de> Visitor<'de> for WatchwordConfigVisitor {
        type Value = WatchwordConfig;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            formatter.write_str("a map of watchword configuration")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut env_var: Option<String> = None;
            let mut separator: Option<char> = None;
            let mut dictionary: Option<Option<String>> = None;
            let mut nowatch_log: Option<bool> = None;
            let mut color: Option<bool> = None;

            while let Some(key) = map.next_key()? {
                match key {
                    WatchwordConfigField::EnvVar => poll(&mut map, &mut env_var, "env_var")?,
                    WatchwordConfigField::Separator => {
                        poll(&mut map, &mut separator, "separator")?
                    }
                    WatchwordConfigField::Dictionary => {
                        poll(&mut map, &mut dictionary, "dictionary")?
                    }
                    WatchwordConfigField::NowatchLog => {
                        poll(&mut map, &mut nowatch_log, "nowatch_log")?
                    }
                    WatchwordConfigField::Color => poll(&mut map, &mut color, "color")?,
                    WatchwordConfigField::Ignore => {
                        map.next_value::<serde::de::IgnoredAny>()?;
                    }
                }
            }

            let default = WatchwordConfig::default();

            let dictionary = match dictionary.flatten() {
                None => default.dictionary,
                Some(path) if path.is_empty() => None,
                Some(path) => Some(PathBuf::from(path)),
            };

            Ok(WatchwordConfig {
                env_var: env_var.unwrap_or(default.env_var),
                separator: separator.unwrap_or(default.separator),
                dictionary,
                nowatch_log: nowatch_log.unwrap_or(default.nowatch_log),
                color: color.unwrap_or(default.color),
            })
        }
    }

    /// Reads the next value into `slot`, refusing to overwrite an earlier one.
    fn poll<'de, A, T>(map: &mut A, slot: &mut Option<T>, name: &'static str) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
        T: Deserialize<'de>,
    {
        if slot.is_some() {
            return Err(A::Error::duplicate_field(name));
        }

        *slot = Some(map.next_value()?);

        Ok(())
    }

    #[derive(Deserialize)]
    #[serde(field_identifier, rename_all = "snake_case")]
    enum WatchwordConfigField {
        #[serde(alias = "env", alias = "variable", alias = "env_variable")]
        EnvVar,
        #[serde(alias = "sep", alias = "delimiter")]
        Separator,
        #[serde(alias = "dict", alias = "words", alias = "word_file")]
        Dictionary,
        #[serde(alias = "log_unwatched", alias = "nowatch")]
        NowatchLog,
        #[serde(alias = "colour", alias = "with_color", alias = "with_colour")]
        Color,
        #[serde(other)]
        Ignore,
    }
};
