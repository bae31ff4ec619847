use std::env;

/// A watch token, optionally qualified with the name of the group it belongs
/// to.
///
/// Parsed from strings such as `"alpha:target7"` (group `alpha`, token
/// `target7`) or `"target7"` (no group). Only the first separator splits, so
/// `"a:b:c"` is group `a` with token `b:c`. Parsing never fails.
///
/// The token is kept exactly as given: it is **not** lower-cased, even though
/// dictionary tokens are. A watch token with upper-case letters therefore
/// never matches a dictionary word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WatchTarget {
    group: Option<String>,
    token: String,
}

impl WatchTarget {
    /// Parses the given raw value.
    pub fn parse(raw: impl AsRef<str>, separator: char) -> Self {
        let raw = raw.as_ref();

        match raw.split_once(separator) {
            Some((group, token)) => Self {
                group: Some(group.to_string()),
                token: token.to_string(),
            },
            None => Self {
                group: None,
                token: raw.to_string(),
            },
        }
    }

    /// Reads and parses the environment variable `var`. Returns [`None`] if
    /// the variable is not set or is not valid unicode.
    pub fn discern(var: &str, separator: char) -> Option<Self> {
        env::var(var).ok().map(|raw| Self::parse(raw, separator))
    }

    /// Reports the group name, or the empty string when the raw value named
    /// no group.
    pub fn group(&self) -> &str {
        self.group.as_deref().unwrap_or_default()
    }

    /// Reports whether the raw value named a group explicitly.
    pub fn has_group(&self) -> bool {
        self.group.is_some()
    }

    /// Reports the watch token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Splits this target into its explicit group (if any) and its token.
    pub fn into_parts(self) -> (Option<String>, String) {
        (self.group, self.token)
    }
}
