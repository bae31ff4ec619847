use std::collections::BTreeSet;
use std::sync::Arc;

/// Implements the built-in baseline list of common words.
mod builtin;
pub use self::builtin::{BUILTIN_WORDS, BuiltinSource};

/// Implements the file-backed source and its process-wide memo.
mod file;
pub use self::file::{FileCache, FileSource};

/// A zero-argument producer of candidate tokens.
///
/// A [`TokenGroup`](crate::TokenGroup) calls [`produce`](TokenSource::produce)
/// exactly once per source, at the moment the previous source runs dry, and
/// shuffles whatever comes back. Implementations must therefore be
/// deterministic: the same backing content must always yield the same
/// sequence, in the same order, so that the group seed alone decides the
/// order in which tokens appear.
///
/// An empty result is not an error. The group simply moves on to the next
/// source, or to its numeric fallback once none remain.
pub trait TokenSource: Send + Sync {
    /// Produces the ordered sequence of distinct, case-normalized tokens.
    fn produce(&self) -> Vec<String>;
}

impl<F> TokenSource for F
where
    F: Fn() -> Vec<String> + Send + Sync,
{
    fn produce(&self) -> Vec<String> {
        self()
    }
}

/// A [`TokenSource`] over a fixed in-memory list of words.
///
/// The words are normalized the same way file-backed words are: lower-cased,
/// trimmed, deduplicated and sorted, with blanks dropped.
#[derive(Debug, Clone)]
pub struct StaticSource {
    words: Arc<[String]>,
}

impl StaticSource {
    /// Creates a source over the given words.
    pub fn new<W>(words: impl IntoIterator<Item = W>) -> Self
    where
        W: AsRef<str>,
    {
        let words = normalize(words, &BTreeSet::new());

        Self {
            words: Arc::from(words),
        }
    }

    /// Exposes the normalized words of this source.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl TokenSource for StaticSource {
    fn produce(&self) -> Vec<String> {
        self.words.to_vec()
    }
}

/// Lower-cases, trims, and deduplicates the given words, drops blanks and the
/// words present in `exclude`, and returns the rest in lexicographic order.
pub(crate) fn normalize<W>(words: impl IntoIterator<Item = W>, exclude: &BTreeSet<String>) -> Vec<String>
where
    W: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|word| !exclude.contains(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_sorts_and_deduplicates() {
        // Given
        let input = ["Baker", "able", "ABLE", "  charlie\r", "", "baker"];

        // When
        let output = normalize(input, &BTreeSet::new());

        // Then
        assert_eq!(output, vec!["able", "baker", "charlie"]);
    }

    #[test]
    fn normalize_excludes() {
        // Given
        let input = ["able", "Baker", "charlie"];
        let exclude = BTreeSet::from(["baker".to_string()]);

        // When
        let output = normalize(input, &exclude);

        // Then
        assert_eq!(output, vec!["able", "charlie"]);
    }

    #[test]
    fn static_source() {
        // Given
        let source = StaticSource::new(["Zulu", "alpha", "zulu"]);

        // When
        let produced = source.produce();

        // Then
        assert_eq!(produced, vec!["alpha", "zulu"]);
        assert_eq!(source.words(), produced.as_slice());
        assert_eq!(source.produce(), produced);
    }

    #[test]
    fn closure_source() {
        // Given
        let source = || vec!["one".to_string(), "two".to_string()];

        // When
        let produced = TokenSource::produce(&source);

        // Then
        assert_eq!(produced, vec!["one", "two"]);
    }
}
