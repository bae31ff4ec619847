use super::{TokenSource, normalize};
use parking_lot::Mutex;
use std::collections::{BTreeSet, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Memo of dictionary files read so far, keyed by path.
///
/// Each file is read at most once per cache: the lock is held for the
/// duration of the first read, so concurrent groups asking for the same file
/// wait for that read instead of repeating it. Files that could not be read
/// are not remembered, and are looked up again on the next request.
#[derive(Debug, Default)]
pub struct FileCache {
    files: Mutex<HashMap<PathBuf, Arc<[String]>>>,
}

impl FileCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the normalized words of the file at `path`, reading it on the
    /// first request. Returns [`None`] if the file cannot be read.
    pub fn words(&self, path: &Path) -> Option<Arc<[String]>> {
        let mut files = self.files.lock();

        if let Some(words) = files.get(path) {
            return Some(Arc::clone(words));
        }

        let words: Arc<[String]> = Arc::from(Self::read(path)?);
        files.insert(path.to_path_buf(), Arc::clone(&words));

        Some(words)
    }

    /// Reports whether the file at `path` has already been read into this
    /// cache.
    pub fn contains(&self, path: &Path) -> bool {
        self.files.lock().contains_key(path)
    }

    /// Reads and normalizes the file, one word per line.
    fn read(path: &Path) -> Option<Vec<String>> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Dictionary file not found");
                return None;
            }
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to read dictionary file; treating it as empty",
                );
                return None;
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        let words = normalize(content.lines(), &BTreeSet::new());

        debug!(path = %path.display(), count = words.len(), "Read dictionary file");

        Some(words)
    }
}

/// A [`TokenSource`] backed by a text file with one token per line.
///
/// The file is read through a shared [`FileCache`], so any number of sources
/// (and groups) pointing at the same path pay for a single read. The
/// exclusion set is applied per source, after the cached read.
///
/// A missing file produces an empty sequence.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    exclude: Arc<BTreeSet<String>>,
    cache: Arc<FileCache>,
}

impl FileSource {
    /// Creates a source reading `path` through the given `cache`.
    pub fn new(path: impl Into<PathBuf>, cache: Arc<FileCache>) -> Self {
        Self {
            path: path.into(),
            exclude: Arc::new(BTreeSet::new()),
            cache,
        }
    }

    /// Removes the given words (compared after lower-casing) from whatever
    /// this source produces.
    pub fn excluding<W>(mut self, words: impl IntoIterator<Item = W>) -> Self
    where
        W: AsRef<str>,
    {
        self.exclude = Arc::new(
            words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        );

        self
    }

    /// Reports the path backing this source.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenSource for FileSource {
    fn produce(&self) -> Vec<String> {
        let Some(words) = self.cache.words(&self.path) else {
            return Vec::new();
        };

        words
            .iter()
            .filter(|word| !self.exclude.contains(word.as_str()))
            .cloned()
            .collect()
    }
}
