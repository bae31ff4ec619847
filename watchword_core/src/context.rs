use crate::{
    BuiltinSource, ConsoleSink, FileCache, FileSource, GroupRegistry, LogSink, NoDebugger,
    SuspendHook, TokenGroup, TokenSource, WatchTarget, WatchwordConfig,
};
use parking_lot::{Mutex, RwLock};
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, OnceLock};
use tracing::debug;

// Global singleton context
static GLOBAL: OnceLock<Context> = OnceLock::new();

// Configuration of the global context (stored statically to allow customizing)
static GLOBAL_CONFIG: Mutex<Option<WatchwordConfig>> = Mutex::new(None);

/// Owns everything that lives for as long as the process does: the
/// [registry](GroupRegistry) of token groups, the [memo](FileCache) of
/// dictionary files, the ordered token sources every new group starts from,
/// and the replaceable [sink](LogSink) and [suspend hook](SuspendHook).
///
/// Most programs use the lazily-initialized [global](Context::global)
/// instance. Independent instances (e.g., in tests) share nothing with it.
///
/// ## Source composition
///
/// A context built with [`Context::new`] hands every new group two sources,
/// consumed in this order:
///
/// 1. the [built-in words](BuiltinSource),
/// 2. the configured [dictionary](WatchwordConfig::dictionary), minus the
///    built-in words, if a dictionary is configured.
pub struct Context {
    config: WatchwordConfig,
    files: Arc<FileCache>,
    sources: Vec<Arc<dyn TokenSource>>,
    groups: GroupRegistry,
    sink: RwLock<Arc<dyn LogSink>>,
    hook: RwLock<Arc<dyn SuspendHook>>,
}

impl Context {
    /// Creates a context with the default source composition.
    pub fn new(config: WatchwordConfig) -> Self {
        let files = Arc::new(FileCache::new());
        let sources = Self::default_sources(&config, &files);

        Self::assemble(config, files, sources)
    }

    /// Creates a context whose groups draw from the given `sources`, in the
    /// given order, instead of the default composition.
    pub fn with_sources<I>(config: WatchwordConfig, sources: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn TokenSource>>,
    {
        let files = Arc::new(FileCache::new());

        Self::assemble(config, files, sources.into_iter().collect())
    }

    fn assemble(
        config: WatchwordConfig,
        files: Arc<FileCache>,
        sources: Vec<Arc<dyn TokenSource>>,
    ) -> Self {
        let sink: Arc<dyn LogSink> = Arc::new(ConsoleSink::new(config.color()));
        let hook: Arc<dyn SuspendHook> = Arc::new(NoDebugger);

        Self {
            config,
            files,
            sources,
            groups: GroupRegistry::new(),
            sink: RwLock::new(sink),
            hook: RwLock::new(hook),
        }
    }

    fn default_sources(config: &WatchwordConfig, files: &Arc<FileCache>) -> Vec<Arc<dyn TokenSource>> {
        let mut sources: Vec<Arc<dyn TokenSource>> = vec![Arc::new(BuiltinSource)];

        if let Some(dictionary) = config.dictionary() {
            let source = FileSource::new(dictionary, Arc::clone(files))
                .excluding(BuiltinSource::word_set());

            sources.push(Arc::new(source));
        }

        sources
    }
}

impl Context {
    /// Returns the global (singleton) context, lazily initialized from the
    /// config registered with [`set_global_config`](Context::set_global_config),
    /// or from the default config.
    pub fn global() -> &'static Context {
        GLOBAL.get_or_init(|| {
            let config = GLOBAL_CONFIG.lock().take().unwrap_or_default();

            debug!(?config, "Initializing global watchword context");

            Context::new(config)
        })
    }

    /// Registers the config of the [global](Context::global) context.
    /// Importantly, this method must be called early on, before anything
    /// touches the global context. If called later, this method will have no
    /// effect.
    pub fn set_global_config(config: WatchwordConfig) {
        *GLOBAL_CONFIG.lock() = Some(config);
    }
}

impl Context {
    /// Returns the group with the given name, creating it on first request.
    pub fn group(&self, name: &str) -> Arc<TokenGroup> {
        self.groups
            .get_or_create(name, |name| TokenGroup::new(name, self.sources.iter().cloned()))
    }

    /// Exposes the registry of groups created so far.
    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    /// Exposes the memo of dictionary files shared by this context's sources.
    pub fn files(&self) -> &Arc<FileCache> {
        &self.files
    }

    /// Exposes the config of this context.
    pub fn config(&self) -> &WatchwordConfig {
        &self.config
    }

    /// Reads the watch target from the configured environment variable.
    pub fn watch_target(&self) -> Option<WatchTarget> {
        WatchTarget::discern(self.config.env_var(), self.config.separator())
    }

    /// Replaces the default sink used by activations without a per-call
    /// logger.
    pub fn set_default_sink(&self, sink: Arc<dyn LogSink>) {
        *self.sink.write() = sink;
    }

    /// Returns the current default sink.
    pub fn default_sink(&self) -> Arc<dyn LogSink> {
        Arc::clone(&self.sink.read())
    }

    /// Replaces the hook invoked by active breakpoints.
    pub fn set_suspend_hook(&self, hook: Arc<dyn SuspendHook>) {
        *self.hook.write() = hook;
    }

    /// Returns the current suspend hook.
    pub fn suspend_hook(&self) -> Arc<dyn SuspendHook> {
        Arc::clone(&self.hook.read())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(WatchwordConfig::default())
    }
}

impl Debug for Context {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("sources", &self.sources.len())
            .field("groups", &self.groups.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn without_dictionary() -> WatchwordConfig {
        WatchwordConfig::default().with_dictionary(None)
    }

    #[test]
    fn same_group_per_name() {
        // Given
        let context = Context::new(without_dictionary());

        // When
        let group_a = context.group("x");
        let group_b = context.group("x");
        let group_c = context.group("y");

        // Then
        assert!(Arc::ptr_eq(&group_a, &group_b));
        assert!(!Arc::ptr_eq(&group_a, &group_c));
        assert_eq!(context.groups().len(), 2);
    }

    #[test]
    fn builtin_words_come_first() {
        // Given
        let context = Context::new(without_dictionary());
        let builtin = BuiltinSource::word_set();

        // When
        let group = context.group("");
        let tokens = (0..builtin.len())
            .map(|_| group.draw())
            .collect::<BTreeSet<_>>();

        // Then
        assert_eq!(tokens, builtin);
        assert_eq!(group.draw(), "1");
    }

    #[test]
    fn missing_dictionary_falls_back() {
        // Given
        let config = WatchwordConfig::default()
            .with_dictionary(Some(PathBuf::from("/definitely/not/a/real/words/file")));
        let context = Context::new(config);
        let count = BuiltinSource::word_set().len();

        // When
        let group = context.group("missing");
        for _ in 0..count {
            group.draw();
        }

        // Then
        assert_eq!(group.draw(), "1");
        assert!(group.is_exhausted());
    }

    #[test]
    fn independent_contexts_agree() {
        // Given
        let context_a = Context::new(without_dictionary());
        let context_b = Context::new(without_dictionary());

        // When
        let tokens_a = (0..20).map(|_| context_a.group("det").draw()).collect::<Vec<_>>();
        let tokens_b = (0..20).map(|_| context_b.group("det").draw()).collect::<Vec<_>>();

        // Then
        assert_eq!(tokens_a, tokens_b);
    }
}
