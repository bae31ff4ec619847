#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

use std::sync::Arc;

/// Re-exports the public API of `watchword-core` in the root of this crate for
/// convenience.
pub use watchword_core::*;


/// Re-exports the public API of `watchword-tracing` for convenience.
#[cfg(feature = "tracing")]
pub use watchword_tracing as tracing;


/// Draws the next token of the group named in `options`, and prints it along
/// with the given `data` unless `print_word` is disabled.
///
/// Operates on the [global](Context::global) context. Any payload already set
/// in `options` is replaced by `data`, and the generator is always advanced.
pub fn log<'a>(data: Payload<'a>, options: Options<'a>) -> Activation<'a> {
    Activation::new(Context::global(), options.data(data).advance(true))
}

/// Peeks at the last token of the group named in `options` and compares it
/// with `word`, or with the value of the watch variable if `word` is absent.
///
/// Operates on the [global](Context::global) context. See [`Watch::after`] for
/// how the watch value is parsed.
pub fn after<'a>(word: Option<&str>, options: Options<'a>) -> Watch<'a> {
    Watch::after(Context::global(), word, options)
}

/// Suspends through the global [hook](SuspendHook) if [`after`] is active for
/// the same arguments. Reports whether the hook was invoked.
pub fn brk(word: Option<&str>, options: Options<'_>) -> Result<bool, SuspendError> {
    after(word, options).breakpoint()
}

/// Logs the given `data` like [`log`], then [breaks](brk) on the token just
/// printed with the same `options`.
pub fn logbrk(data: Payload<'_>, options: Options<'_>) -> Result<bool, SuspendError> {
    log(data, options.clone());

    brk(None, options)
}

/// Installs the `tracing` subscriber described by `config` and routes the
/// tokens of the global context through it.
#[cfg(feature = "tracing")]
pub fn init_tracing(
    config: impl AsRef<watchword_tracing::TracingConfig>,
) -> Result<(), watchword_tracing::TryInitError> {
    watchword_tracing::init(Context::global(), config)
}

/// Replaces the default sink of the global context.
pub fn set_default_sink(sink: impl LogSink + 'static) {
    Context::global().set_default_sink(Arc::new(sink));
}

/// Replaces the suspend hook of the global context.
pub fn set_suspend_hook(hook: impl SuspendHook + 'static) {
    Context::global().set_suspend_hook(Arc::new(hook));
}

/// Logs the given values with default options and evaluates to whether the
/// resulting activation is active.
///
/// ```
/// let word = "spam";
///
/// watchword::log!();
/// watchword::log!(word);
/// watchword::log!(word, word.len());
/// ```
#[macro_export]
macro_rules! log {
    () => {
        $crate::log($crate::Payload::Empty, $crate::Options::default()).is_active()
    };
    ($value:expr $(,)?) => {
        $crate::log($crate::Payload::one(&$value), $crate::Options::default()).is_active()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::log(
            $crate::Payload::many([$(&$value as &dyn ::std::fmt::Debug),+]),
            $crate::Options::default(),
        )
        .is_active()
    };
}
