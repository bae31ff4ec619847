#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

/// Token sources: built-in words, dictionary files, and the memo of the latter.
mod source;
pub use self::source::{BUILTIN_WORDS, BuiltinSource, FileCache, FileSource, StaticSource, TokenSource};

/// Deterministic token groups.
mod group;
pub use self::group::TokenGroup;
pub use self::group::seed::GroupSeed;

/// Registry of token groups by name.
mod registry;
pub use self::registry::GroupRegistry;

/// Process-wide context.
mod context;
pub use self::context::Context;

/// Activations and their options.
mod activation;
pub use self::activation::payload::Payload;
pub use self::activation::{Activation, Options, Watch};

/// Logging sinks.
mod sink;
pub use self::sink::{ConsoleSink, LogSink};

/// Suspend hooks and their errors.
mod suspend;
#[cfg(unix)]
pub use self::suspend::TrapHook;
pub use self::suspend::{BlockingHook, NoDebugger, SuspendError, SuspendHook};

/// Watch targets parsed from strings and the environment.
mod watch;
pub use self::watch::WatchTarget;

/// Presentation helpers.
mod color;
pub use self::color::{Painted, Rgb, ansi_color, render_color};

/// Implements the [`WatchwordConfig`] section.
mod config;
pub use self::config::{DEFAULT_DICTIONARY, DEFAULT_ENV_VAR, DEFAULT_SEPARATOR, WatchwordConfig};
