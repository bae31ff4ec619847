#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

/// Implements the [`TracingConfig`] configuration section.
mod config;
pub use self::config::TracingConfig;
pub use self::config::verbosity::Verbosity;

/// Implements the formatted `tracing` layer.
mod fmt;
pub use self::fmt::make_layer;

/// Implements the [`TracingSink`].
mod sink;
pub use self::sink::{TARGET, TracingSink};

/// Implements the one-call setup of a context.
mod init;
pub use self::init::{attach, init};

/// Partly re-exports the public API of `tracing_*` for convenience.
pub use tracing_core::{Level, Subscriber};
pub use tracing_subscriber::Registry;
pub use tracing_subscriber::layer::SubscriberExt;
pub use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
