use crate::{TracingConfig, TracingSink, make_layer};
use std::sync::Arc;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use watchword_core::Context;

/// Installs the [formatted layer](make_layer) as the global `tracing`
/// subscriber, then [attaches](attach) a [`TracingSink`] to the given
/// context.
///
/// Fails if a global subscriber is already set. The context is left untouched
/// in that case.
pub fn init(context: &Context, config: impl AsRef<TracingConfig>) -> Result<(), TryInitError> {
    let config = config.as_ref();

    Registry::default().with(make_layer(config)).try_init()?;
    attach(context, config);

    Ok(())
}

/// Replaces the default sink of the given context with a [`TracingSink`] at
/// the configured [token level](TracingConfig::tokens). Leaves the context
/// alone, and reports `false`, if that level is
/// [`Off`](crate::Verbosity::Off).
pub fn attach(context: &Context, config: impl AsRef<TracingConfig>) -> bool {
    match TracingSink::from_config(config) {
        Some(sink) => {
            context.set_default_sink(Arc::new(sink));
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Verbosity;
    use watchword_core::WatchwordConfig;

    fn make_context() -> Context {
        Context::new(WatchwordConfig::default().with_dictionary(None))
    }

    #[test]
    fn attach_replaces_sink() {
        // Given
        let context = make_context();
        let before = context.default_sink();

        // When
        let attached = attach(&context, TracingConfig::default());

        // Then
        assert!(attached);
        assert!(!Arc::ptr_eq(&before, &context.default_sink()));
    }

    #[test]
    fn attach_off_keeps_sink() {
        // Given
        let context = make_context();
        let before = context.default_sink();

        // When
        let attached = attach(&context, TracingConfig::default().with_tokens(Verbosity::Off));

        // Then
        assert!(!attached);
        assert!(Arc::ptr_eq(&before, &context.default_sink()));
    }
}
