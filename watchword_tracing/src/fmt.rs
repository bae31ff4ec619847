use crate::TracingConfig;
use tracing_core::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::Layer as FmtLayer;
use tracing_subscriber::fmt::layer as make_fmt_layer;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

/// Creates a [formatted `Layer`](FmtLayer) based on the given
/// [config](TracingConfig).
pub fn make_layer<S>(config: impl AsRef<TracingConfig>) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    Targets: Filter<S>,
{
    let config = config.as_ref();
    let targets = make_targets(config);

    let base_layer: FmtLayer<S> = make_fmt_layer()
        .with_ansi(config.color())
        .with_target(config.show_target());

    if config.show_timestamp() {
        Box::new(base_layer.with_filter(targets))
    } else {
        Box::new(base_layer.without_time().with_filter(targets))
    }
}

/// Filters token events by the token level and everything else by the
/// configured verbosity, with per-target entries taking precedence.
fn make_targets(config: &TracingConfig) -> Targets {
    Targets::new()
        .with_default(config.verbosity())
        .with_targets(config.resolved_targets())
}
