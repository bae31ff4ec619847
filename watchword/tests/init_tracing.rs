#[cfg(all(test, feature = "tracing"))]
mod tests {
    use watchword::Options;
    use watchword::tracing::{TracingConfig, Verbosity};

    /// Sets the process-wide subscriber, so this file holds a single test.
    #[test]
    fn init_tracing_once() {
        // Given
        let config = TracingConfig::default().with_tokens(Verbosity::Debug);

        // When
        let first = watchword::init_tracing(&config);
        let second = watchword::init_tracing(&config);
        let logged = watchword::log(Default::default(), Options::default().group("traced"));

        // Then
        assert!(first.is_ok());
        assert!(second.is_err());
        assert!(logged.token().is_some());
    }
}
