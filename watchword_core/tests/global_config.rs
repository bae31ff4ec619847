#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use watchword_core::{Context, DEFAULT_DICTIONARY, WatchwordConfig};

    /// Touches the process-wide context, so this file holds a single test.
    #[test]
    fn config_applies_only_before_first_use() {
        // Given
        Context::set_global_config(
            WatchwordConfig::default()
                .with_separator('/')
                .with_dictionary(None),
        );

        // When
        let first = Context::global();
        Context::set_global_config(WatchwordConfig::default().with_separator('#'));
        let second = Context::global();
        second.group("").draw();

        // Then
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.config().separator(), '/');
        assert_eq!(second.config().dictionary(), None);
        assert!(!second.files().contains(Path::new(DEFAULT_DICTIONARY)));
    }
}
