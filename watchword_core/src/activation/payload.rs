use std::fmt::Debug;

/// Values attached to an [`Activation`](crate::Activation) for logging.
///
/// Borrowed rather than owned: an activation never outlives the call that
/// created it, and neither does its payload.
#[derive(Debug, Clone, Default)]
pub enum Payload<'a> {
    /// Nothing attached.
    #[default]
    Empty,
    /// A single value.
    Single(&'a dyn Debug),
    /// An ordered sequence of values.
    Many(Vec<&'a dyn Debug>),
}

impl<'a> Payload<'a> {
    /// Attaches a single value.
    pub fn one<T>(value: &'a T) -> Self
    where
        T: Debug,
    {
        Self::Single(value)
    }

    /// Attaches the given values, in order.
    pub fn many(values: impl IntoIterator<Item = &'a dyn Debug>) -> Self {
        Self::Many(values.into_iter().collect())
    }

    /// Returns the attached values as a slice, regardless of representation.
    pub fn as_slice(&self) -> &[&'a dyn Debug] {
        match self {
            Self::Empty => &[],
            Self::Single(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Returns the number of attached values.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Reports whether nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(payload: &Payload) -> Vec<String> {
        payload
            .as_slice()
            .iter()
            .map(|value| format!("{:?}", value))
            .collect()
    }

    #[test]
    fn empty() {
        // When
        let payload = Payload::default();

        // Then
        assert!(payload.is_empty());
        assert_eq!(render(&payload), Vec::<String>::new());
    }

    #[test]
    fn single() {
        // Given
        let value = 42;

        // When
        let payload = Payload::one(&value);

        // Then
        assert_eq!(payload.len(), 1);
        assert_eq!(render(&payload), vec!["42"]);
    }

    #[test]
    fn many_keeps_order() {
        // Given
        let word = "shenanigans";
        let hash = 0xbeef_u32;

        // When
        let payload = Payload::many([&word as &dyn Debug, &hash]);

        // Then
        assert_eq!(payload.len(), 2);
        assert_eq!(render(&payload), vec!["\"shenanigans\"", "48879"]);
    }
}
