use crate::TokenSource;
use parking_lot::Mutex;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::{debug, info};

/// Implements the [`GroupSeed`] derived from a group name.
pub mod seed;
use self::seed::GroupSeed;

/// A named, deterministic token generator.
///
/// The group draws tokens from an ordered list of [`TokenSource`]s. Each
/// source is consumed in full before the next one is touched: its tokens are
/// shuffled with a PRNG seeded from the group name and handed out one by one,
/// never repeating. Once every source has run dry, the group enters the
/// terminal **fallback mode** and counts upwards from `"1"`.
///
/// Two groups with the same name and the same sources produce the same
/// sequence, in this process or any other.
///
/// All methods take `&self`: the mutable state sits behind a per-group lock,
/// so concurrent draws on the same group are serialized while different groups
/// stay independent.
pub struct TokenGroup {
    name: Arc<str>,
    seed: GroupSeed,
    state: Mutex<GroupState>,
}

/// The mutable part of a [`TokenGroup`].
struct GroupState {
    sources: VecDeque<Arc<dyn TokenSource>>,
    pool: Vec<String>,
    rng: Pcg64Mcg,
    fallback: u64,
    current: Option<String>,
}

impl TokenGroup {
    /// Creates a group with the given `name`, drawing from `sources` in the
    /// order they are given.
    pub fn new<I>(name: impl AsRef<str>, sources: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn TokenSource>>,
    {
        let name = name.as_ref();
        let seed = GroupSeed::derive(name);
        let state = GroupState {
            sources: sources.into_iter().collect(),
            pool: Vec::new(),
            rng: Pcg64Mcg::from_seed(seed.prng_seed()),
            fallback: 0,
            current: None,
        };

        Self {
            name: Arc::from(name),
            seed,
            state: Mutex::new(state),
        }
    }

    /// Reports the name of this group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reports the seed derived from the name of this group.
    pub fn seed(&self) -> &GroupSeed {
        &self.seed
    }

    /// Draws the next token, advancing the sequence.
    pub fn draw(&self) -> String {
        self.state.lock().draw(&self.name)
    }

    /// Returns the most recently drawn token without advancing the sequence,
    /// or [`None`] if nothing has been drawn yet.
    pub fn peek(&self) -> Option<String> {
        self.state.lock().current.clone()
    }

    /// Reports whether this group has entered the fallback mode.
    pub fn is_exhausted(&self) -> bool {
        self.state.lock().fallback > 0
    }
}

impl GroupState {
    fn draw(&mut self, name: &str) -> String {
        let token = match self.pool.pop() {
            Some(token) => token,
            None => match self.refill(name) {
                Some(token) => token,
                None => self.count(name),
            },
        };

        self.current = Some(token.clone());

        token
    }

    /// Consumes sources in order until one yields a non-empty pool, and pops
    /// the first token from it.
    fn refill(&mut self, name: &str) -> Option<String> {
        while let Some(source) = self.sources.pop_front() {
            let mut pool = source.produce();
            shuffle(&mut pool, &mut self.rng);

            debug!(
                group = name,
                count = pool.len(),
                remaining_sources = self.sources.len(),
                "Refilled token pool",
            );

            self.pool = pool;

            if let Some(token) = self.pool.pop() {
                return Some(token);
            }
        }

        None
    }

    fn count(&mut self, name: &str) -> String {
        if self.fallback == 0 {
            info!(group = name, "All token sources exhausted; switching to numbers");
        }

        self.fallback += 1;

        self.fallback.to_string()
    }
}

/// Shuffles `pool` in place (Durstenfeld), drawing one raw `u64` per swap.
///
/// The resulting order depends on the generator output alone, not on any
/// sampling algorithm of `rand`.
fn shuffle(pool: &mut [String], rng: &mut Pcg64Mcg) {
    for i in (1..pool.len()).rev() {
        let j = rng.next_u64() % (i as u64 + 1);
        pool.swap(i, j as usize);
    }
}

impl Debug for TokenGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();

        f.debug_struct("TokenGroup")
            .field("name", &self.name)
            .field("seed", &self.seed)
            .field("pool", &state.pool.len())
            .field("sources", &state.sources.len())
            .field("fallback", &state.fallback)
            .field("current", &state.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuiltinSource, StaticSource};
    use pretty_assertions::{assert_eq, assert_ne};
    use std::collections::BTreeSet;

    fn static_source(words: &[&str]) -> Arc<dyn TokenSource> {
        Arc::new(StaticSource::new(words))
    }

    fn empty_source() -> Arc<dyn TokenSource> {
        Arc::new(Vec::<String>::new)
    }

    fn draw_n(group: &TokenGroup, n: usize) -> Vec<String> {
        (0..n).map(|_| group.draw()).collect()
    }

    #[test]
    fn two_words_then_numbers() {
        // Given
        let group = TokenGroup::new("g", [static_source(&["able", "baker"]), empty_source()]);

        // When
        let tokens = draw_n(&group, 4);

        // Then
        let words = tokens[..2].iter().cloned().collect::<BTreeSet<_>>();
        assert_eq!(words, BTreeSet::from(["able".to_string(), "baker".to_string()]));
        assert_eq!(tokens[2], "1");
        assert_eq!(tokens[3], "2");
        assert!(group.is_exhausted());
    }

    #[test]
    fn pinned_sequence() {
        // Given
        let group = TokenGroup::new("g", [static_source(&["able", "baker"])]);

        // When
        let tokens = draw_n(&group, 4);

        // Then
        assert_eq!(tokens, vec!["able", "baker", "1", "2"]);
    }

    #[test]
    fn pinned_builtin_sequence() {
        // Given
        let unnamed = TokenGroup::new("", [Arc::new(BuiltinSource) as Arc<dyn TokenSource>]);
        let demo = TokenGroup::new("demo", [Arc::new(BuiltinSource) as Arc<dyn TokenSource>]);

        // When
        let unnamed_tokens = draw_n(&unnamed, 5);
        let demo_tokens = draw_n(&demo, 3);

        // Then
        assert_eq!(unnamed_tokens, vec!["kettle", "student", "monkey", "form", "official"]);
        assert_eq!(demo_tokens, vec!["person", "student", "name"]);
    }

    #[test]
    fn deterministic_per_name() {
        // Given
        let words = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf"];
        let group_a = TokenGroup::new("same", [static_source(&words)]);
        let group_b = TokenGroup::new("same", [static_source(&words)]);

        // When
        let tokens_a = draw_n(&group_a, 10);
        let tokens_b = draw_n(&group_b, 10);

        // Then
        assert_eq!(tokens_a, tokens_b);
    }

    #[test]
    fn distinct_until_exhaustion() {
        // Given
        let first = ["one", "two", "three", "four"];
        let second = ["five", "six", "seven"];
        let group = TokenGroup::new("distinct", [static_source(&first), static_source(&second)]);

        // When
        let tokens = draw_n(&group, 9);

        // Then
        let distinct = tokens[..7].iter().collect::<BTreeSet<_>>();
        assert_eq!(distinct.len(), 7);
        assert_eq!(&tokens[7..], &["1", "2"]);
    }

    #[test]
    fn sources_consumed_in_registration_order() {
        // Given
        let first = ["one", "two", "three"];
        let second = ["four", "five"];
        let group = TokenGroup::new("ordered", [static_source(&first), static_source(&second)]);

        // When
        let tokens = draw_n(&group, 5);

        // Then
        assert!(tokens[..3].iter().all(|token| first.contains(&token.as_str())));
        assert!(tokens[3..].iter().all(|token| second.contains(&token.as_str())));
    }

    #[test]
    fn empty_sources_are_skipped() {
        // Given
        let group = TokenGroup::new(
            "skip",
            [empty_source(), static_source(&["only"]), empty_source()],
        );

        // When
        let tokens = draw_n(&group, 3);

        // Then
        assert_eq!(tokens, vec!["only", "1", "2"]);
    }

    #[test]
    fn no_sources_counts_immediately() {
        // Given
        let group = TokenGroup::new("bare", Vec::new());

        // When
        let tokens = draw_n(&group, 3);

        // Then
        assert_eq!(tokens, vec!["1", "2", "3"]);
    }

    #[test]
    fn peek_does_not_advance() {
        // Given
        let group = TokenGroup::new("peek", [static_source(&["x", "y", "z"])]);

        // When
        let before = group.peek();
        let drawn = group.draw();
        let peeked_a = group.peek();
        let peeked_b = group.peek();

        // Then
        assert_eq!(before, None);
        assert_eq!(peeked_a, Some(drawn.clone()));
        assert_eq!(peeked_b, Some(drawn.clone()));
        assert_ne!(group.draw(), drawn);
    }

    #[test]
    fn concurrent_draws_never_repeat() {
        // Given
        let words = (0..200).map(|i| format!("w{:03}", i)).collect::<Vec<_>>();
        let source: Arc<dyn TokenSource> = Arc::new(StaticSource::new(&words));
        let group = Arc::new(TokenGroup::new("threads", [source]));

        // When
        let handles = (0..4)
            .map(|_| {
                let group = Arc::clone(&group);
                std::thread::spawn(move || draw_n(&group, 50))
            })
            .collect::<Vec<_>>();
        let tokens = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();

        // Then
        let distinct = tokens.iter().collect::<BTreeSet<_>>();
        assert_eq!(distinct.len(), 200);
        assert_eq!(group.draw(), "1");
    }
}
