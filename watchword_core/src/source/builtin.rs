use super::{TokenSource, normalize};
use std::collections::BTreeSet;

/// The built-in baseline words, drawn before any file-backed dictionary so
/// that short, memorable tokens come first.
pub const BUILTIN_WORDS: &[&str] = &[
    "time", "year", "people", "way", "day", "man", "thing", "woman", "life", "child",
    "world", "school", "state", "family", "student", "group", "country", "problem",
    "hand", "part", "place", "case", "week", "company", "system", "program",
    "question", "work", "government", "number", "night", "point", "home", "water",
    "room", "mother", "area", "money", "story", "fact", "month", "lot", "right",
    "study", "book", "eye", "job", "word", "business", "issue", "side", "kind", "head",
    "house", "service", "friend", "father", "power", "hour", "game", "line", "end",
    "member", "law", "car", "city", "community", "name", "president", "team", "minute",
    "idea", "kid", "body", "information", "back", "parent", "face", "others", "level",
    "office", "door", "health", "person", "art", "war", "history", "party", "result",
    "change", "morning", "reason", "research", "girl", "guy", "moment", "air",
    "teacher", "force", "education", "foot", "boy", "age", "policy", "music", "market",
    "sense", "nation", "plan", "college", "interest", "death", "experience", "effect",
    "class", "control", "care", "field", "development", "role", "effort", "rate",
    "heart", "drug", "show", "leader", "light", "voice", "wife", "police", "mind",
    "price", "report", "decision", "son", "view", "relationship", "town", "road",
    "arm", "difference", "value", "building", "action", "model", "season", "society",
    "tax", "director", "position", "player", "record", "paper", "space", "ground",
    "form", "event", "official", "matter", "center", "couple", "site", "project",
    "activity", "star", "table", "need", "court", "oil", "situation", "cost",
    "industry", "figure", "street", "image", "phone", "data", "picture", "practice",
    "piece", "land", "product", "doctor", "wall", "patient", "worker", "news", "test",
    "movie", "north", "love", "support", "technology", "step", "baby", "computer",
    "type", "attention", "film", "tree", "source", "organization", "hair", "window",
    "evidence", "population", "truth", "song", "river", "bird", "stone", "apple",
    "bread", "cloud", "ocean", "forest", "garden", "bridge", "candle", "castle",
    "dragon", "engine", "feather", "glass", "honey", "island", "jacket", "kettle",
    "ladder", "lemon", "marble", "needle", "orange", "pepper", "pillow", "planet",
    "rabbit", "saddle", "shadow", "spider", "tiger", "tunnel", "velvet", "wagon",
    "whistle", "wizard", "yellow", "zebra", "anchor", "basket", "button", "camera",
    "circle", "copper", "desert", "eagle", "falcon", "ginger", "hammer", "helmet",
    "jungle", "kitten", "lantern", "magnet", "meadow", "mirror", "monkey", "napkin",
    "noodle", "pencil", "pirate", "puzzle", "rocket", "salmon", "silver", "sponge",
    "summer", "thunder", "ticket", "tomato", "turtle", "violin", "walnut", "winter",
];

/// A [`TokenSource`] over [`BUILTIN_WORDS`]. Requires no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    /// Returns the normalized built-in words as a set, suitable as the
    /// exclusion set of a [`FileSource`](super::FileSource) that must stay
    /// disjoint from this source.
    pub fn word_set() -> BTreeSet<String> {
        BuiltinSource.produce().into_iter().collect()
    }
}

impl TokenSource for BuiltinSource {
    fn produce(&self) -> Vec<String> {
        normalize(BUILTIN_WORDS, &BTreeSet::new())
    }
}
