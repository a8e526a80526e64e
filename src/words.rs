//! Built-in word list for memorable passwords.

pub const DEFAULT_WORDS: &[&str] = &[
    "apple", "banana", "cherry", "dog", "elephant", "flower", "garden", "house", "island",
    "jungle", "king", "lion", "mountain", "night", "ocean", "piano", "queen", "river", "sun",
    "tree", "umbrella", "violet", "water", "xylophone", "yellow", "zebra", "air", "bird", "cat",
    "desk", "earth", "fire", "grass", "heart", "ice", "jacket", "kite", "light", "moon", "note",
    "orange", "paper", "quiet", "rain", "star", "time", "unit", "voice", "wind", "year", "zone",
    "book", "chair", "door", "edge", "fish", "glass", "hat", "ink", "jump", "key", "lamp", "map",
    "nest", "open", "park", "quiz", "road", "ship", "train", "user", "view", "wall", "xray",
    "yarn",
];

/// Uppercases the first character of `word`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
