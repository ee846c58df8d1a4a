use anyhow::{bail, Result};
use std::collections::BTreeSet;

/// Built-in word bank
pub const ALL_WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise", "balloon",
    "basket", "bench", "best", "birthday", "book", "briefcase", "camera", "camping",
    "candle", "cat", "cauliflower", "chat", "children", "class", "classic", "classroom",
    "coffee", "colorful", "cookie", "creative", "cruise", "dance", "daytime", "dinosaur",
    "doorknob", "dine", "dream", "dusk", "eating", "elephant", "emerald", "eerie",
    "electric", "finish", "flowers", "follow", "fox", "frame", "free", "frequent",
    "funnel", "green", "guitar", "grocery", "glass", "great", "giggle", "haircut",
    "half", "homemade", "happen", "honey", "hurry", "hundred", "ice", "igloo",
    "invest", "invite", "icon", "introduce", "joke", "jovial", "journal", "jump",
    "join", "kangaroo", "keyboard", "kitchen", "koala", "kind", "kaleidoscope",
    "landscape", "late", "laugh", "learning", "lemon", "letter", "lily", "magazine",
    "marine", "marshmallow", "maze", "meditate", "melody", "minute", "monument",
    "moon", "motorcycle", "mountain", "music", "north", "nose", "night", "name",
    "never", "negotiate", "number", "opposite", "octopus", "oak", "order", "open",
    "polar", "pack", "painting", "person", "picnic", "pillow", "pizza", "podcast",
    "presentation", "puppy", "puzzle", "recipe", "release", "restaurant", "revolve",
    "rewind", "room", "run", "secret", "seed", "ship", "shirt", "should", "small",
    "spaceship", "stargazing", "skill", "street", "style", "sunrise", "taxi", "tidy",
    "timer", "together", "tooth", "tourist", "travel", "truck", "under", "useful",
    "unicorn", "unique", "uplift", "uniform", "vase", "violin", "visitor", "vision",
    "volume", "view", "walrus", "wander", "world", "winter", "well", "whirlwind",
    "xylophone", "yoga", "yogurt", "yoyo", "you", "year", "yummy",
    "zebra", "zigzag", "zoology", "zone", "zeal",
];

/// Normalized, de-duplicated list of playable words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a bank from arbitrary entries.
    /// Entries are trimmed and lowercased; blanks and duplicates are dropped.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let mut words = Vec::new();

        for entry in entries {
            let word = entry.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if !word.chars().all(char::is_alphabetic) {
                bail!("word '{}' contains characters other than letters", word);
            }
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            bail!("word bank is empty");
        }

        Ok(Self { words })
    }

    pub fn builtin() -> Self {
        // ALL_WORDS is already normalized (see builtin_words_are_unique_and_valid)
        let words = ALL_WORDS.iter().map(|w| w.to_string()).collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_words_are_unique_and_valid() {
        let bank = WordBank::builtin();
        let rebuilt = WordBank::new(ALL_WORDS).unwrap();
        assert_eq!(bank, rebuilt);
        assert!(bank.len() > 100);
    }

    #[test]
    fn new_normalizes_entries() {
        let bank = WordBank::new(["  Rust ", "rust", "", "CRAB"]).unwrap();
        assert_eq!(bank.words(), &["rust".to_string(), "crab".to_string()]);
    }

    #[test]
    fn new_rejects_non_letters() {
        let err = WordBank::new(["ok", "n0pe"]).unwrap_err();
        assert!(err.to_string().contains("n0pe"));
        assert!(WordBank::new(["x-ray"]).is_err());
    }

    #[test]
    fn new_rejects_empty_bank() {
        assert!(WordBank::new(["", "   "]).is_err());
    }
}
