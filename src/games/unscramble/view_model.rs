use crate::config::GameConfig;
use crate::games::unscramble::state::GameUiState;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;

/// Holds the game state and applies player actions to it.
///
/// Each action replaces the [`GameUiState`] snapshot; the screen only ever
/// reads the latest one. The text-field content lives outside the snapshot
/// since it changes on every keystroke.
pub struct GameViewModel {
    config: GameConfig,
    rng: StdRng,
    ui_state: GameUiState,
    current_word: String,
    used_words: HashSet<String>,
    user_guess: String,
}

impl GameViewModel {
    /// Create a view model with a first word already on screen
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let mut vm = Self {
            config,
            rng,
            ui_state: GameUiState::default(),
            current_word: String::new(),
            used_words: HashSet::new(),
            user_guess: String::new(),
        };
        vm.reset_game();
        vm
    }

    pub fn ui_state(&self) -> &GameUiState {
        &self.ui_state
    }

    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    /// The unscrambled answer for the current round
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn max_words(&self) -> usize {
        self.config.max_words
    }

    pub fn update_user_guess(&mut self, guess: impl Into<String>) {
        self.user_guess = guess.into();
    }

    /// Compare the typed guess with the current word, ignoring case and
    /// surrounding whitespace.
    /// The guess field is cleared either way.
    pub fn check_user_guess(&mut self) {
        if self.ui_state.is_game_over {
            return;
        }

        // Bank words are stored lowercase
        if self.user_guess.trim().to_lowercase() == self.current_word {
            let updated_score = self.ui_state.score + self.config.score_increase;
            tracing::info!(word = %self.current_word, score = updated_score, "correct guess");
            self.update_game_state(updated_score);
        } else {
            tracing::debug!(guess = %self.user_guess, "wrong guess");
            self.ui_state = GameUiState {
                is_guessed_word_wrong: true,
                ..self.ui_state.clone()
            };
        }
        self.update_user_guess("");
    }

    pub fn skip_word(&mut self) {
        if self.ui_state.is_game_over {
            return;
        }
        tracing::info!(word = %self.current_word, "word skipped");
        self.update_game_state(self.ui_state.score);
        self.update_user_guess("");
    }

    /// Start over: fresh word, round 1, zero score
    pub fn reset_game(&mut self) {
        self.used_words.clear();
        self.user_guess.clear();
        let scrambled = self.pick_random_word_and_shuffle();
        self.ui_state = GameUiState::first_round(scrambled);
        tracing::info!(max_words = self.config.max_words, "new game");
    }

    /// Move to the next round, or end the game once every round was played
    fn update_game_state(&mut self, updated_score: u32) {
        // Rounds played, not words used: the repeat fallback below clears used_words
        if self.ui_state.current_word_count >= self.config.max_words {
            tracing::info!(score = updated_score, "game over");
            self.ui_state = GameUiState {
                is_guessed_word_wrong: false,
                score: updated_score,
                is_game_over: true,
                ..self.ui_state.clone()
            };
        } else {
            let scrambled = self.pick_random_word_and_shuffle();
            self.ui_state = GameUiState {
                current_scrambled_word: scrambled,
                current_word_count: self.ui_state.current_word_count + 1,
                score: updated_score,
                is_guessed_word_wrong: false,
                is_game_over: false,
            };
        }
    }

    fn pick_random_word_and_shuffle(&mut self) -> String {
        let unused: Vec<&String> = self
            .config
            .words
            .words()
            .iter()
            .filter(|w| !self.used_words.contains(*w))
            .collect();

        let picked = match unused.choose(&mut self.rng) {
            Some(word) => (*word).clone(),
            None => {
                // Only reachable with an unvalidated config whose bank is
                // smaller than max_words.
                tracing::warn!("word bank exhausted, allowing repeats");
                self.used_words.clear();
                self.config
                    .words
                    .words()
                    .choose(&mut self.rng)
                    .cloned()
                    .unwrap_or_default()
            }
        };

        self.used_words.insert(picked.clone());
        let scrambled = shuffle_word(&picked, &mut self.rng);
        self.current_word = picked;
        scrambled
    }
}

/// Random permutation of `word` that differs from it when such a permutation
/// exists. Words with fewer than two distinct letters come back unchanged.
pub fn shuffle_word<R: rand::Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    if !letters.windows(2).any(|pair| pair[0] != pair[1]) {
        return word.to_string();
    }

    loop {
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if candidate != word {
            return candidate;
        }
    }
}
