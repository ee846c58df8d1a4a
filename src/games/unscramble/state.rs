use serde::{Deserialize, Serialize};

/// Snapshot of everything the screen needs to draw.
/// Never mutated in place: the view model swaps in a new value per action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUiState {
    pub current_scrambled_word: String,
    pub current_word_count: usize,
    pub score: u32,
    pub is_guessed_word_wrong: bool,
    pub is_game_over: bool,
}

impl GameUiState {
    /// State at the start of a game, showing the first scramble
    pub fn first_round(scrambled: String) -> Self {
        Self {
            current_scrambled_word: scrambled,
            current_word_count: 1,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blank() {
        let state = GameUiState::default();
        assert_eq!(state.current_scrambled_word, "");
        assert_eq!(state.current_word_count, 0);
        assert_eq!(state.score, 0);
        assert!(!state.is_guessed_word_wrong);
        assert!(!state.is_game_over);
    }

    #[test]
    fn first_round_starts_counting_at_one() {
        let state = GameUiState::first_round("tsur".into());
        assert_eq!(state.current_word_count, 1);
        assert_eq!(state.current_scrambled_word, "tsur");
        assert_eq!(state.score, 0);
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_value(GameUiState::first_round("tac".into())).unwrap();
        assert_eq!(json["current_scrambled_word"], "tac");
        assert_eq!(json["current_word_count"], 1);
        assert_eq!(json["is_game_over"], false);
    }
}
