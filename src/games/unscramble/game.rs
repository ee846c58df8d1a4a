use crate::core::game::{Flow, Game};
use crate::games::unscramble::screen::{self, ScreenView};
use crate::games::unscramble::view_model::GameViewModel;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Terminal front-end for [`GameViewModel`]: turns keys into actions
pub struct UnscrambleGame {
    view_model: GameViewModel,
    elapsed: Duration,
}

impl UnscrambleGame {
    pub fn new(view_model: GameViewModel) -> Self {
        Self {
            view_model,
            elapsed: Duration::ZERO,
        }
    }

    pub fn view_model(&self) -> &GameViewModel {
        &self.view_model
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn handle_playing(&mut self, event: KeyEvent) -> Flow {
        match event.code {
            KeyCode::Esc => return Flow::Exit,
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => return Flow::Exit,
            KeyCode::Enter => self.view_model.check_user_guess(),
            KeyCode::Tab => self.view_model.skip_word(),
            KeyCode::Backspace => {
                let mut guess = self.view_model.user_guess().to_string();
                guess.pop();
                self.view_model.update_user_guess(guess);
            }
            KeyCode::Char(c) if !c.is_control() => {
                let guess = format!("{}{}", self.view_model.user_guess(), c);
                self.view_model.update_user_guess(guess);
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Keys while the final score dialog is up
    fn handle_game_over(&mut self, event: KeyEvent) -> Flow {
        match event.code {
            KeyCode::Esc | KeyCode::Char('e') => Flow::Exit,
            KeyCode::Enter | KeyCode::Char('p') => {
                self.view_model.reset_game();
                self.elapsed = Duration::ZERO;
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }
}

impl Game for UnscrambleGame {
    fn handle_input(&mut self, event: KeyEvent) -> Flow {
        if self.view_model.ui_state().is_game_over {
            self.handle_game_over(event)
        } else {
            self.handle_playing(event)
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        let view = ScreenView {
            state: self.view_model.ui_state(),
            user_guess: self.view_model.user_guess(),
            max_words: self.view_model.max_words(),
            elapsed: self.elapsed,
        };
        screen::render(frame, &view);
    }

    // Drives the clock in the status bar
    fn tick_rate(&self) -> Option<Duration> {
        Some(Duration::from_secs(1))
    }

    fn on_tick(&mut self, dt: Duration) {
        if !self.view_model.ui_state().is_game_over {
            self.elapsed += dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::games::unscramble::words::WordBank;
    use rand::{rngs::StdRng, SeedableRng};

    fn game(words: &[&str], max_words: usize) -> UnscrambleGame {
        let config = GameConfig {
            max_words,
            score_increase: 20,
            words: WordBank::new(words.iter().copied()).unwrap(),
        };
        UnscrambleGame::new(GameViewModel::new(config, StdRng::seed_from_u64(42)))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(game: &mut UnscrambleGame, word: &str) {
        for c in word.chars() {
            assert_eq!(game.handle_input(key(KeyCode::Char(c))), Flow::Continue);
        }
    }

    #[test]
    fn typing_and_backspace_edit_the_guess() {
        let mut game = game(&["crab"], 1);
        type_word(&mut game, "crax");
        game.handle_input(key(KeyCode::Backspace));
        type_word(&mut game, "b");
        assert_eq!(game.view_model().user_guess(), "crab");
    }

    #[test]
    fn enter_submits_and_tab_skips() {
        let mut game = game(&["crab", "ferris", "cargo"], 3);
        let answer = game.view_model().current_word().to_string();
        type_word(&mut game, &answer);
        game.handle_input(key(KeyCode::Enter));
        assert_eq!(game.view_model().ui_state().score, 20);
        assert_eq!(game.view_model().ui_state().current_word_count, 2);

        game.handle_input(key(KeyCode::Tab));
        assert_eq!(game.view_model().ui_state().score, 20);
        assert_eq!(game.view_model().ui_state().current_word_count, 3);
    }

    #[test]
    fn escape_quits_while_playing() {
        let mut game = game(&["crab"], 1);
        assert_eq!(game.handle_input(key(KeyCode::Esc)), Flow::Exit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(game.handle_input(ctrl_c), Flow::Exit);
    }

    #[test]
    fn dialog_keys_play_again_or_exit() {
        let mut game = game(&["crab"], 1);
        game.handle_input(key(KeyCode::Tab));
        assert!(game.view_model().ui_state().is_game_over);

        // Letters do not leak into the guess while the dialog is open
        game.handle_input(key(KeyCode::Char('x')));
        assert_eq!(game.view_model().user_guess(), "");

        game.on_tick(Duration::from_secs(5));
        assert_eq!(game.elapsed(), Duration::ZERO);

        assert_eq!(game.handle_input(key(KeyCode::Char('p'))), Flow::Continue);
        assert!(!game.view_model().ui_state().is_game_over);
        assert_eq!(game.view_model().ui_state().current_word_count, 1);

        game.handle_input(key(KeyCode::Tab));
        assert_eq!(game.handle_input(key(KeyCode::Char('q'))), Flow::Continue);
        assert!(game.view_model().ui_state().is_game_over);
        assert_eq!(game.handle_input(key(KeyCode::Char('e'))), Flow::Exit);
    }

    #[test]
    fn ticks_accumulate_while_playing() {
        let mut game = game(&["crab"], 1);
        game.on_tick(Duration::from_secs(1));
        game.on_tick(Duration::from_secs(2));
        assert_eq!(game.elapsed(), Duration::from_secs(3));
    }
}
