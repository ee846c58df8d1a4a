//! User-facing text for the unscramble screen

pub const APP_NAME: &str = "Unscramble";
pub const INSTRUCTIONS: &str = "Unscramble the word using all the letters.";
pub const ENTER_YOUR_WORD: &str = "Enter your word";
pub const WRONG_GUESS: &str = "Wrong guess!";
pub const SKIP: &str = "Skip";
pub const SUBMIT: &str = "Submit";
pub const CONGRATULATIONS: &str = "Congratulations!";
pub const EXIT: &str = "Exit";
pub const PLAY_AGAIN: &str = "Play Again";

pub fn word_count(count: usize, max: usize) -> String {
    format!("Word count: {count}/{max}")
}

pub fn score(score: u32) -> String {
    format!("Score: {score}")
}

pub fn you_scored(score: u32) -> String {
    format!("You scored: {score}")
}

pub fn elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
