/// Unscramble game module
pub mod game;
pub mod screen;
pub mod state;
pub mod strings;
pub mod view_model;
pub mod words;

pub use game::UnscrambleGame;
pub use state::GameUiState;
pub use view_model::GameViewModel;
pub use words::WordBank;
