pub mod cli;
pub mod config;
pub mod logging;

pub mod core {
    pub mod engine;
    pub mod game;
    pub mod terminal;
}

pub mod games;

// Re-export for convenience
pub use crate::core::game::{Flow, Game};
