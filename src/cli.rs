use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

use crate::config::{FileConfig, GameConfig};
use crate::core::engine::Engine;
use crate::core::terminal::TerminalSession;
use crate::games::unscramble::{GameViewModel, UnscrambleGame};

#[derive(Parser, Debug)]
#[command(name = "unscramble")]
#[command(about = "🔤 Unscramble the word in your terminal")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub play: PlayArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game (default)
    Play(PlayArgs),
    /// Print the active word bank
    Words {
        /// JSON config file with a custom word list
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Number of words per game
    #[arg(short, long)]
    pub rounds: Option<usize>,

    /// Points awarded for a correct guess
    #[arg(short, long)]
    pub score_increase: Option<u32>,

    /// Seed for word selection and shuffling
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON config file (max_words, score_increase, words)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl PlayArgs {
    /// Config file first, then flags on top
    pub fn resolve_config(&self) -> Result<GameConfig> {
        let mut file = load_file_config(self.config.as_ref())?;
        if self.rounds.is_some() {
            file.max_words = self.rounds;
        }
        if self.score_increase.is_some() {
            file.score_increase = self.score_increase;
        }
        GameConfig::from_file(file)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

fn load_file_config(path: Option<&PathBuf>) -> Result<FileConfig> {
    match path {
        Some(path) => FileConfig::load(path),
        None => Ok(FileConfig::default()),
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => play(args).await,
        Some(Commands::Words { config }) => {
            let config = GameConfig::from_file(load_file_config(config.as_ref())?)?;
            println!("📚 {} words:", config.words.len());
            for word in config.words.words() {
                println!("  • {}", word);
            }
            Ok(())
        }
        None => play(cli.play).await,
    }
}

async fn play(args: PlayArgs) -> Result<()> {
    crate::logging::init(args.log_file.as_deref())?;
    let config = args.resolve_config()?;
    tracing::info!(
        max_words = config.max_words,
        score_increase = config.score_increase,
        bank = config.words.len(),
        "starting unscramble"
    );

    let game = UnscrambleGame::new(GameViewModel::new(config, args.rng()));
    let mut terminal = TerminalSession::enter();
    let finished = Engine::new(game).run(&mut terminal).await?;
    drop(terminal);

    let state = finished.view_model().ui_state();
    if state.is_game_over {
        println!("🏁 Final score: {}", state.score);
    } else {
        println!("👋 Score: {} after {} words", state.score, state.current_word_count);
    }
    Ok(())
}
