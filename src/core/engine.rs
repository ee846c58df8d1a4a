use crate::core::game::{Flow, Game};
use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// Redraw cadence for games that do not tick.
const IDLE_REDRAW: Duration = Duration::from_millis(250);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Drive the game until it asks to exit or the event stream closes.
    /// The caller owns terminal setup and restore.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        let mut events = EventStream::new();
        let tick_rate = self.game.tick_rate();
        let mut ticker = tokio::time::interval(tick_rate.unwrap_or(IDLE_REDRAW));
        let mut last_tick = Instant::now();

        tracing::info!("engine started");

        loop {
            terminal
                .draw(|f| self.game.render(f))
                .context("failed to draw frame")?;

            tokio::select! {
                maybe_event = events.next() => {
                    let Some(event) = maybe_event else {
                        tracing::debug!("event stream closed");
                        break;
                    };
                    let event = event.context("failed to read terminal event")?;
                    if self.dispatch(event) == Flow::Exit {
                        break;
                    }
                }

                _ = ticker.tick() => {
                    if tick_rate.is_some() {
                        let dt = last_tick.elapsed();
                        last_tick = Instant::now();
                        self.game.on_tick(dt);
                    }
                }
            }
        }

        tracing::info!("engine stopped");
        Ok(self.game)
    }

    /// Forward a terminal event to the game. Only key presses reach it;
    /// resize and focus events just trigger the next redraw.
    pub fn dispatch(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.game.handle_input(key),
            _ => Flow::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[derive(Default)]
    struct Recorder {
        keys: Vec<KeyCode>,
    }

    impl Game for Recorder {
        fn handle_input(&mut self, event: KeyEvent) -> Flow {
            self.keys.push(event.code);
            if event.code == KeyCode::Esc {
                Flow::Exit
            } else {
                Flow::Continue
            }
        }

        fn render(&self, _frame: &mut ratatui::Frame) {}
    }

    #[test]
    fn dispatch_forwards_key_presses() {
        let mut engine = Engine::new(Recorder::default());
        let flow = engine.dispatch(Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert_eq!(flow, Flow::Continue);
        let flow = engine.dispatch(Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert_eq!(flow, Flow::Exit);
        assert_eq!(engine.game().keys, vec![KeyCode::Char('a'), KeyCode::Esc]);
    }

    #[test]
    fn dispatch_ignores_releases_and_resizes() {
        let mut engine = Engine::new(Recorder::default());
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert_eq!(engine.dispatch(Event::Key(release)), Flow::Continue);
        assert_eq!(engine.dispatch(Event::Resize(80, 24)), Flow::Continue);
        assert!(engine.game().keys.is_empty());
    }
}
