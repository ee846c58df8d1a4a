/// Screen composition for the unscramble game - pure rendering, no game logic
use crate::games::unscramble::state::GameUiState;
use crate::games::unscramble::strings;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;

/// Everything one frame needs, borrowed from the game
pub struct ScreenView<'a> {
    pub state: &'a GameUiState,
    pub user_guess: &'a str,
    pub max_words: usize,
    pub elapsed: Duration,
}

pub fn render(f: &mut Frame, view: &ScreenView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(f.area());

    render_status(f, chunks[0], view);
    render_scrambled_word(f, chunks[1], view.state);
    render_guess_field(f, chunks[2], view.user_guess, view.state.is_guessed_word_wrong);
    render_buttons(f, chunks[3]);

    f.render_widget(
        Paragraph::new("[Type] Guess  [Enter] Submit  [Tab] Skip  [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );

    if view.state.is_game_over {
        render_final_score_dialog(f, view.state.score);
    }
}

fn render_status(f: &mut Frame, area: Rect, view: &ScreenView) {
    let block = Block::default()
        .title(format!(" {} ", strings::APP_NAME))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [left, middle, right] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(strings::word_count(view.state.current_word_count, view.max_words)),
        left,
    );
    f.render_widget(
        Paragraph::new(strings::elapsed(view.elapsed.as_secs())).alignment(Alignment::Center),
        middle,
    );
    f.render_widget(
        Paragraph::new(strings::score(view.state.score)).alignment(Alignment::Right),
        right,
    );
}

fn render_scrambled_word(f: &mut Frame, area: Rect, state: &GameUiState) {
    let spaced = state
        .current_scrambled_word
        .to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");

    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            spaced,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];

    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().title(format!(" {} ", strings::INSTRUCTIONS)).borders(Borders::ALL)),
        area,
    );
}

fn render_guess_field(f: &mut Frame, area: Rect, guess: &str, is_wrong: bool) {
    let (label, style) = if is_wrong {
        (strings::WRONG_GUESS, Style::default().fg(Color::Red))
    } else {
        (strings::ENTER_YOUR_WORD, Style::default())
    };

    f.render_widget(
        Paragraph::new(format!("> {guess}_")).block(
            Block::default()
                .title(format!(" {label} "))
                .borders(Borders::ALL)
                .border_style(style),
        ),
        area,
    );
}

fn render_buttons(f: &mut Frame, area: Rect) {
    let [skip, submit] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    f.render_widget(
        Paragraph::new(format!("[Tab] {}", strings::SKIP))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        skip,
    );
    f.render_widget(
        Paragraph::new(format!("[Enter] {}", strings::SUBMIT))
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            ),
        submit,
    );
}

fn render_final_score_dialog(f: &mut Frame, score: u32) {
    let area = centered(f.area(), 44, 7);
    let text = vec![
        Line::default(),
        Line::from(strings::you_scored(score)),
        Line::default(),
        Line::from(format!("[Esc] {}    [Enter] {}", strings::EXIT, strings::PLAY_AGAIN)),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .title(format!(" {} ", strings::CONGRATULATIONS))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
