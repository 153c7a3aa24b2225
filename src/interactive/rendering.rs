//! TUI rendering with ratatui
//!
//! Board, palette and the how-to / result popups.

use super::app::{App, InputMode, MessageStyle};
use crate::commands::HOW_TO_PLAY;
use crate::core::{MAX_GUESSES, PALETTE};
use crate::game::GameStatus;
use crate::output::formatters::{format_feedback, format_row};
use crate::puzzle::{format_countdown, time_until_next_puzzle};
use crate::storage::Store;
use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: Store>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(13),    // Board + side panel
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    match app.input_mode {
        InputMode::HowTo => render_how_to(f),
        InputMode::Result => render_result(f, app),
        InputMode::Playing => {}
    }
}

fn render_header<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let day = app.session.day();
    let header = Paragraph::new(format!(
        "🧪 FORMULAIC #{}  ·  {}",
        day.puzzle_number(),
        day.seed()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_board<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let state = app.session.state();
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for (i, (guess, feedback)) in state.history().enumerate() {
        let feedback_style = if feedback.is_solved() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2} ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(format_row(guess.symbols())),
            Span::raw("  "),
            Span::styled(format_feedback(*feedback), feedback_style),
        ]));
    }

    let mut row = state.attempts();
    if !state.is_complete() && row < MAX_GUESSES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>2} ", row + 1),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format_row(state.current_guess())),
            Span::styled("  ◀", Style::default().fg(Color::Yellow)),
        ]));
        row += 1;
    }

    for i in row..MAX_GUESSES {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2} ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(format_row(&[]), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Palette
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_palette(f, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_palette(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = PALETTE
        .chunks(4)
        .map(|row| {
            Line::from(
                row.iter()
                    .flat_map(|symbol| {
                        [
                            Span::styled(
                                format!(" {} ", symbol.digit()),
                                Style::default()
                                    .fg(Color::Yellow)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(format!("{}  ", symbol.glyph())),
                        ]
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let palette = Paragraph::new(lines).block(
        Block::default()
            .title(" Palette ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(palette, area);
}

fn render_messages<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats = app.session.stats();
    let stats_text = format!(
        "Played: {} | Win: {}% | Streak: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let countdown = format!(
        "Next puzzle in {}",
        format_countdown(time_until_next_puzzle(&Local::now()))
    );
    f.render_widget(
        Paragraph::new(countdown).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.session.state().is_complete() {
        "q: Quit | s: Results | ?: How to play"
    } else {
        "1-8: Type | ⌫: Delete | Enter: Submit | ?: Help | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_how_to(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    let mut lines: Vec<Line> = HOW_TO_PLAY.iter().map(|l| Line::from(*l)).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to start",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" How to play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_result<S: Store>(f: &mut Frame, app: &App<S>) {
    let area = centered_rect(70, 90, f.area());
    let state = app.session.state();
    let stats = app.session.stats();

    let (title, color) = match state.status() {
        GameStatus::Won => (
            format!(" 🎉 You Win! {}/{MAX_GUESSES} ", state.attempts()),
            Color::Green,
        ),
        GameStatus::Lost => (" So Close! ".to_string(), Color::Red),
        GameStatus::InProgress => (" Results ".to_string(), Color::Cyan),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let share = app.share_text();
    let share_height = u16::try_from(share.lines().count()).unwrap_or(u16::MAX);

    let mut constraints = vec![
        Constraint::Length(2), // Solution + countdown
        Constraint::Length(1), // Totals
    ];
    constraints.extend([Constraint::Length(1); MAX_GUESSES]);
    constraints.push(Constraint::Min(share_height.saturating_add(1)));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let solution = app
        .session
        .revealed_secret()
        .map_or_else(String::new, ToString::to_string);
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Solution: "),
            Span::styled(solution, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(format!(
            "Next puzzle in {}",
            format_countdown(time_until_next_puzzle(&Local::now()))
        )),
    ])
    .style(Style::default().fg(Color::White));
    f.render_widget(header, chunks[0]);

    let totals = Paragraph::new(format!(
        "Played {}  Win {}%  Streak {}  Max {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    ))
    .style(Style::default().fg(Color::Yellow));
    f.render_widget(totals, chunks[1]);

    let widths = stats.distribution_bar_widths();
    for (i, (&count, &width)) in stats.guess_distribution.iter().zip(&widths).enumerate() {
        let highlight = state.is_win() && state.attempts() == i + 1;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(if highlight {
                Color::Green
            } else {
                Color::DarkGray
            }))
            .percent(u16::from(width))
            .label(format!("{}: {count}", i + 1));
        f.render_widget(gauge, chunks[2 + i]);
    }

    let share_widget = Paragraph::new(share)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::TOP),
        );
    f.render_widget(share_widget, chunks[2 + MAX_GUESSES]);
}

/// Rectangle of the given percentage size centred in `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
