//! TUI rendering with ratatui
//!
//! One render function per screen, all consuming read-only app state.

use super::app::{App, Message, MessageStyle};
use crate::catalog::Industry;
use crate::core::MAX_ATTEMPTS;
use crate::session::{Mode, Screen};
use crate::share::{PLAY_URL, share_text, twitter_url, whatsapp_url};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.session.screen() {
        Screen::Home => render_home(f, app),
        Screen::ModeSelect => render_mode_select(f, app),
        Screen::Playing => render_playing(f, app),
        Screen::Result => render_result(f, app),
    }
}

fn screen_chunks(f: &Frame) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Key help
        ])
        .split(f.area())
}

fn render_header(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title)
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

fn render_help(f: &mut Frame, area: Rect, keys: &str) {
    let help = Paragraph::new(keys)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn message_line(message: &Message) -> Line<'_> {
    let color = match message.style {
        MessageStyle::Info => Color::Yellow,
        MessageStyle::Success => Color::Green,
        MessageStyle::Error => Color::Red,
    };
    Line::from(Span::styled(
        message.text.clone(),
        Style::default().fg(color),
    ))
}

fn render_home(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f);
    render_header(f, chunks[0], "🎬 EMOJI MOVIE GUESSING");

    let mut lines = vec![
        Line::from("🧩 Choose a Film Industry").alignment(Alignment::Center),
        Line::from(""),
    ];

    for (i, industry) in Industry::ALL.iter().enumerate() {
        let selected = i == app.menu_cursor;
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(
            Line::from(Span::styled(
                format!("{marker}{}. {} {}", i + 1, industry.badge(), industry.name()),
                style,
            ))
            .alignment(Alignment::Center),
        );
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "✨ Guess movies from emoji clues · Daily challenges · Infinite fun",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );

    let content = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(content, chunks[1]);

    render_help(f, chunks[2], "↑/↓ move · Enter select · 1-4 quick pick · q quit");
}

fn render_mode_select(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f);

    let industry = app.session.industry();
    let title = industry.map_or_else(
        || "Select a Mode".to_string(),
        |i| format!("🎞️ {} {} — Select a Mode", i.badge(), i.name()),
    );
    render_header(f, chunks[0], &title);

    let daily_locked = industry.is_some_and(|i| app.session.daily_completed(i));

    let mut lines = vec![Line::from("")];
    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let daily_marker = if app.menu_cursor == 0 { "▶ " } else { "  " };
    if daily_locked {
        lines.push(
            Line::from(Span::styled(
                format!("{daily_marker}📆 Daily Challenge — Completed ✅"),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(
                "Come back tomorrow for a new challenge",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );
    } else {
        lines.push(
            Line::from(Span::styled(
                format!("{daily_marker}📆 Daily Challenge"),
                if app.menu_cursor == 0 {
                    cursor_style
                } else {
                    Style::default()
                },
            ))
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(
                "One chance per session. Same for everyone.",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );
    }

    lines.push(Line::from(""));
    let infinite_marker = if app.menu_cursor == 1 { "▶ " } else { "  " };
    lines.push(
        Line::from(Span::styled(
            format!("{infinite_marker}♾️ Infinite Mode"),
            if app.menu_cursor == 1 {
                cursor_style
            } else {
                Style::default()
            },
        ))
        .alignment(Alignment::Center),
    );
    lines.push(
        Line::from(Span::styled(
            "Play unlimited emoji puzzles, one after another.",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );

    if let Some(message) = &app.message {
        lines.push(Line::from(""));
        lines.push(message_line(message).alignment(Alignment::Center));
    }

    let content = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(content, chunks[1]);

    render_help(f, chunks[2], "d daily · i infinite · ↑/↓ + Enter · Esc back · q quit");
}

fn render_playing(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Clue
            Constraint::Length(6), // Hints
            Constraint::Length(3), // Input
            Constraint::Min(4),    // Guesses + feedback
            Constraint::Length(3), // Key help
        ])
        .split(f.area());

    let Some(round) = app.session.round() else {
        // Target still being selected; neutral loading state.
        render_header(f, chunks[0], "Loading…");
        return;
    };

    let mode_label = app
        .session
        .mode()
        .map_or(String::new(), |m| format!("{} {}", m.badge(), m.label()));
    render_header(
        f,
        chunks[0],
        &format!(
            "{mode_label} · Attempt {} of {MAX_ATTEMPTS} · ⏱ {}s",
            round.attempt(),
            round.elapsed_seconds()
        ),
    );

    let clue = Paragraph::new(round.movie().emojis())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Clue ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(clue, chunks[1]);

    let hint_lines: Vec<Line> = if round.all_hints_exposed() {
        let mut lines = vec![Line::from(Span::styled(
            "💡 All hints — last chance:",
            Style::default().fg(Color::Red),
        ))];
        lines.extend(round.movie().hints().iter().enumerate().map(|(i, hint)| {
            Line::from(Span::styled(
                format!("{}. {hint}", i + 1),
                Style::default().fg(Color::Red),
            ))
        }));
        lines
    } else if let Some((index, hint)) = round.current_hint() {
        vec![Line::from(Span::styled(
            format!("💡 Hint {}: {hint}", index + 1),
            Style::default().fg(Color::Yellow),
        ))]
    } else {
        vec![Line::from(Span::styled(
            "Wrong guesses reveal hints.",
            Style::default().fg(Color::DarkGray),
        ))]
    };

    let hints = Paragraph::new(hint_lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Hints ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(hints, chunks[2]);

    let input = Paragraph::new(format!("{}█", app.input_buffer)).block(
        Block::default()
            .title(" Your Guess? ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(input, chunks[3]);

    let mut guess_lines: Vec<Line> = Vec::new();
    if let Some(message) = &app.message {
        guess_lines.push(message_line(message));
    }
    if !round.guesses().is_empty() {
        guess_lines.push(Line::from("Previous guesses:"));
        guess_lines.extend(round.guesses().iter().map(|guess| {
            Line::from(Span::styled(
                format!("  • {guess}"),
                Style::default().fg(Color::DarkGray),
            ))
        }));
    }

    let guesses = Paragraph::new(guess_lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(guesses, chunks[4]);

    render_help(f, chunks[5], "Enter submit · Tab skip · Esc leave round · Ctrl+C quit");
}

fn render_result(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f);

    let Some(result) = app.session.last_result() else {
        render_header(f, chunks[0], "Loading…");
        return;
    };

    render_header(
        f,
        chunks[0],
        &format!(
            "{} {} · {} {}",
            result.industry.badge(),
            result.industry.name(),
            result.mode.badge(),
            result.mode.label()
        ),
    );

    let mut lines = vec![Line::from("")];
    if result.correct {
        lines.push(Line::from("🎉").alignment(Alignment::Center));
        lines.push(
            Line::from(Span::styled(
                "✅ Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        let tries = if result.attempts == 1 { "try" } else { "tries" };
        lines.push(
            Line::from(format!(
                "You guessed it in {} {tries}!",
                result.attempts
            ))
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(
                format!("Time: {}s", result.elapsed_seconds),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );
    } else {
        lines.push(Line::from("😅").alignment(Alignment::Center));
        lines.push(
            Line::from(Span::styled(
                "❌ Oops!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(vec![
                Span::raw("The answer was: "),
                Span::styled(
                    result.movie.title().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
            .alignment(Alignment::Center),
        );
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(format!("The clue was: {}", result.movie.emojis()))
            .alignment(Alignment::Center),
    );

    if app.share_visible {
        let text = share_text(result, PLAY_URL);
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "📤 Share your result",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        lines.extend(text.lines().map(|line| {
            Line::from(line.to_string()).alignment(Alignment::Center)
        }));
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                format!("💬 {}", whatsapp_url(&text)),
                Style::default().fg(Color::Green),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(
                format!("🐦 {}", twitter_url(&text)),
                Style::default().fg(Color::Blue),
            ))
            .alignment(Alignment::Center),
        );
    }

    let content = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(content, chunks[1]);

    let play_key = match result.mode {
        Mode::Infinite => "p play again",
        Mode::Daily => "p try infinite",
    };
    render_help(
        f,
        chunks[2],
        &format!("{play_key} · s share · h home · q quit"),
    );
}
