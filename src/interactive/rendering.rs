//! TUI rendering with ratatui
//!
//! Draws the input box, autocomplete window, guess table and game-over panel
//! from a game snapshot.

use super::app::{App, MessageStyle};
use crate::core::{Attribute, Hint};
use crate::game::{SessionState, Snapshot};
use crate::output::formatters::{hint_cell, hints_to_emoji};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Gauge, List, ListItem, Paragraph, Row, Table},
};
use std::rc::Rc;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.game.snapshot();
    let chunks = screen_layout(f.area(), app.game.navigator().window_size());

    render_header(f, chunks[0]);
    render_input(f, &snapshot, chunks[1]);
    render_suggestions(f, app, &snapshot, chunks[2]);
    render_guesses(f, &snapshot, chunks[3]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[4]);
    render_remaining(f, &snapshot, bottom[0]);
    render_messages(f, app, bottom[1]);

    render_status(f, app, &snapshot, chunks[5]);

    if snapshot.is_over() {
        render_game_over(f, &snapshot, chunks[3]);
    }
    render_confetti(f, app);
}

fn screen_layout(area: Rect, window_size: usize) -> Rc<[Rect]> {
    let window = window_size as u16;
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Length(3),          // Input
            Constraint::Length(window + 2), // Suggestions
            Constraint::Min(6),             // Guess table
            Constraint::Length(5),          // Progress and messages
            Constraint::Length(1),          // Status bar
        ])
        .split(area)
}

/// Area of the suggestion list on a screen of the given size
#[must_use]
pub fn suggestions_area(area: Rect, window_size: usize) -> Rect {
    screen_layout(area, window_size)[2]
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌍 GEODLE - Guess the country")
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

fn render_input(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let (title, color) = if snapshot.is_over() {
        (" Game over | Space: new game, q: quit ", Color::DarkGray)
    } else {
        (" Country | Enter: guess, Esc: clear ", Color::Yellow)
    };

    let content = if snapshot.query.is_empty() && !snapshot.is_over() {
        Line::from(Span::styled(
            "Start typing a country…",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(snapshot.query.as_str()),
            Span::styled("▏", Style::default().fg(color)),
        ])
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_suggestions(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let view = &snapshot.suggestions;
    let catalog = app.game.catalog();

    let items: Vec<ListItem> = view
        .visible()
        .map(|(position, name)| {
            let meta = catalog
                .lookup(name)
                .map(|entity| {
                    format!(
                        "  {} · {}",
                        Attribute::Continent.value_of(entity),
                        Attribute::Population.value_of(entity)
                    )
                })
                .unwrap_or_default();

            let (marker, style) = if view.is_highlighted(position) {
                (
                    "› ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{name}"), style),
                Span::styled(meta, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let title = match (view.hidden_above(), view.hidden_below()) {
        (0, 0) => format!(" Suggestions ({}) ", view.candidates.len()),
        (above, below) => format!(
            " Suggestions ({}) | ↑{above} ↓{below} ",
            view.candidates.len()
        ),
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(list, area);
}

fn hint_style(hint: Hint) -> Style {
    match hint {
        Hint::Match => Style::new().fg(Color::Black).bg(Color::Green),
        Hint::Mismatch => Style::new().fg(Color::White).bg(Color::Red),
        Hint::GuessTooLow | Hint::GuessTooHigh => Style::new().fg(Color::Black).bg(Color::Yellow),
    }
}

fn render_guesses(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let block = Block::default()
        .title(format!(" Guesses {}/{} ", snapshot.guesses.len(), snapshot.budget))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if snapshot.guesses.is_empty() {
        let hint = Paragraph::new("Your hints will appear here after each guess.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let header = Row::new(
        std::iter::once(Cell::from("Country")).chain(Attribute::ALL.map(|a| Cell::from(a.label()))),
    )
    .style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows = snapshot.guesses.iter().map(|(entity, hints)| {
        let cells = hints
            .iter()
            .map(|(attribute, hint)| {
                Cell::from(hint_cell(attribute, entity, hint)).style(hint_style(hint))
            });
        Row::new(
            std::iter::once(
                Cell::from(entity.name.as_str()).style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .chain(cells),
        )
    });

    let widths = [
        Constraint::Length(18),
        Constraint::Min(10),
        Constraint::Min(14),
        Constraint::Min(6),
        Constraint::Min(10),
        Constraint::Min(9),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(block);

    f.render_widget(table, area);
}

fn render_remaining(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let percent = if snapshot.budget == 0 {
        0
    } else {
        (snapshot.remaining * 100 / snapshot.budget) as u16
    };

    let color = match snapshot.remaining {
        0 => Color::Red,
        1 | 2 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{} guesses remaining", snapshot.remaining));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_status(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.games_played, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if snapshot.is_over() {
        "Space/n: New Game | Esc/q: Quit"
    } else {
        "↑↓: Select | PgUp/PgDn/Wheel: Scroll | Enter: Guess | Ctrl-C: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_game_over(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let target = snapshot.target.unwrap_or("?");
    let (title, color, headline) = match snapshot.state {
        SessionState::Won => (
            " 🎉 CONGRATULATIONS! 🎉 ",
            Color::Green,
            match snapshot.guesses.len() {
                1 => format!("You found {target} in 1 guess!"),
                count => format!("You found {target} in {count} guesses!"),
            },
        ),
        SessionState::Lost => (
            " GAME OVER ",
            Color::Red,
            format!("The country was {target}."),
        ),
        SessionState::InProgress => return,
    };

    let mut lines = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(snapshot.guesses.iter().map(|(entity, hints)| {
        Line::from(format!("{} {}", hints_to_emoji(hints), entity.name))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Space for a new game or Esc to quit",
        Style::default().fg(Color::DarkGray),
    )));

    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = centered(area, 50, height);

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}

fn render_confetti(f: &mut Frame, app: &App) {
    let area = f.area();
    let buffer = f.buffer_mut();

    for particle in &app.confetti {
        if !(0.0..1.0).contains(&particle.x) || !(0.0..1.0).contains(&particle.y) {
            continue;
        }
        let x = area.x + (particle.x * f64::from(area.width)) as u16;
        let y = area.y + (particle.y * f64::from(area.height)) as u16;
        if let Some(cell) = buffer.cell_mut((x, y)) {
            cell.set_char(particle.glyph).set_fg(particle.color);
        }
    }
}

/// Rectangle of `percent_x` width and `height` rows centred in `area`
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
