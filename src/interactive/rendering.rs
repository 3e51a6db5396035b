//! TUI rendering with ratatui
//!
//! Board grid, group progress, hint history and messages.

use super::app::{App, BOARD_COLUMNS, InputMode, MessageStyle};
use crate::core::{GROUP_SIZE, GroupColor};
use crate::output::formatters::progress_row;
use crate::rules::{HintLevel, IndexSource};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Terminal color for a group color
const fn group_color(color: GroupColor) -> Color {
    match color {
        GroupColor::Yellow => Color::Yellow,
        GroupColor::Green => Color::Green,
        GroupColor::Blue => Color::Blue,
        GroupColor::Purple => Color::Magenta,
    }
}

/// Main UI rendering function
pub fn ui<I: IndexSource>(f: &mut Frame, app: &App<'_, I>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(4), // Key help / hint menu
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Side panel
        ])
        .split(chunks[1]);

    if app.input_mode == InputMode::Browse {
        render_browser(f, app, main_chunks[0]);
    } else {
        render_board(f, app, main_chunks[0]);
    }
    render_side_panel(f, app, main_chunks[1]);

    render_controls(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<I: IndexSource>(f: &mut Frame, app: &App<'_, I>, area: Rect) {
    let title = match app.session.puzzle() {
        Some(puzzle) => format!("🧩 CONNECTIONS PLUS - {} ({})", puzzle.id(), puzzle.date()),
        None => "🧩 CONNECTIONS PLUS".to_string(),
    };
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

fn render_board<I: IndexSource>(f: &mut Frame, app: &App<'_, I>, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(puzzle) = app.session.puzzle() else {
        f.render_widget(Paragraph::new("No puzzle loaded. Press 'n'."), inner);
        return;
    };

    let row_count = puzzle.words().len().div_ceil(BOARD_COLUMNS);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(inner);

    for (row_index, row_words) in puzzle.words().chunks(BOARD_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, BOARD_COLUMNS as u32); BOARD_COLUMNS])
            .split(rows[row_index]);

        for (column, word) in row_words.iter().enumerate() {
            let index = row_index * BOARD_COLUMNS + column;
            let color = app.session.grouping().color_of(word);
            let is_cursor = index == app.cursor;
            let is_selected = app.selected.contains(word);

            let mut style = match color {
                Some(c) => Style::default().fg(Color::Black).bg(group_color(c)),
                None => Style::default().fg(Color::White),
            };
            if is_selected {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let border_style = if is_cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let card = Paragraph::new(word.as_str())
                .style(style.add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(if is_cursor {
                            BorderType::Double
                        } else {
                            BorderType::Plain
                        })
                        .border_style(border_style),
                );
            f.render_widget(card, cells[column]);
        }
    }
}

fn render_browser<I: IndexSource>(f: &mut Frame, app: &App<'_, I>, area: Rect) {
    let items: Vec<ListItem> = app
        .browser
        .visible()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}  ", entry.date.format("%a %b %e, %Y")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("#{}", entry.id), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let title = format!(" Puzzles ({}) ", items.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.browser.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_side_panel<I: IndexSource>(f: &mut Frame, app: &App<'_, I>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),      // Groups
            Constraint::Percentage(50), // Hints
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_groups(f, app, chunks[0]);
    render_hints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_groups<I: IndexSource>(f: &mut Frame, app: &App<'_, I>, area: Rect) {
    let grouping = app.session.grouping();
    let mut lines: Vec<Line> = GroupColor::ALL
        .iter()
        .map(|&color| {
            let count = grouping.count(color);
            let count_style = if count == GROUP_SIZE {
                Style::default().fg(Color::Green)
            } else if count > GROUP_SIZE {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<7}", color.name()),
                    Style::default().fg(group_color(color)),
                ),
                Span::styled(format!(" {count}/{GROUP_SIZE}"), count_style),
            ])
        })
        .collect();
    lines.push(Line::from(format!("Found: {}", progress_row(&app.found))));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Groups ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_hints<I: IndexSource>(f: &mut Frame, app: &App<'_, I>, area: Rect) {
    let hints: Vec<ListItem> = app
        .session
        .hint_history()
        .iter()
        .rev()
        .map(|hint| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", hint.level),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(hint.text.clone()),
            ]))
        })
        .collect();

    let list = List::new(hints).block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(list, area);
}

fn render_messages<I: IndexSource>(f: &mut Frame, app: &App<'_, I>, area: Rect) {
    let messages: Vec<Line> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Partial => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::styled(msg.text.clone(), style)
        })
        .collect();

    let paragraph = Paragraph::new(messages)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_controls<I: IndexSource>(f: &mut Frame, app: &App<'_, I>, area: Rect) {
    let (title, lines, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 SOLVED! 🎉 ",
            vec![Line::from(
                "n: random puzzle | d: daily puzzle | o: browse puzzles | q: quit",
            )],
            Color::Green,
        ),
        InputMode::Browse => (
            " Browse Puzzles | ESC to cancel ",
            vec![
                Line::from(format!("Search: {}_", app.browser.query)),
                Line::from("type to filter by id or date | ↑/↓: move | ENTER: load"),
            ],
            Color::Cyan,
        ),
        InputMode::HintMenu => (
            " Get a Hint | ESC to cancel ",
            HintLevel::ALL
                .iter()
                .enumerate()
                .map(|(i, level)| {
                    Line::from(format!(
                        "{}: {:<12} {}",
                        i + 1,
                        level.name(),
                        level.description()
                    ))
                })
                .collect(),
            Color::Cyan,
        ),
        InputMode::Board => (
            " Controls ",
            vec![
                Line::from("arrows: move | SPACE: select | y g b p: color | x: uncolor | q: quit"),
                Line::from("ENTER: submit | ?: hint | r: reset | n: new | d: daily | o: browse"),
            ],
            Color::Yellow,
        ),
    };

    let controls = Paragraph::new(lines).style(Style::default().fg(color)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(controls, area);
}

fn render_status<I: IndexSource>(f: &mut Frame, app: &App<'_, I>, area: Rect) {
    let status = format!(
        "Played: {} | Solved: {} | Hints: {} | Submissions: {} | Unassigned: {}",
        app.stats.puzzles_played,
        app.stats.puzzles_solved,
        app.stats.hints_used,
        app.session.submissions(),
        app.session
            .puzzle()
            .map_or(0, |p| app.session.grouping().unassigned(p).len()),
    );
    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}
