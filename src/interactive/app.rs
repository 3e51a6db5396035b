//! TUI application state and logic

use crate::commands::{browse_puzzles, matches_search, select_puzzle};
use crate::core::{GROUP_SIZE, GroupColor, Puzzle, PuzzleSummary};
use crate::output::formatters::format_submission;
use crate::puzzles::PuzzleSource;
use crate::rules::{HintLevel, IndexSource, RandomIndices, SubmissionOutcome};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeSet;
use std::io;

/// Cards per board row
pub const BOARD_COLUMNS: usize = 4;

/// Application state
pub struct App<'a, I: IndexSource = RandomIndices> {
    pub source: &'a dyn PuzzleSource,
    pub session: Session,
    pub indices: I,
    pub cursor: usize,
    pub selected: BTreeSet<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Colors of the categories found so far, in the order found
    pub found: Vec<GroupColor>,
    pub browser: Browser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Board,
    HintMenu,
    Browse,
    Solved,
}

/// Puzzle browser: the listing newest first, narrowed by a typed search
#[derive(Debug, Default, Clone)]
pub struct Browser {
    pub listing: Vec<PuzzleSummary>,
    pub query: String,
    pub selected: usize,
}

impl Browser {
    #[must_use]
    pub fn new(listing: Vec<PuzzleSummary>) -> Self {
        Self {
            listing,
            ..Self::default()
        }
    }

    /// Entries matching the current search
    #[must_use]
    pub fn visible(&self) -> Vec<&PuzzleSummary> {
        self.listing
            .iter()
            .filter(|entry| matches_search(entry, &self.query))
            .collect()
    }

    /// The highlighted entry
    #[must_use]
    pub fn chosen(&self) -> Option<&PuzzleSummary> {
        self.visible().get(self.selected).copied()
    }

    pub fn type_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    pub fn move_selection(&mut self, delta: isize) {
        let last = self.visible().len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Partial,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_played: usize,
    pub puzzles_solved: usize,
    pub hints_used: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(source: &'a dyn PuzzleSource, puzzle: Puzzle) -> Self {
        Self::with_indices(source, puzzle, RandomIndices::thread())
    }
}

impl<'a, I: IndexSource> App<'a, I> {
    #[must_use]
    pub fn with_indices(source: &'a dyn PuzzleSource, puzzle: Puzzle, indices: I) -> Self {
        let mut app = Self {
            source,
            session: Session::new(),
            indices,
            cursor: 0,
            selected: BTreeSet::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Board,
            found: Vec::new(),
            browser: Browser::default(),
        };
        app.start(puzzle);
        app.add_message(
            "Select cards with SPACE, color them with y/g/b/p, submit with ENTER.",
            MessageStyle::Info,
        );
        app
    }

    fn start(&mut self, puzzle: Puzzle) {
        self.session.load(puzzle);
        self.cursor = 0;
        self.selected.clear();
        self.found.clear();
        self.input_mode = InputMode::Board;
        self.stats.puzzles_played += 1;
    }

    /// Word under the cursor
    #[must_use]
    pub fn cursor_word(&self) -> Option<&str> {
        self.session
            .puzzle()
            .and_then(|p| p.words().get(self.cursor))
            .map(String::as_str)
    }

    /// Move the cursor on the board grid, clamped to the edges
    pub fn move_cursor(&mut self, rows: isize, columns: isize) {
        let Some(puzzle) = self.session.puzzle() else {
            return;
        };
        let total = puzzle.words().len();
        let row_count = total.div_ceil(BOARD_COLUMNS);

        let row = (self.cursor / BOARD_COLUMNS).saturating_add_signed(rows).min(row_count - 1);
        let column = (self.cursor % BOARD_COLUMNS)
            .saturating_add_signed(columns)
            .min(BOARD_COLUMNS - 1);
        self.cursor = (row * BOARD_COLUMNS + column).min(total - 1);
    }

    pub fn toggle_selection(&mut self) {
        if let Some(word) = self.cursor_word().map(str::to_string)
            && !self.selected.remove(&word)
        {
            self.selected.insert(word);
        }
    }

    /// Selected words, or the cursor word when nothing is selected
    fn targets(&mut self) -> Vec<String> {
        if self.selected.is_empty() {
            self.cursor_word().map(str::to_string).into_iter().collect()
        } else {
            std::mem::take(&mut self.selected).into_iter().collect()
        }
    }

    pub fn apply_color(&mut self, color: GroupColor) {
        for word in self.targets() {
            if let Err(e) = self.session.assign(&word, color) {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
        let count = self.session.grouping().count(color);
        if count > GROUP_SIZE {
            self.add_message(
                &format!("The {color} group has {count} cards; it needs exactly {GROUP_SIZE}."),
                MessageStyle::Error,
            );
        }
    }

    pub fn clear_color(&mut self) {
        for word in self.targets() {
            self.session.clear(&word);
        }
    }

    pub fn reset_board(&mut self) {
        self.session.reset_board();
        self.selected.clear();
        self.found.clear();
        self.add_message("Board reset.", MessageStyle::Info);
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            Ok(result) => {
                for group in &result.correct_groups {
                    if !self.found.contains(&group.color) {
                        self.found.push(group.color);
                    }
                }

                let style = match result.outcome() {
                    SubmissionOutcome::Solved => {
                        self.stats.puzzles_solved += 1;
                        self.input_mode = InputMode::Solved;
                        MessageStyle::Success
                    }
                    SubmissionOutcome::Partial => MessageStyle::Partial,
                    SubmissionOutcome::AllIncorrect => MessageStyle::Error,
                };
                for line in format_submission(&result).lines().filter(|l| !l.is_empty()) {
                    self.add_message(line, style);
                }
                if self.input_mode == InputMode::Solved {
                    self.add_message(
                        "Press 'n' for a new puzzle or 'q' to quit.",
                        MessageStyle::Info,
                    );
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn request_hint(&mut self, level: HintLevel) {
        self.input_mode = InputMode::Board;
        match self.session.hint(level, &mut self.indices) {
            Ok(hint) => {
                let text = format!("💡 [{}] {}", hint.level, hint.text);
                self.stats.hints_used += 1;
                self.add_message(&text, MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Load another puzzle: "daily", "random" or an identifier
    pub fn new_puzzle(&mut self, choice: &str) {
        match select_puzzle(self.source, choice, &mut self.indices) {
            Ok(puzzle) => {
                let text = format!("Loaded puzzle {} ({}).", puzzle.id(), puzzle.date());
                self.start(puzzle);
                self.add_message(&text, MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Open the puzzle browser
    pub fn open_browser(&mut self) {
        match browse_puzzles(self.source, None) {
            Ok(listing) if listing.is_empty() => {
                self.add_message("No puzzles to browse.", MessageStyle::Error);
            }
            Ok(listing) => {
                self.browser = Browser::new(listing);
                self.input_mode = InputMode::Browse;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Load the puzzle highlighted in the browser
    pub fn load_browsed(&mut self) {
        let Some(id) = self.browser.chosen().map(|entry| entry.id.clone()) else {
            self.add_message("No puzzle matches that search.", MessageStyle::Error);
            return;
        };
        // Loading returns to the board; a failure leaves the browser open
        self.new_puzzle(&id);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<I: IndexSource>(app: App<'_, I>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, I: IndexSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, I>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Solved => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_puzzle("random"),
                    KeyCode::Char('d') => app.new_puzzle("daily"),
                    KeyCode::Char('o') => app.open_browser(),
                    _ => {}
                },
                InputMode::Browse => match key.code {
                    KeyCode::Esc => app.input_mode = InputMode::Board,
                    KeyCode::Enter => app.load_browsed(),
                    KeyCode::Up => app.browser.move_selection(-1),
                    KeyCode::Down => app.browser.move_selection(1),
                    KeyCode::Backspace => app.browser.backspace(),
                    KeyCode::Char(c) => app.browser.type_char(c),
                    _ => {}
                },
                InputMode::HintMenu => match key.code {
                    KeyCode::Char('1') => app.request_hint(HintLevel::Beginner),
                    KeyCode::Char('2') => app.request_hint(HintLevel::Intermediate),
                    KeyCode::Char('3') => app.request_hint(HintLevel::Expert),
                    KeyCode::Esc | KeyCode::Char('?') => app.input_mode = InputMode::Board,
                    _ => {}
                },
                InputMode::Board => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, 0),
                    KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, 0),
                    KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
                    KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),
                    KeyCode::Char(' ') => app.toggle_selection(),
                    KeyCode::Char('y' | '1') => app.apply_color(GroupColor::Yellow),
                    KeyCode::Char('g' | '2') => app.apply_color(GroupColor::Green),
                    KeyCode::Char('b' | '3') => app.apply_color(GroupColor::Blue),
                    KeyCode::Char('p' | '4') => app.apply_color(GroupColor::Purple),
                    KeyCode::Char('x') | KeyCode::Backspace | KeyCode::Delete => {
                        app.clear_color();
                    }
                    KeyCode::Char('r') => app.reset_board(),
                    KeyCode::Char('s') | KeyCode::Enter => app.submit(),
                    KeyCode::Char('?') => app.input_mode = InputMode::HintMenu,
                    KeyCode::Char('n') => app.new_puzzle("random"),
                    KeyCode::Char('d') => app.new_puzzle("daily"),
                    KeyCode::Char('o') => app.open_browser(),
                    KeyCode::Esc => app.selected.clear(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::{BundledSource, PuzzleRequest};
    use crate::rules::ScriptedIndices;

    fn app(source: &BundledSource) -> App<'_, ScriptedIndices> {
        let puzzle = source.load_puzzle(&PuzzleRequest::Daily).unwrap();
        App::with_indices(source, puzzle, ScriptedIndices::new([0]))
    }

    #[test]
    fn cursor_moves_within_grid() {
        let source = BundledSource::new();
        let mut app = app(&source);

        app.move_cursor(-1, -1);
        assert_eq!(app.cursor, 0);
        app.move_cursor(1, 2);
        assert_eq!(app.cursor, 6);
        app.move_cursor(10, 10);
        assert_eq!(app.cursor, 15);
        assert_eq!(app.cursor_word(), Some("SOLITAIRE"));
    }

    #[test]
    fn selection_toggles() {
        let source = BundledSource::new();
        let mut app = app(&source);

        app.toggle_selection();
        assert!(app.selected.contains("SOURDOUGH"));
        app.toggle_selection();
        assert!(app.selected.is_empty());
    }

    #[test]
    fn color_applies_to_selection_then_clears_it() {
        let source = BundledSource::new();
        let mut app = app(&source);

        for _ in 0..4 {
            app.toggle_selection();
            app.move_cursor(0, 1);
        }
        app.apply_color(GroupColor::Yellow);

        assert!(app.selected.is_empty());
        assert_eq!(app.session.grouping().count(GroupColor::Yellow), 4);
    }

    #[test]
    fn color_without_selection_uses_cursor() {
        let source = BundledSource::new();
        let mut app = app(&source);

        app.move_cursor(2, 0);
        app.apply_color(GroupColor::Blue);
        assert_eq!(app.session.grouping().color_of("MOON"), Some(GroupColor::Blue));

        app.clear_color();
        assert_eq!(app.session.grouping().color_of("MOON"), None);
    }

    #[test]
    fn solving_switches_to_solved_mode() {
        let source = BundledSource::new();
        let mut app = app(&source);

        // Bundled daily puzzle lists each category's words in one row
        for (row, color) in GroupColor::ALL.into_iter().enumerate() {
            for column in 0..4 {
                app.cursor = row * BOARD_COLUMNS + column;
                app.toggle_selection();
            }
            app.apply_color(color);
        }
        app.submit();

        assert_eq!(app.input_mode, InputMode::Solved);
        assert_eq!(app.stats.puzzles_solved, 1);
        assert_eq!(app.found.len(), 4);
    }

    #[test]
    fn partial_submission_is_reported_as_error() {
        let source = BundledSource::new();
        let mut app = app(&source);

        app.apply_color(GroupColor::Yellow);
        app.submit();

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.input_mode, InputMode::Board);
    }

    #[test]
    fn hint_closes_menu_and_counts() {
        let source = BundledSource::new();
        let mut app = app(&source);

        app.input_mode = InputMode::HintMenu;
        app.request_hint(HintLevel::Beginner);

        assert_eq!(app.input_mode, InputMode::Board);
        assert_eq!(app.stats.hints_used, 1);
        assert_eq!(app.session.hint_history().len(), 1);
    }

    #[test]
    fn new_puzzle_resets_board() {
        let source = BundledSource::new();
        let mut app = app(&source);

        app.apply_color(GroupColor::Green);
        app.new_puzzle("sample2");

        assert_eq!(app.session.puzzle().unwrap().id(), "sample2");
        assert_eq!(app.session.grouping().assigned_count(), 0);
        assert_eq!(app.stats.puzzles_played, 2);
    }

    #[test]
    fn browser_lists_newest_first_and_loads_choice() {
        let source = BundledSource::new();
        let mut app = app(&source);

        app.open_browser();
        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.browser.chosen().unwrap().id, "sample3");

        app.browser.move_selection(1);
        assert_eq!(app.browser.chosen().unwrap().id, "sample2");
        app.browser.move_selection(10);
        assert_eq!(app.browser.chosen().unwrap().id, "sample1");

        app.load_browsed();
        assert_eq!(app.input_mode, InputMode::Board);
        assert_eq!(app.session.puzzle().unwrap().id(), "sample1");
    }

    #[test]
    fn browser_search_narrows_listing() {
        let source = BundledSource::new();
        let mut app = app(&source);

        app.open_browser();
        for c in "01-02".chars() {
            app.browser.type_char(c);
        }
        assert_eq!(app.browser.visible().len(), 1);
        app.load_browsed();
        assert_eq!(app.session.puzzle().unwrap().id(), "sample2");

        app.open_browser();
        app.browser.type_char('z');
        assert!(app.browser.visible().is_empty());
        app.load_browsed();
        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        app.browser.backspace();
        assert_eq!(app.browser.visible().len(), 3);
    }

    #[test]
    fn unknown_puzzle_keeps_current_one() {
        let source = BundledSource::new();
        let mut app = app(&source);

        app.new_puzzle("nope");
        assert_eq!(app.session.puzzle().unwrap().id(), "sample1");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }
}
