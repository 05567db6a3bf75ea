//! Browser state and the message/update half of the event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use holocron_core::{Catalog, source};
use holocron_model::MovieRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    EditingSearch,
}

#[derive(Debug)]
pub enum Message {
    FilmsLoaded(source::Result<Vec<MovieRecord>>),
    BeginSearch,
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,
    CancelSearch,
    ToggleSortKey,
    SubmitSort,
    CursorUp,
    CursorDown,
    SelectHighlighted,
    Quit,
}

#[derive(Debug, Default)]
pub struct BrowserState {
    pub catalog: Catalog,
    pub mode: Mode,
    /// Row of the visible list under the cursor.
    pub cursor: usize,
    /// Search box contents while editing.
    pub input: String,
    pub should_quit: bool,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::FilmsLoaded(fetched) => {
                // Failure is already logged by the catalog
                let _ = self.catalog.ingest(fetched);
                self.cursor = 0;
            }
            Message::BeginSearch => {
                self.input = self.catalog.criteria().pending_search().to_string();
                self.mode = Mode::EditingSearch;
            }
            Message::SearchInput(ch) => {
                self.input.push(ch);
                self.catalog.set_search_term(self.input.clone());
            }
            Message::SearchBackspace => {
                self.input.pop();
                self.catalog.set_search_term(self.input.clone());
            }
            Message::SubmitSearch => {
                self.catalog.set_search_term(self.input.clone());
                self.catalog.search();
                self.mode = Mode::Browse;
                self.cursor = 0;
            }
            Message::CancelSearch => {
                self.mode = Mode::Browse;
            }
            Message::ToggleSortKey => {
                let next = self.catalog.criteria().pending_sort().toggled();
                self.catalog.set_sort_key(next);
            }
            Message::SubmitSort => {
                self.catalog.sort();
                self.cursor = 0;
            }
            Message::CursorDown => {
                let len = self.catalog.visible_movies().len();
                if len > 0 {
                    self.cursor = (self.cursor + 1) % len;
                }
            }
            Message::CursorUp => {
                let len = self.catalog.visible_movies().len();
                if len > 0 {
                    self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
                }
            }
            Message::SelectHighlighted => {
                if let Err(err) = self.catalog.select_visible(self.cursor) {
                    tracing::debug!(error = %err, "nothing to select");
                }
            }
            Message::Quit => self.should_quit = true,
        }
    }
}

/// Translate a key press into a message for the current mode.
pub fn message_for_key(mode: Mode, key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match mode {
        Mode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('/') => Some(Message::BeginSearch),
            KeyCode::Tab | KeyCode::Char('s') => Some(Message::ToggleSortKey),
            KeyCode::Char('S') => Some(Message::SubmitSort),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::CursorDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Message::CursorUp),
            KeyCode::Enter => Some(Message::SelectHighlighted),
            _ => None,
        },
        Mode::EditingSearch => match key.code {
            KeyCode::Enter => Some(Message::SubmitSearch),
            KeyCode::Esc => Some(Message::CancelSearch),
            KeyCode::Backspace => Some(Message::SearchBackspace),
            KeyCode::Char(ch) => Some(Message::SearchInput(ch)),
            _ => None,
        },
    }
}
