use crate::history::HistoryTracker;
use crate::tui::edit::EditState;
use crate::tui::handlers::{
    BookmarksModeAction, HelpModeAction, InputModeAction, KeyHandler, NormalModeAction,
};
use crate::tui::navigation::ListCursor;
use crate::tui::search::SearchState;
use anyhow::Result;
use crossterm::event::KeyEvent;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    UrlInput,
    Search,
    Bookmarks,
    Help,
}

#[derive(Debug)]
pub struct App {
    pub tracker: HistoryTracker,
    pub mode: Mode,
    pub url_input: EditState,
    pub search: SearchState,
    pub history_cursor: ListCursor,
    pub bookmarks_cursor: ListCursor,
    pub should_quit: bool,
}

impl App {
    pub fn new(tracker: HistoryTracker) -> Self {
        Self {
            tracker,
            mode: Mode::Normal,
            url_input: EditState::new(),
            search: SearchState::new(),
            history_cursor: ListCursor::new(),
            bookmarks_cursor: ListCursor::new(),
            should_quit: false,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match self.mode {
            Mode::Normal => self.handle_normal_mode_key(key_event),
            Mode::UrlInput => self.handle_url_input_key(key_event),
            Mode::Search => self.handle_search_mode_key(key_event),
            Mode::Bookmarks => self.handle_bookmarks_mode_key(key_event),
            Mode::Help => self.handle_help_mode_key(key_event),
        }
        Ok(())
    }

    /// Entries shown in the main pane: search results while a search is
    /// active, the history otherwise.
    pub fn visible_items(&self) -> Vec<String> {
        match &self.search.results {
            Some(results) => results.clone(),
            None => self.tracker.history(),
        }
    }

    pub fn visit(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            debug!("ignoring blank url");
            return;
        }
        info!("visiting {}", url);
        self.tracker.visit(url);
        self.refresh_history_view();
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::ResetSearch => self.reset_search(),
            NormalModeAction::EnterUrlInput => self.mode = Mode::UrlInput,
            NormalModeAction::GoBack => {
                self.tracker.go_back();
                self.refresh_history_view();
            }
            NormalModeAction::GoForward => {
                self.tracker.go_forward();
                self.refresh_history_view();
            }
            NormalModeAction::Undo => {
                self.tracker.undo();
                self.refresh_history_view();
            }
            NormalModeAction::Redo => {
                self.tracker.redo();
                self.refresh_history_view();
            }
            NormalModeAction::ClearHistory => {
                self.tracker.clear_history();
                self.refresh_history_view();
            }
            NormalModeAction::BookmarkPage => self.tracker.bookmark_page(),
            NormalModeAction::ViewBookmarks => {
                self.bookmarks_cursor.reset();
                self.mode = Mode::Bookmarks;
            }
            NormalModeAction::EnterSearchMode => self.mode = Mode::Search,
            NormalModeAction::MoveSelectionUp => self.history_cursor.move_selection_up(),
            NormalModeAction::MoveSelectionDown => {
                let len = self.visible_items().len();
                self.history_cursor.move_selection_down(len);
            }
            NormalModeAction::ToggleHelpMode => self.mode = Mode::Help,
            NormalModeAction::None => {}
        }
    }

    fn handle_url_input_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_input_mode_key(key_event) {
            InputModeAction::Confirm => {
                self.mode = Mode::Normal;
                let url = self.url_input.trimmed().to_string();
                if !url.is_empty() {
                    self.visit(&url);
                    self.url_input.clear();
                }
            }
            InputModeAction::Cancel => self.mode = Mode::Normal,
            action => apply_edit(&mut self.url_input, action),
        }
    }

    fn handle_search_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_input_mode_key(key_event) {
            InputModeAction::Confirm => {
                self.mode = Mode::Normal;
                if let Some(outcome) = self.search.run(&self.tracker) {
                    debug!("search {:?}: {}", self.search.query.trimmed(), outcome.label());
                    self.history_cursor.reset();
                }
            }
            InputModeAction::Cancel => self.mode = Mode::Normal,
            action => apply_edit(&mut self.search.query, action),
        }
    }

    fn handle_bookmarks_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_bookmarks_mode_key(key_event) {
            BookmarksModeAction::CloseBookmarks => self.mode = Mode::Normal,
            BookmarksModeAction::MoveSelectionUp => self.bookmarks_cursor.move_selection_up(),
            BookmarksModeAction::MoveSelectionDown => {
                let len = self.tracker.bookmarks().len();
                self.bookmarks_cursor.move_selection_down(len);
            }
            BookmarksModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
            self.mode = Mode::Normal;
        }
    }

    // Back to the full history with the current page highlighted. The search
    // query and its label are left as they were.
    fn refresh_history_view(&mut self) {
        self.search.clear_results();
        self.history_cursor.reset();
    }

    fn reset_search(&mut self) {
        self.search.reset();
        self.history_cursor.reset();
    }
}

fn apply_edit(editor: &mut EditState, action: InputModeAction) {
    match action {
        InputModeAction::Backspace => editor.backspace(),
        InputModeAction::Delete => editor.delete(),
        InputModeAction::DeleteWordBackward => editor.delete_word_backward(),
        InputModeAction::MoveCursorLeft => editor.move_cursor_left(),
        InputModeAction::MoveCursorRight => editor.move_cursor_right(),
        InputModeAction::MoveCursorHome => editor.move_cursor_home(),
        InputModeAction::MoveCursorEnd => editor.move_cursor_end(),
        InputModeAction::InsertChar(c) => editor.insert_char(c),
        InputModeAction::Confirm | InputModeAction::Cancel | InputModeAction::None => {}
    }
}
