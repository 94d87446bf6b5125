use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('c') if ctrl => NormalModeAction::Quit,
            KeyCode::Char('r') if ctrl => NormalModeAction::Redo,
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Esc => NormalModeAction::ResetSearch,
            KeyCode::Char('i') | KeyCode::Char('o') => NormalModeAction::EnterUrlInput,
            KeyCode::Left | KeyCode::Char('h') => NormalModeAction::GoBack,
            KeyCode::Right | KeyCode::Char('l') => NormalModeAction::GoForward,
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveSelectionDown,
            KeyCode::Char('u') => NormalModeAction::Undo,
            KeyCode::Char('r') => NormalModeAction::Redo,
            KeyCode::Char('C') => NormalModeAction::ClearHistory,
            KeyCode::Char('b') => NormalModeAction::BookmarkPage,
            KeyCode::Char('B') => NormalModeAction::ViewBookmarks,
            KeyCode::Char('/') => NormalModeAction::EnterSearchMode,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    pub fn handle_bookmarks_mode_key(key_event: KeyEvent) -> BookmarksModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('B') => {
                BookmarksModeAction::CloseBookmarks
            }
            KeyCode::Up | KeyCode::Char('k') => BookmarksModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => BookmarksModeAction::MoveSelectionDown,
            _ => BookmarksModeAction::None,
        }
    }

    /// Shared by the URL bar and the search bar.
    pub fn handle_input_mode_key(key_event: KeyEvent) -> InputModeAction {
        match key_event.code {
            KeyCode::Char('w') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputModeAction::DeleteWordBackward
            }
            KeyCode::Esc => InputModeAction::Cancel,
            KeyCode::Enter => InputModeAction::Confirm,
            KeyCode::Backspace => InputModeAction::Backspace,
            KeyCode::Delete => InputModeAction::Delete,
            KeyCode::Left => InputModeAction::MoveCursorLeft,
            KeyCode::Right => InputModeAction::MoveCursorRight,
            KeyCode::Home => InputModeAction::MoveCursorHome,
            KeyCode::End => InputModeAction::MoveCursorEnd,
            KeyCode::Char(c) => InputModeAction::InsertChar(c),
            _ => InputModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    ResetSearch,
    EnterUrlInput,
    GoBack,
    GoForward,
    MoveSelectionUp,
    MoveSelectionDown,
    Undo,
    Redo,
    ClearHistory,
    BookmarkPage,
    ViewBookmarks,
    EnterSearchMode,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum BookmarksModeAction {
    None,
    CloseBookmarks,
    MoveSelectionUp,
    MoveSelectionDown,
}

#[derive(Debug, PartialEq)]
pub enum InputModeAction {
    None,
    Cancel,
    Confirm,
    Backspace,
    Delete,
    DeleteWordBackward,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}
