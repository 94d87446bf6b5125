use crate::history::HistoryTracker;
use crate::tui::edit::EditState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    MatchFound,
    NoMatch,
}

impl SearchOutcome {
    pub fn label(self) -> &'static str {
        match self {
            SearchOutcome::MatchFound => "Match found",
            SearchOutcome::NoMatch => "No match found",
        }
    }
}

/// Search bar state. While `results` is set, the history pane shows the
/// filtered list instead of the full history.
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: EditState,
    pub results: Option<Vec<String>>,
    pub outcome: Option<SearchOutcome>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: EditState::new(),
            results: None,
            outcome: None,
        }
    }

    /// Runs the query against `tracker`. A blank query leaves the previous
    /// results and label in place and returns `None`.
    pub fn run(&mut self, tracker: &HistoryTracker) -> Option<SearchOutcome> {
        let term = self.query.trimmed();
        if term.is_empty() {
            return None;
        }

        let matches = tracker.search_history(term);
        let outcome = if matches.is_empty() {
            SearchOutcome::NoMatch
        } else {
            SearchOutcome::MatchFound
        };

        self.results = Some(matches);
        self.outcome = Some(outcome);
        Some(outcome)
    }

    /// Clears the query, the label and the results.
    pub fn reset(&mut self) {
        self.query.clear();
        self.results = None;
        self.outcome = None;
    }

    pub fn clear_results(&mut self) {
        self.results = None;
    }

    pub fn is_showing_results(&self) -> bool {
        self.results.is_some()
    }

    pub fn label(&self) -> &'static str {
        self.outcome.map(SearchOutcome::label).unwrap_or("")
    }
}
