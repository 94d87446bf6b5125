use crate::history::page::{Page, PageArena, PageId};
use log::debug;

/// Linear browsing history with back/forward navigation, undo/redo of the
/// current page, and a bookmark list.
///
/// Every operation is infallible. Calls that have nothing to act on (going
/// back from the oldest page, undoing with an empty stack, bookmarking with
/// no page open) leave the tracker untouched.
#[derive(Debug, Default)]
pub struct HistoryTracker {
    pages: PageArena,
    current: Option<PageId>,
    undo_stack: Vec<Option<PageId>>,
    redo_stack: Vec<Option<PageId>>,
    bookmarks: Vec<String>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self {
            pages: PageArena::new(),
            current: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            bookmarks: Vec::new(),
        }
    }

    /// Opens `url` as a new page after the current one. Whatever was ahead
    /// of the current page is cut off and can no longer be reached.
    pub fn visit(&mut self, url: impl Into<String>) {
        let mut page = Page::new(url.into());
        page.prev = self.current;
        debug!("visit {:?} (from {:?})", page.url(), self.current_url());

        let id = self.pages.alloc(page);
        if let Some(previous) = self.current.and_then(|cur| self.pages.get_mut(cur)) {
            previous.next = Some(id);
        }

        self.undo_stack.push(self.current);
        self.current = Some(id);
        self.redo_stack.clear();
    }

    pub fn go_back(&mut self) {
        match self.current.and_then(|cur| self.link(cur, |p| p.prev)) {
            Some(prev) => {
                self.redo_stack.push(self.current);
                self.current = Some(prev);
                debug!("back to {:?}", self.current_url());
            }
            None => debug!("back: nothing behind current page"),
        }
    }

    pub fn go_forward(&mut self) {
        match self.current.and_then(|cur| self.link(cur, |p| p.next)) {
            Some(next) => {
                self.undo_stack.push(self.current);
                self.current = Some(next);
                debug!("forward to {:?}", self.current_url());
            }
            None => debug!("forward: nothing ahead of current page"),
        }
    }

    /// Restores the page that was current before the last visit, forward
    /// step or redo. The restored value may be "no page" when undoing the
    /// very first visit.
    pub fn undo(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            self.redo_stack.push(self.current);
            self.current = previous;
            debug!("undo to {:?}", self.current_url());
        } else {
            debug!("undo: stack empty");
        }
    }

    pub fn redo(&mut self) {
        if let Some(next) = self.redo_stack.pop() {
            self.undo_stack.push(self.current);
            self.current = next;
            debug!("redo to {:?}", self.current_url());
        } else {
            debug!("redo: stack empty");
        }
    }

    pub fn bookmark_page(&mut self) {
        if let Some(url) = self.current_url().map(str::to_string) {
            debug!("bookmark {:?}", url);
            self.bookmarks.push(url);
        }
    }

    /// Forgets every visited page and both undo/redo stacks. Bookmarks stay.
    pub fn clear_history(&mut self) {
        debug!("clear history ({} pages dropped)", self.pages.len());
        self.current = None;
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.pages.reset();
    }

    /// URLs reachable backwards from the current page, most recent first.
    pub fn history(&self) -> Vec<String> {
        let mut urls = Vec::new();
        let mut cursor = self.current;
        while let Some(page) = cursor.and_then(|id| self.pages.get(id)) {
            urls.push(page.url().to_string());
            cursor = page.prev;
        }
        urls
    }

    pub fn bookmarks(&self) -> Vec<String> {
        self.bookmarks.clone()
    }

    /// Case-insensitive substring filter over [`history`](Self::history).
    pub fn search_history(&self, term: &str) -> Vec<String> {
        let term_lower = term.to_lowercase();
        self.history()
            .into_iter()
            .filter(|url| url.to_lowercase().contains(&term_lower))
            .collect()
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current
            .and_then(|id| self.pages.get(id))
            .map(Page::url)
    }

    pub fn can_go_back(&self) -> bool {
        self.current
            .and_then(|cur| self.link(cur, |p| p.prev))
            .is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.current
            .and_then(|cur| self.link(cur, |p| p.next))
            .is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    fn link(&self, id: PageId, pick: impl Fn(&Page) -> Option<PageId>) -> Option<PageId> {
        self.pages.get(id).and_then(pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(urls: &[&str]) -> HistoryTracker {
        let mut tracker = HistoryTracker::new();
        for url in urls {
            tracker.visit(*url);
        }
        tracker
    }

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = HistoryTracker::new();
        assert!(tracker.is_empty());
        assert!(tracker.history().is_empty());
        assert!(tracker.bookmarks().is_empty());
        assert_eq!(tracker.current_url(), None);
        assert!(!tracker.can_go_back());
        assert!(!tracker.can_go_forward());
        assert!(!tracker.can_undo());
        assert!(!tracker.can_redo());
    }

    #[test]
    fn test_visits_are_listed_most_recent_first() {
        let tracker = tracker_with(&["one.com", "two.com", "three.com", "four.com"]);
        assert_eq!(
            tracker.history(),
            vec!["four.com", "three.com", "two.com", "one.com"]
        );
        assert_eq!(tracker.current_url(), Some("four.com"));
    }

    #[test]
    fn test_back_then_forward_round_trip() {
        let mut tracker = tracker_with(&["a", "b", "c"]);

        tracker.go_back();
        assert_eq!(tracker.current_url(), Some("b"));
        assert_eq!(tracker.history(), vec!["b", "a"]);

        tracker.go_back();
        assert_eq!(tracker.current_url(), Some("a"));

        tracker.go_forward();
        assert_eq!(tracker.current_url(), Some("b"));
        tracker.go_forward();
        assert_eq!(tracker.current_url(), Some("c"));
        assert_eq!(tracker.history(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_back_at_oldest_page_is_noop() {
        let mut tracker = tracker_with(&["a"]);
        tracker.go_back();
        assert_eq!(tracker.current_url(), Some("a"));
        assert!(!tracker.can_redo());
    }

    #[test]
    fn test_forward_at_newest_page_is_noop() {
        let mut tracker = tracker_with(&["a", "b"]);
        let undo_before = tracker.undo_stack.len();
        tracker.go_forward();
        assert_eq!(tracker.current_url(), Some("b"));
        assert_eq!(tracker.undo_stack.len(), undo_before);
    }

    #[test]
    fn test_navigation_on_empty_tracker_is_noop() {
        let mut tracker = HistoryTracker::new();
        tracker.go_back();
        tracker.go_forward();
        tracker.undo();
        tracker.redo();
        tracker.bookmark_page();

        assert!(tracker.is_empty());
        assert!(tracker.bookmarks().is_empty());
        assert!(!tracker.can_undo());
        assert!(!tracker.can_redo());
    }

    #[test]
    fn test_undo_restores_page_before_visit_and_redo_returns() {
        let mut tracker = tracker_with(&["a"]);
        tracker.visit("b");

        tracker.undo();
        assert_eq!(tracker.current_url(), Some("a"));

        tracker.redo();
        assert_eq!(tracker.current_url(), Some("b"));
    }

    #[test]
    fn test_undo_first_visit_leaves_no_current_page() {
        let mut tracker = tracker_with(&["a"]);

        tracker.undo();
        assert!(tracker.is_empty());
        assert!(tracker.history().is_empty());
        assert!(tracker.can_redo());

        tracker.redo();
        assert_eq!(tracker.current_url(), Some("a"));
    }

    #[test]
    fn test_undo_reverts_forward_step() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.go_back();
        tracker.go_forward();
        assert_eq!(tracker.current_url(), Some("b"));

        tracker.undo();
        assert_eq!(tracker.current_url(), Some("a"));
    }

    #[test]
    fn test_visit_clears_redo_stack() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.go_back();
        assert!(tracker.can_redo());

        tracker.visit("c");
        assert!(!tracker.can_redo());

        tracker.redo();
        assert_eq!(tracker.current_url(), Some("c"));
    }

    #[test]
    fn test_visit_from_middle_discards_forward_branch() {
        let mut tracker = tracker_with(&["a", "b"]);

        tracker.go_back();
        assert_eq!(tracker.history(), vec!["a"]);

        tracker.visit("c");
        assert_eq!(tracker.history(), vec!["c", "a"]);
        assert!(!tracker.can_go_forward());

        tracker.go_forward();
        assert_eq!(tracker.current_url(), Some("c"));

        tracker.go_back();
        assert_eq!(tracker.current_url(), Some("a"));
        tracker.go_forward();
        assert_eq!(tracker.current_url(), Some("c"));
    }

    #[test]
    fn test_clear_history_keeps_bookmarks() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.bookmark_page();
        tracker.go_back();

        tracker.clear_history();

        assert!(tracker.history().is_empty());
        assert_eq!(tracker.bookmarks(), vec!["b"]);

        tracker.go_back();
        tracker.go_forward();
        tracker.undo();
        tracker.redo();
        assert!(tracker.is_empty());
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn test_visit_after_clear_starts_fresh_chain() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.clear_history();
        tracker.visit("c");

        assert_eq!(tracker.history(), vec!["c"]);
        assert!(!tracker.can_go_back());

        tracker.undo();
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_bookmark_twice_keeps_duplicates() {
        let mut tracker = tracker_with(&["a"]);
        tracker.bookmark_page();
        tracker.bookmark_page();
        tracker.visit("b");
        tracker.bookmark_page();

        assert_eq!(tracker.bookmarks(), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_bookmarks_returns_copy() {
        let mut tracker = tracker_with(&["a"]);
        tracker.bookmark_page();

        let mut copy = tracker.bookmarks();
        copy.push("injected".to_string());
        copy.clear();

        assert_eq!(tracker.bookmarks(), vec!["a"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let tracker = tracker_with(&["test.com", "example.com"]);
        assert_eq!(tracker.history(), vec!["example.com", "test.com"]);

        assert_eq!(tracker.search_history("EX"), vec!["example.com"]);
        assert!(tracker.search_history("zzz").is_empty());
    }

    #[test]
    fn test_search_preserves_history_order() {
        let tracker = tracker_with(&["Docs.rs/serde", "crates.io", "docs.rs/log"]);
        assert_eq!(
            tracker.search_history("DOCS"),
            vec!["docs.rs/log", "Docs.rs/serde"]
        );
    }

    #[test]
    fn test_search_empty_term_matches_everything() {
        let tracker = tracker_with(&["a", "b"]);
        assert_eq!(tracker.search_history(""), vec!["b", "a"]);
    }

    #[test]
    fn test_search_only_covers_pages_behind_current() {
        let mut tracker = tracker_with(&["alpha", "beta"]);
        tracker.go_back();
        assert!(tracker.search_history("beta").is_empty());
        assert_eq!(tracker.search_history("alpha"), vec!["alpha"]);
    }

    #[test]
    fn test_core_accepts_empty_url() {
        let mut tracker = HistoryTracker::new();
        tracker.visit("");
        assert_eq!(tracker.current_url(), Some(""));
        assert_eq!(tracker.history(), vec![""]);
    }
}
