/// Highlight position inside a rendered list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    pub selected_index: usize,
}

impl ListCursor {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self, max_items: usize) {
        if self.selected_index < max_items.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected_index = 0;
    }

    pub fn selection(&self, max_items: usize) -> Option<usize> {
        if max_items == 0 {
            None
        } else {
            Some(self.selected_index.min(max_items - 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_selection_bounds() {
        let mut cursor = ListCursor::new();
        cursor.move_selection_up();
        assert_eq!(cursor.selected_index, 0);

        cursor.move_selection_down(3);
        cursor.move_selection_down(3);
        cursor.move_selection_down(3);
        assert_eq!(cursor.selected_index, 2);
    }

    #[test]
    fn test_move_down_in_empty_list() {
        let mut cursor = ListCursor::new();
        cursor.move_selection_down(0);
        assert_eq!(cursor.selected_index, 0);
        assert_eq!(cursor.selection(0), None);
    }

    #[test]
    fn test_selection_never_exceeds_list() {
        let cursor = ListCursor { selected_index: 4 };
        assert_eq!(cursor.selection(2), Some(1));
        assert_eq!(cursor.selection(10), Some(4));
    }
}
