#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(usize);

#[derive(Debug, Clone)]
pub struct Page {
    url: String,
    pub prev: Option<PageId>,
    pub next: Option<PageId>,
}

impl Page {
    pub fn new(url: String) -> Self {
        Self {
            url,
            prev: None,
            next: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Owns every page created by a visit. Ids are handed out in increasing
/// order and never reused, so a page cut off from the chain simply stays
/// unreferenced until the arena is reset.
#[derive(Debug, Default)]
pub struct PageArena {
    pages: Vec<Page>,
    // Id of pages[0]; bumped on reset so ids keep increasing.
    base: usize,
}

impl PageArena {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            base: 0,
        }
    }

    pub fn alloc(&mut self, page: Page) -> PageId {
        let id = PageId(self.base + self.pages.len());
        self.pages.push(page);
        id
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        id.0.checked_sub(self.base).and_then(|i| self.pages.get(i))
    }

    pub fn get_mut(&mut self, id: PageId) -> Option<&mut Page> {
        id.0.checked_sub(self.base).and_then(|i| self.pages.get_mut(i))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn reset(&mut self) {
        self.base += self.pages.len();
        self.pages.clear();
    }
}
