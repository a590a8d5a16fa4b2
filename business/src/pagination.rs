//! Pagination control model: first / prev / label / next / last.

use crate::users::model::Pagination;

/// One navigation button. `target` is the page it jumps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub target: u32,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub first: PageButton,
    pub prev: PageButton,
    pub next: PageButton,
    pub last: PageButton,
    pub label: String,
}

impl Pagination {
    /// Controls for this page, or `None` when everything fits on one page.
    pub fn controls(&self) -> Option<PaginationControls> {
        if self.total_pages <= 1 {
            return None;
        }

        let page = self.page;
        let at_start = page == 1;
        let at_end = page == self.total_pages;

        Some(PaginationControls {
            first: PageButton {
                target: 1,
                enabled: !at_start,
            },
            prev: PageButton {
                target: page.saturating_sub(1).max(1),
                enabled: !at_start,
            },
            next: PageButton {
                target: page.saturating_add(1).min(self.total_pages),
                enabled: !at_end,
            },
            last: PageButton {
                target: self.total_pages,
                enabled: !at_end,
            },
            label: format!("Page {page} / {} ({} total)", self.total_pages, self.total),
        })
    }
}
