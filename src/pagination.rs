use crate::types::{PageListing, ResourceRef};

/// Fixed size of a page in the people listing
pub const PAGE_SIZE: u64 = 10;

/// What the user asked the paginator for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Next,
    Previous,
    Number(u32),
}

pub fn total_pages(total_count: u64) -> u32 {
    total_count.div_ceil(PAGE_SIZE) as u32
}

/// Owns the applied page listing and the page cursor.
///
/// The cursor only ever moves when a listing is committed, so it always
/// describes what is on screen rather than what is on its way.
#[derive(Debug, Default)]
pub struct Pagination {
    listing: Option<PageListing>,
    current_page: Option<u32>,
    loading: bool,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Work out which resource a page change should fetch.
    /// Returns None when the target does not exist from here.
    pub fn resolve(
        &self,
        target: PageTarget,
        page_ref: impl Fn(u32) -> ResourceRef,
    ) -> Option<ResourceRef> {
        match target {
            PageTarget::Next => self.listing.as_ref()?.next_page.clone(),
            PageTarget::Previous => {
                if self.current_page.unwrap_or(1) <= 1 {
                    return None;
                }
                self.listing.as_ref()?.previous_page.clone()
            }
            PageTarget::Number(0) => None,
            PageTarget::Number(n) => {
                if self.listing.is_some() && n > self.total_pages() {
                    return None;
                }
                Some(page_ref(n))
            }
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
    }

    pub fn commit(&mut self, target: PageTarget, listing: PageListing) {
        let page = match target {
            PageTarget::Next => self.current_page.unwrap_or(1) + 1,
            PageTarget::Previous => self.current_page.unwrap_or(2).saturating_sub(1).max(1),
            PageTarget::Number(n) => n,
        };
        tracing::debug!(page, items = listing.items.len(), "page listing applied");
        self.current_page = Some(page);
        self.listing = Some(listing);
        self.loading = false;
    }

    pub fn fail(&mut self) {
        self.loading = false;
    }

    pub fn listing(&self) -> Option<&PageListing> {
        self.listing.as_ref()
    }

    pub fn current_page(&self) -> Option<u32> {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn total_pages(&self) -> u32 {
        self.listing
            .as_ref()
            .map(|l| total_pages(l.total_count))
            .unwrap_or(0)
    }

    pub fn has_previous(&self) -> bool {
        self.listing
            .as_ref()
            .is_some_and(|l| l.previous_page.is_some())
    }

    pub fn has_next(&self) -> bool {
        self.listing.as_ref().is_some_and(|l| l.next_page.is_some())
    }
}
