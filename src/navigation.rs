//! Composition root for everything the screen shows.
//!
//! `Navigator` owns the fetch gate, the paginator, and the character
//! selection. The presentation layer gets a read-only [`NavigationState`]
//! and the mutators below. Fetches run on spawned tasks and come back as
//! [`Settled`] actions, which only take effect through [`Navigator::settle`].

use std::ops::RangeInclusive;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::action::{Action, Settled};
use crate::cache::FilmCache;
use crate::gate::{FetchGate, FetchToken, Settlement, Slot};
use crate::pagination::{PageTarget, Pagination};
use crate::selection::{FilmRequest, Selection, SelectionPhase};
use crate::source::DataSource;
use crate::types::{CharacterDetail, CharacterSummary, FilmDetail, PageListing, Remote, ResourceRef};

/// Snapshot handed to the renderer
#[derive(Debug)]
pub struct NavigationState<'a> {
    pub page_listing: Remote<&'a PageListing>,
    pub current_page: Option<u32>,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub selected_character: Option<&'a CharacterSummary>,
    pub selected_character_detail: Remote<&'a CharacterDetail>,
    pub active_film_ref: Option<&'a ResourceRef>,
    pub film_cache: &'a FilmCache,
    pub film_loading: bool,
    pub phase: SelectionPhase,
    pub fetch_error: bool,
}

impl<'a> NavigationState<'a> {
    pub fn loading(&self) -> bool {
        self.page_listing.is_pending()
    }

    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        1..=self.total_pages
    }

    pub fn active_film(&self) -> Option<&'a FilmDetail> {
        self.active_film_ref.and_then(|film| self.film_cache.get(film))
    }

    pub fn film_title(&self, film: &ResourceRef) -> &'a str {
        self.film_cache
            .get(film)
            .map(|f| f.title.as_str())
            .unwrap_or("?")
    }
}

pub struct Navigator {
    source: Arc<dyn DataSource>,
    action_tx: mpsc::UnboundedSender<Action>,
    gate: FetchGate,
    pagination: Pagination,
    selection: Selection,
}

impl Navigator {
    pub fn new(source: Arc<dyn DataSource>, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            source,
            action_tx,
            gate: FetchGate::new(),
            pagination: Pagination::new(),
            selection: Selection::new(),
        }
    }

    pub fn state(&self) -> NavigationState<'_> {
        let page_listing = if self.pagination.is_loading() {
            Remote::Pending
        } else {
            match self.pagination.listing() {
                Some(listing) => Remote::Loaded(listing),
                None => Remote::Absent,
            }
        };

        NavigationState {
            page_listing,
            current_page: self.pagination.current_page(),
            total_pages: self.pagination.total_pages(),
            has_previous: self.pagination.has_previous(),
            has_next: self.pagination.has_next(),
            selected_character: self.selection.selected(),
            selected_character_detail: self.selection.detail().as_ref(),
            active_film_ref: self.selection.active_film(),
            film_cache: self.selection.films(),
            film_loading: self.selection.pending_film().is_some(),
            phase: self.selection.phase(),
            fetch_error: self.gate.has_failed(),
        }
    }

    /// Initial load of the first page
    pub fn mount(&mut self) {
        self.request_page(PageTarget::Number(1));
    }

    pub fn request_page(&mut self, target: PageTarget) {
        if self.gate.has_failed() {
            return;
        }

        let source = Arc::clone(&self.source);
        let Some(page) = self.pagination.resolve(target, |n| source.page_ref(n)) else {
            tracing::debug!(?target, "page change ignored");
            return;
        };

        self.pagination.begin();
        let token = self.gate.issue(Slot::PageListing);
        self.spawn_fetch_page(target, token, page);
    }

    pub fn select_character(&mut self, character: CharacterSummary) {
        self.gate.invalidate_films();
        let detail_ref = character.detail_ref.clone();
        self.selection.select_character(character);

        let token = self.gate.issue(Slot::CharacterDetail);
        self.spawn_fetch_character(token, detail_ref);
    }

    pub fn close_character(&mut self) {
        self.gate.invalidate(&Slot::CharacterDetail);
        self.gate.invalidate_films();
        self.selection.close_character();
    }

    pub fn select_film(&mut self, film: ResourceRef) {
        let FilmRequest::Fetch(film) = self.selection.select_film(film) else {
            return;
        };

        let slot = Slot::FilmDetail(film.clone());
        if self.gate.in_flight(&slot) {
            return;
        }
        let token = self.gate.issue(slot);
        self.spawn_fetch_film(token, film);
    }

    pub fn close_film(&mut self) {
        self.selection.close_film();
    }

    /// Apply a finished fetch. Stale results change nothing.
    pub fn settle(&mut self, settled: Settled) {
        match settled {
            Settled::Page {
                target,
                token,
                result,
            } => match self.gate.settle(&Slot::PageListing, token, result) {
                Settlement::Committed(listing) => self.pagination.commit(target, listing),
                Settlement::Failed => self.pagination.fail(),
                Settlement::Stale => {}
            },
            Settled::Character { token, result } => {
                if let Settlement::Committed(detail) =
                    self.gate.settle(&Slot::CharacterDetail, token, result)
                {
                    self.selection.commit_detail(*detail);
                }
            }
            Settled::Film {
                film,
                token,
                result,
            } => {
                let slot = Slot::FilmDetail(film.clone());
                if let Settlement::Committed(detail) = self.gate.settle(&slot, token, result) {
                    self.selection.commit_film(film, detail);
                }
            }
        }
    }

    fn spawn_fetch_page(&self, target: PageTarget, token: FetchToken, page: ResourceRef) {
        let tx = self.action_tx.clone();
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let result = source.fetch_page(&page).await;
            tx.send(Settled::Page {
                target,
                token,
                result,
            }
            .into())
            .ok();
        });
    }

    fn spawn_fetch_character(&self, token: FetchToken, character: ResourceRef) {
        let tx = self.action_tx.clone();
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let result = source.fetch_character(&character).await.map(Box::new);
            tx.send(Settled::Character { token, result }.into()).ok();
        });
    }

    fn spawn_fetch_film(&self, token: FetchToken, film: ResourceRef) {
        let tx = self.action_tx.clone();
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let result = source.fetch_film(&film).await;
            tx.send(Settled::Film {
                film,
                token,
                result,
            }
            .into())
            .ok();
        });
    }
}
