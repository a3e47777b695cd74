use crate::cache::FilmCache;
use crate::types::{CharacterDetail, CharacterSummary, FilmDetail, Remote, ResourceRef};

/// Where a character session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    NoSelection,
    DetailPending,
    DetailShown,
    FilmShown,
}

/// What `select_film` decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmRequest {
    /// Served from the cache, already active.
    Shown,
    /// Not cached; the caller has to fetch it.
    Fetch(ResourceRef),
    /// Not a film of the loaded character.
    Ignored,
}

/// Selected character, its detail, and the film being viewed within it.
#[derive(Debug, Default)]
pub struct Selection {
    selected: Option<CharacterSummary>,
    detail: Remote<CharacterDetail>,
    active_film: Option<ResourceRef>,
    pending_film: Option<ResourceRef>,
    films: FilmCache,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new character session. Always refetches, even for the same character.
    pub fn select_character(&mut self, character: CharacterSummary) {
        tracing::debug!(name = %character.name, "character selected");
        self.selected = Some(character);
        self.active_film = None;
        self.pending_film = None;
        self.films.clear();
        self.detail = Remote::Pending;
    }

    pub fn close_character(&mut self) {
        self.selected = None;
        self.detail = Remote::Absent;
        self.active_film = None;
        self.pending_film = None;
    }

    pub fn commit_detail(&mut self, detail: CharacterDetail) {
        if self.selected.is_some() {
            self.detail = Remote::Loaded(detail);
        }
    }

    pub fn select_film(&mut self, film: ResourceRef) -> FilmRequest {
        let Some(detail) = self.detail.loaded() else {
            return FilmRequest::Ignored;
        };
        if !detail.appears_in(&film) {
            return FilmRequest::Ignored;
        }

        if self.films.contains(&film) {
            self.active_film = Some(film);
            self.pending_film = None;
            FilmRequest::Shown
        } else {
            self.pending_film = Some(film.clone());
            FilmRequest::Fetch(film)
        }
    }

    /// Cache a fetched film; show it only if it is still the film the user last asked for.
    pub fn commit_film(&mut self, film: ResourceRef, detail: FilmDetail) {
        let belongs = self
            .detail
            .loaded()
            .is_some_and(|character| character.appears_in(&film));
        if !belongs {
            return;
        }

        self.films.put(film.clone(), detail);
        if self.pending_film.as_ref() == Some(&film) {
            self.pending_film = None;
            self.active_film = Some(film);
        }
    }

    pub fn close_film(&mut self) {
        self.active_film = None;
        self.pending_film = None;
    }

    pub fn phase(&self) -> SelectionPhase {
        match (&self.selected, &self.detail, &self.active_film) {
            (None, _, _) => SelectionPhase::NoSelection,
            (Some(_), Remote::Loaded(_), Some(_)) => SelectionPhase::FilmShown,
            (Some(_), Remote::Loaded(_), None) => SelectionPhase::DetailShown,
            (Some(_), _, _) => SelectionPhase::DetailPending,
        }
    }

    pub fn selected(&self) -> Option<&CharacterSummary> {
        self.selected.as_ref()
    }

    pub fn detail(&self) -> &Remote<CharacterDetail> {
        &self.detail
    }

    pub fn active_film(&self) -> Option<&ResourceRef> {
        self.active_film.as_ref()
    }

    pub fn pending_film(&self) -> Option<&ResourceRef> {
        self.pending_film.as_ref()
    }

    pub fn films(&self) -> &FilmCache {
        &self.films
    }
}
