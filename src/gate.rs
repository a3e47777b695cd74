//! Per-slot request tokens.
//!
//! Every logical fetch slot remembers the token of its most recent request.
//! A response is only applied when it carries that token; anything older was
//! superseded while in flight and is dropped on arrival. Network work is never
//! cancelled, only discarded.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::types::ResourceRef;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    PageListing,
    CharacterDetail,
    FilmDetail(ResourceRef),
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::PageListing => write!(f, "pageListing"),
            Slot::CharacterDetail => write!(f, "characterDetail"),
            Slot::FilmDetail(film) => write!(f, "filmDetail:{}", film),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchToken(u64);

/// Result of handing a finished fetch to the gate
#[derive(Debug)]
pub enum Settlement<T> {
    /// A newer request owns the slot; nothing may change.
    Stale,
    Committed(T),
    Failed,
}

#[derive(Debug, Default)]
pub struct FetchGate {
    current: HashMap<Slot, FetchToken>,
    next_token: u64,
    failed: bool,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request on `slot`, superseding whatever was in flight there.
    pub fn issue(&mut self, slot: Slot) -> FetchToken {
        self.next_token += 1;
        let token = FetchToken(self.next_token);
        tracing::debug!(%slot, token = token.0, "fetch issued");
        self.current.insert(slot, token);
        token
    }

    pub fn is_stale(&self, slot: &Slot, token: FetchToken) -> bool {
        self.current.get(slot) != Some(&token)
    }

    pub fn in_flight(&self, slot: &Slot) -> bool {
        self.current.contains_key(slot)
    }

    /// Forget the current request on `slot` so its response is discarded.
    pub fn invalidate(&mut self, slot: &Slot) {
        self.current.remove(slot);
    }

    pub fn invalidate_films(&mut self) {
        self.current.retain(|slot, _| !matches!(slot, Slot::FilmDetail(_)));
    }

    pub fn settle<T>(
        &mut self,
        slot: &Slot,
        token: FetchToken,
        outcome: Result<T>,
    ) -> Settlement<T> {
        if self.is_stale(slot, token) {
            tracing::debug!(%slot, token = token.0, "stale response discarded");
            return Settlement::Stale;
        }
        self.current.remove(slot);

        match outcome {
            Ok(value) => Settlement::Committed(value),
            Err(e) => {
                tracing::warn!(%slot, error = %e, "fetch failed");
                self.failed = true;
                Settlement::Failed
            }
        }
    }

    /// Set once any accepted fetch has failed; never cleared.
    pub fn has_failed(&self) -> bool {
        self.failed
    }
}
