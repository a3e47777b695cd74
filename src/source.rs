use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CharacterDetail, FilmDetail, PageListing, ResourceRef};

/// Remote dataset the navigator fetches from.
#[async_trait]
pub trait DataSource: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    /// Reference for an explicit 1-based page of the people listing.
    fn page_ref(&self, page: u32) -> ResourceRef;

    async fn fetch_page(&self, page: &ResourceRef) -> Result<PageListing>;
    async fn fetch_character(&self, character: &ResourceRef) -> Result<CharacterDetail>;
    async fn fetch_film(&self, film: &ResourceRef) -> Result<FilmDetail>;
}

#[cfg(test)]
pub mod fake {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::error::StarfolkError;
    use crate::pagination::{total_pages, PAGE_SIZE};
    use crate::types::CharacterSummary;

    const BASE: &str = "https://swapi.test/api";

    pub fn page_url(page: u32) -> ResourceRef {
        ResourceRef::new(format!("{}/people/?page={}", BASE, page))
    }

    pub fn person_url(id: u64) -> ResourceRef {
        ResourceRef::new(format!("{}/people/{}/", BASE, id))
    }

    pub fn film_url(id: u64) -> ResourceRef {
        ResourceRef::new(format!("{}/films/{}/", BASE, id))
    }

    pub fn summary(id: u64, name: &str) -> CharacterSummary {
        CharacterSummary {
            name: name.to_string(),
            detail_ref: person_url(id),
        }
    }

    /// In-memory dataset that records every request it serves.
    #[derive(Debug, Default)]
    pub struct FakeSource {
        pages: HashMap<ResourceRef, PageListing>,
        characters: HashMap<ResourceRef, CharacterDetail>,
        films: HashMap<ResourceRef, FilmDetail>,
        requests: Mutex<Vec<ResourceRef>>,
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        /// A people listing of `total` characters in pages of ten.
        pub fn with_people(mut self, total: u64) -> Self {
            let last = total_pages(total).max(1);
            for page in 1..=last {
                let first = (page as u64 - 1) * PAGE_SIZE + 1;
                let end = (page as u64 * PAGE_SIZE).min(total);
                let items = (first..=end)
                    .map(|id| summary(id, &format!("Person {}", id)))
                    .collect();
                let listing = PageListing {
                    items,
                    total_count: total,
                    previous_page: (page > 1).then(|| page_url(page - 1)),
                    next_page: (page < last).then(|| page_url(page + 1)),
                };
                self.pages.insert(page_url(page), listing);
            }
            self
        }

        pub fn with_character(mut self, id: u64, name: &str, films: &[u64]) -> Self {
            let detail = CharacterDetail {
                name: name.to_string(),
                height: "172".to_string(),
                mass: "unknown".to_string(),
                skin_color: "fair".to_string(),
                hair_color: "blond".to_string(),
                eye_color: "blue".to_string(),
                birth_year: "19BBY".to_string(),
                film_refs: films.iter().map(|f| film_url(*f)).collect(),
            };
            self.characters.insert(person_url(id), detail);
            self
        }

        pub fn with_film(mut self, id: u64, title: &str) -> Self {
            let film = FilmDetail {
                title: title.to_string(),
                director: "George Lucas".to_string(),
                description: "It is a period of civil war.".to_string(),
            };
            self.films.insert(film_url(id), film);
            self
        }

        pub fn request_count(&self, resource: &ResourceRef) -> usize {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .filter(|r| *r == resource)
                .count()
        }

        fn lookup<T: Clone>(&self, map: &HashMap<ResourceRef, T>, key: &ResourceRef) -> Result<T> {
            self.requests.lock().unwrap().push(key.clone());
            map.get(key)
                .cloned()
                .ok_or_else(|| StarfolkError::Api(format!("404 Not Found: {}", key)))
        }
    }

    #[async_trait]
    impl DataSource for FakeSource {
        fn name(&self) -> &str {
            "fake"
        }

        fn page_ref(&self, page: u32) -> ResourceRef {
            page_url(page)
        }

        async fn fetch_page(&self, page: &ResourceRef) -> Result<PageListing> {
            self.lookup(&self.pages, page)
        }

        async fn fetch_character(&self, character: &ResourceRef) -> Result<CharacterDetail> {
            self.lookup(&self.characters, character)
        }

        async fn fetch_film(&self, film: &ResourceRef) -> Result<FilmDetail> {
            self.lookup(&self.films, film)
        }
    }
}
