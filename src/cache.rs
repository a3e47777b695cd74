use std::collections::HashMap;

use crate::types::{FilmDetail, ResourceRef};

/// Films fetched for the character currently on screen.
///
/// Entries never change once inserted. The whole map is dropped whenever a
/// different character session starts.
#[derive(Debug, Clone, Default)]
pub struct FilmCache {
    films: HashMap<ResourceRef, FilmDetail>,
}

impl FilmCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, film: &ResourceRef) -> Option<&FilmDetail> {
        self.films.get(film)
    }

    pub fn contains(&self, film: &ResourceRef) -> bool {
        self.films.contains_key(film)
    }

    /// Insert once; a second put for the same ref keeps the first value.
    pub fn put(&mut self, film: ResourceRef, detail: FilmDetail) {
        self.films.entry(film).or_insert(detail);
    }

    pub fn clear(&mut self) {
        self.films.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.films.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str) -> FilmDetail {
        FilmDetail {
            title: title.to_string(),
            director: "George Lucas".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn put_then_get() {
        let mut cache = FilmCache::new();
        let r = ResourceRef::new("films/1");
        cache.put(r.clone(), film("A New Hope"));
        assert_eq!(cache.get(&r).map(|f| f.title.as_str()), Some("A New Hope"));
    }

    #[test]
    fn put_is_insert_once() {
        let mut cache = FilmCache::new();
        let r = ResourceRef::new("films/1");
        cache.put(r.clone(), film("A New Hope"));
        cache.put(r.clone(), film("Something Else"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&r).unwrap().title, "A New Hope");
    }

    #[test]
    fn clear_empties() {
        let mut cache = FilmCache::new();
        cache.put(ResourceRef::new("films/1"), film("A New Hope"));
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains(&ResourceRef::new("films/1")));
    }
}
