use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a remote resource (a SWAPI URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRef(String);

impl ResourceRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of a lazily fetched value.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Absent,
    Pending,
    Loaded(T),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Absent
    }
}

impl<T> Remote<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Remote::Pending)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Remote<&T> {
        match self {
            Remote::Absent => Remote::Absent,
            Remote::Pending => Remote::Pending,
            Remote::Loaded(value) => Remote::Loaded(value),
        }
    }
}

/// One page of the people listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageListing {
    #[serde(rename = "results", default)]
    pub items: Vec<CharacterSummary>,
    #[serde(rename = "count", default)]
    pub total_count: u64,
    #[serde(rename = "previous", default)]
    pub previous_page: Option<ResourceRef>,
    #[serde(rename = "next", default)]
    pub next_page: Option<ResourceRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub name: String,
    #[serde(rename = "url")]
    pub detail_ref: ResourceRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub skin_color: String,
    pub hair_color: String,
    pub eye_color: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(rename = "films", default)]
    pub film_refs: Vec<ResourceRef>,
}

impl CharacterDetail {
    pub fn height_label(&self) -> String {
        if self.height == "unknown" {
            "unknown height".to_string()
        } else {
            format!("{}cm", self.height)
        }
    }

    pub fn mass_label(&self) -> String {
        if self.mass == "unknown" {
            "unknown weight".to_string()
        } else {
            format!("{}kg", self.mass)
        }
    }

    pub fn appears_in(&self, film: &ResourceRef) -> bool {
        self.film_refs.contains(film)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmDetail {
    pub title: String,
    pub director: String,
    #[serde(rename = "opening_crawl")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_people_page() {
        let json = r#"{
            "count": 82,
            "next": "https://swapi.dev/api/people/?page=2",
            "previous": null,
            "results": [
                {"name": "Luke Skywalker", "height": "172", "url": "https://swapi.dev/api/people/1/"},
                {"name": "C-3PO", "url": "https://swapi.dev/api/people/2/"}
            ]
        }"#;
        let page: PageListing = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_count, 82);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Luke Skywalker");
        assert_eq!(
            page.items[1].detail_ref,
            ResourceRef::new("https://swapi.dev/api/people/2/")
        );
        assert!(page.previous_page.is_none());
        assert_eq!(
            page.next_page.as_ref().map(ResourceRef::as_str),
            Some("https://swapi.dev/api/people/?page=2")
        );
    }

    #[test]
    fn decode_page_without_results_is_empty() {
        let page: PageListing = serde_json::from_str(r#"{"detail": "Not found"}"#).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn decode_character() {
        let json = r#"{
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "films": ["https://swapi.dev/api/films/1/", "https://swapi.dev/api/films/2/"],
            "homeworld": "https://swapi.dev/api/planets/1/"
        }"#;
        let detail: CharacterDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.skin_color, "fair");
        assert_eq!(detail.film_refs.len(), 2);
        assert!(detail.appears_in(&ResourceRef::new("https://swapi.dev/api/films/2/")));
        assert_eq!(detail.height_label(), "172cm");
        assert_eq!(detail.mass_label(), "77kg");
    }

    #[test]
    fn unknown_measurements_get_words() {
        let json = r#"{
            "name": "Arvel Crynyd", "height": "unknown", "mass": "unknown",
            "hair_color": "brown", "skin_color": "fair", "eye_color": "brown"
        }"#;
        let detail: CharacterDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.height_label(), "unknown height");
        assert_eq!(detail.mass_label(), "unknown weight");
        assert!(detail.film_refs.is_empty());
    }

    #[test]
    fn decode_film_maps_opening_crawl() {
        let json = r#"{
            "title": "A New Hope",
            "episode_id": 4,
            "opening_crawl": "It is a period of civil war.",
            "director": "George Lucas"
        }"#;
        let film: FilmDetail = serde_json::from_str(json).unwrap();
        assert_eq!(film.title, "A New Hope");
        assert_eq!(film.director, "George Lucas");
        assert_eq!(film.description, "It is a period of civil war.");
    }

    #[test]
    fn decode_film_requires_director() {
        let json = r#"{"title": "A New Hope", "opening_crawl": "..."}"#;
        assert!(serde_json::from_str::<FilmDetail>(json).is_err());
    }
}
