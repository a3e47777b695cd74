use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Result, StarfolkError};
use crate::source::DataSource;
use crate::types::{CharacterDetail, FilmDetail, PageListing, ResourceRef};

pub struct Swapi {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for Swapi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Swapi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl From<reqwest::Error> for StarfolkError {
    fn from(err: reqwest::Error) -> Self {
        StarfolkError::Api(err.to_string())
    }
}

impl Swapi {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("starfolk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &ResourceRef) -> Result<T> {
        tracing::debug!(url = %resource, "GET");
        let response = self.client.get(resource.as_str()).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StarfolkError::Api(format!("SWAPI {}: {}", status, text)));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| StarfolkError::Decode(format!("{}: {}", resource, e)))
    }
}

#[async_trait]
impl DataSource for Swapi {
    fn name(&self) -> &str {
        "SWAPI"
    }

    fn page_ref(&self, page: u32) -> ResourceRef {
        ResourceRef::new(format!("{}/people/?page={}", self.base_url, page))
    }

    async fn fetch_page(&self, page: &ResourceRef) -> Result<PageListing> {
        self.get_json(page).await
    }

    async fn fetch_character(&self, character: &ResourceRef) -> Result<CharacterDetail> {
        self.get_json(character).await
    }

    async fn fetch_film(&self, film: &ResourceRef) -> Result<FilmDetail> {
        self.get_json(film).await
    }
}
