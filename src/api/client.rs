use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Response, StatusCode};
use url::Url;

use crate::api::error::{ApiError, Result};
use crate::api::models::{Contact, ContactDraft};
use crate::api::ContactStore;
use crate::app::Settings;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP accessor for a json-server style collection, e.g. `http://localhost:3001/persons`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    collection_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, collection: &str) -> Result<Self> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Self::with_http(http, base_url, collection)
    }

    pub fn with_http(http: HttpClient, base_url: &str, collection: &str) -> Result<Self> {
        let collection_url = Self::collection_url(base_url, collection);
        Url::parse(&collection_url)?;
        Ok(Self { http, collection_url })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.base_url, &settings.collection)
    }

    fn collection_url(base_url: &str, collection: &str) -> String {
        let base = base_url.trim().trim_end_matches('/');
        let collection = collection.trim_matches('/');
        format!("{}/{}", base, collection)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    pub fn url(&self) -> &str {
        &self.collection_url
    }

    fn check(resp: Response) -> Result<Response> {
        match resp.status() {
            s if s.is_success() => Ok(resp),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            s => Err(ApiError::Status(s)),
        }
    }

    /// Checks that the collection answers at all. Any HTTP status counts as reachable.
    pub async fn ping(&self) -> Result<u16> {
        let resp = self.http.get(&self.collection_url).timeout(PING_TIMEOUT).send().await?;
        Ok(resp.status().as_u16())
    }

    pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
        debug!("GET {}", self.collection_url);
        let resp = self.http.get(&self.collection_url).send().await?;
        let contacts = Self::check(resp)?.json::<Vec<Contact>>().await?;
        Ok(contacts)
    }

    pub async fn create_contact(&self, draft: &ContactDraft) -> Result<Contact> {
        debug!("POST {} name={}", self.collection_url, draft.name);
        let resp = self.http.post(&self.collection_url).json(draft).send().await?;
        let created = Self::check(resp)?.json::<Contact>().await?;
        Ok(created)
    }

    pub async fn update_contact(&self, id: &str, draft: &ContactDraft) -> Result<Contact> {
        let endpoint = self.item_url(id);
        debug!("PUT {} name={}", endpoint, draft.name);
        let resp = self.http.put(&endpoint).json(draft).send().await?;
        let updated = Self::check(resp)?.json::<Contact>().await?;
        Ok(updated)
    }

    pub async fn remove_contact(&self, id: &str) -> Result<()> {
        let endpoint = self.item_url(id);
        debug!("DELETE {}", endpoint);
        let resp = self.http.delete(&endpoint).send().await?;
        Self::check(resp)?;
        Ok(())
    }
}

#[async_trait]
impl ContactStore for ApiClient {
    async fn list(&self) -> Result<Vec<Contact>> {
        self.list_contacts().await
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact> {
        self.create_contact(draft).await
    }

    async fn update(&self, id: &str, draft: &ContactDraft) -> Result<Contact> {
        self.update_contact(id, draft).await
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.remove_contact(id).await
    }
}
