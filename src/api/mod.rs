pub mod client;
pub mod error;
pub mod models;

use async_trait::async_trait;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use models::{Contact, ContactDraft};

/// Remote collection of contacts. Every operation is a single request with
/// no retry; failures surface to the caller.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>>;

    /// The returned record carries the server-assigned id.
    async fn create(&self, draft: &ContactDraft) -> Result<Contact>;

    async fn update(&self, id: &str, draft: &ContactDraft) -> Result<Contact>;

    async fn remove(&self, id: &str) -> Result<()>;
}
