pub mod directory;
pub mod memory;
pub mod mongo;
pub mod records;
pub mod sample;

pub use directory::{CompanyListing, CompanyLookup};
pub use memory::InMemoryStore;
pub use mongo::MongoStore;
pub use records::{Company, NewsItem, QuirkFactor};

use async_trait::async_trait;

pub const COMPANIES_COLLECTION: &str = "companies";
/// Reserved for a future news provider; created but never read or written
pub const NEWS_ITEMS_COLLECTION: &str = "news_items";

/// Maximum number of companies returned by a listing
pub const LIST_LIMIT: i64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] mongodb::error::Error),

    #[error("store did not report an inserted identifier")]
    MissingInsertedId,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Access to persisted company documents
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Create the `companies` and `news_items` collections if missing
    async fn ensure_collections(&self) -> Result<(), StoreError>;

    /// Up to `limit` companies in store-native order
    async fn list_companies(&self, limit: i64) -> Result<Vec<Company>, StoreError>;

    /// First company whose name matches exactly
    async fn find_company_by_name(&self, name: &str) -> Result<Option<Company>, StoreError>;

    /// Persist the whole nested document and return the storage identifier
    async fn insert_company(&self, company: &Company) -> Result<String, StoreError>;

    async fn close(&self) {}
}
