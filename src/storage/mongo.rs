use crate::storage::{
    Company, CompanyStore, StoreError, COMPANIES_COLLECTION, NEWS_ITEMS_COLLECTION,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson};
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

/// MongoDB-backed company store
///
/// Holds one shared client; the driver pools connections and is safe to use
/// from concurrent requests.
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Parse the connection string and select the database.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first operation rather than here.
    pub async fn connect(url: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        let db = client.database(db_name);
        Ok(Self { client, db })
    }

    fn companies(&self) -> Collection<Company> {
        self.db.collection(COMPANIES_COLLECTION)
    }
}

#[async_trait]
impl CompanyStore for MongoStore {
    async fn ensure_collections(&self) -> Result<(), StoreError> {
        let existing = self.db.list_collection_names().await?;

        for name in [COMPANIES_COLLECTION, NEWS_ITEMS_COLLECTION] {
            if existing.iter().any(|n| n == name) {
                debug!(collection = name, "Collection exists");
            } else {
                self.db.create_collection(name).await?;
                info!(collection = name, "Created collection");
            }
        }

        Ok(())
    }

    async fn list_companies(&self, limit: i64) -> Result<Vec<Company>, StoreError> {
        let cursor = self.companies().find(doc! {}).limit(limit).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_company_by_name(&self, name: &str) -> Result<Option<Company>, StoreError> {
        Ok(self.companies().find_one(doc! { "name": name }).await?)
    }

    async fn insert_company(&self, company: &Company) -> Result<String, StoreError> {
        let result = self.companies().insert_one(company).await?;
        storage_id(result.inserted_id)
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client closed");
    }
}

fn storage_id(inserted: Bson) -> Result<String, StoreError> {
    match inserted {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(s) if !s.is_empty() => Ok(s),
        Bson::Null | Bson::Undefined | Bson::String(_) => Err(StoreError::MissingInsertedId),
        other => Ok(other.to_string()),
    }
}
