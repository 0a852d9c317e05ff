use crate::storage::{Company, CompanyStore, StoreError, records::new_id};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process company store
///
/// Keeps documents in insertion order. An unavailable store fails every
/// operation, which stands in for an unreachable database.
#[derive(Default)]
pub struct InMemoryStore {
    companies: RwLock<Vec<Company>>,
    unavailable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_companies(companies: Vec<Company>) -> Self {
        Self {
            companies: RwLock::new(companies),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            companies: RwLock::default(),
            unavailable: true,
        }
    }

    /// Number of persisted documents
    pub async fn len(&self) -> usize {
        self.companies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CompanyStore for InMemoryStore {
    async fn ensure_collections(&self) -> Result<(), StoreError> {
        self.check()
    }

    async fn list_companies(&self, limit: i64) -> Result<Vec<Company>, StoreError> {
        self.check()?;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self.companies.read().await.iter().take(limit).cloned().collect())
    }

    async fn find_company_by_name(&self, name: &str) -> Result<Option<Company>, StoreError> {
        self.check()?;
        Ok(self
            .companies
            .read()
            .await
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn insert_company(&self, company: &Company) -> Result<String, StoreError> {
        self.check()?;
        self.companies.write().await.push(company.clone());
        Ok(new_id())
    }
}
