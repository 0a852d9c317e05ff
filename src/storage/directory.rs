//! Two-tier company lookup: persisted store first, sample dataset second.

use crate::storage::{Company, CompanyStore, StoreError, sample};

/// Outcome of a lookup by name, tagged with the tier that answered
#[derive(Debug, Clone, PartialEq)]
pub enum CompanyLookup {
    Stored(Company),
    Sample(Company),
    NotFound,
}

impl CompanyLookup {
    pub fn tier(&self) -> &'static str {
        match self {
            CompanyLookup::Stored(_) => "store",
            CompanyLookup::Sample(_) => "sample",
            CompanyLookup::NotFound => "none",
        }
    }

    pub fn into_company(self) -> Option<Company> {
        match self {
            CompanyLookup::Stored(c) | CompanyLookup::Sample(c) => Some(c),
            CompanyLookup::NotFound => None,
        }
    }
}

/// Listing result; the sample set only answers when the store is empty
#[derive(Debug, Clone, PartialEq)]
pub enum CompanyListing {
    Stored(Vec<Company>),
    Sample(Vec<Company>),
}

impl CompanyListing {
    pub fn tier(&self) -> &'static str {
        match self {
            CompanyListing::Stored(_) => "store",
            CompanyListing::Sample(_) => "sample",
        }
    }

    pub fn into_companies(self) -> Vec<Company> {
        match self {
            CompanyListing::Stored(c) | CompanyListing::Sample(c) => c,
        }
    }
}

/// Find a company by exact name. Store errors are returned, not masked by
/// the sample tier.
pub async fn lookup_company(
    store: &dyn CompanyStore,
    name: &str,
) -> Result<CompanyLookup, StoreError> {
    if let Some(company) = store.find_company_by_name(name).await? {
        return Ok(CompanyLookup::Stored(company));
    }

    Ok(match sample::find_sample(name) {
        Some(company) => CompanyLookup::Sample(company.clone()),
        None => CompanyLookup::NotFound,
    })
}

/// List persisted companies, or the whole sample set if none are stored
pub async fn list_companies(
    store: &dyn CompanyStore,
    limit: i64,
) -> Result<CompanyListing, StoreError> {
    let stored = store.list_companies(limit).await?;
    if stored.is_empty() {
        Ok(CompanyListing::Sample(sample::sample_companies().to_vec()))
    } else {
        Ok(CompanyListing::Stored(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryStore, LIST_LIMIT, records::new_id};

    fn company(name: &str) -> Company {
        Company {
            id: new_id(),
            name: name.to_string(),
            industry: None,
            quirk_news: Vec::new(),
        }
    }

    #[tokio::test]
    async fn empty_store_falls_back_to_sample() {
        let store = InMemoryStore::new();
        let lookup = lookup_company(&store, "Acme Corporation").await.unwrap();
        assert_eq!(lookup.tier(), "sample");

        let listing = list_companies(&store, LIST_LIMIT).await.unwrap();
        assert_eq!(listing.tier(), "sample");
        assert_eq!(listing.into_companies().len(), 2);
    }

    #[tokio::test]
    async fn stored_company_shadows_sample() {
        let store = InMemoryStore::with_companies(vec![company("Acme Corporation")]);
        let lookup = lookup_company(&store, "Acme Corporation").await.unwrap();
        assert_eq!(lookup.tier(), "store");
        assert_eq!(lookup.into_company().unwrap().industry, None);
    }

    #[tokio::test]
    async fn one_stored_company_hides_whole_sample_listing() {
        let store = InMemoryStore::with_companies(vec![company("Initech")]);
        let listing = list_companies(&store, LIST_LIMIT).await.unwrap();
        assert_eq!(listing.tier(), "store");
        let names: Vec<String> = listing.into_companies().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Initech"]);
    }

    #[tokio::test]
    async fn listing_respects_limit() {
        let store = InMemoryStore::with_companies((0..5).map(|i| company(&format!("Co {i}"))).collect());
        let listing = list_companies(&store, 3).await.unwrap();
        assert_eq!(listing.into_companies().len(), 3);
    }

    #[tokio::test]
    async fn miss_everywhere_is_not_found() {
        let store = InMemoryStore::new();
        let lookup = lookup_company(&store, "Nonexistent Co").await.unwrap();
        assert_eq!(lookup, CompanyLookup::NotFound);
    }

    #[tokio::test]
    async fn store_error_is_not_masked_by_sample() {
        let store = InMemoryStore::unavailable();
        assert!(lookup_company(&store, "Acme Corporation").await.is_err());
        assert!(list_companies(&store, LIST_LIMIT).await.is_err());
    }
}
