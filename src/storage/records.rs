use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh opaque record identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Rating of how unusual a news item is, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct QuirkFactor(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("quirkFactor must be between 1 and 5, got {0}")]
pub struct InvalidQuirkFactor(pub i64);

impl QuirkFactor {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Compile-time constructor for literal ratings
    pub const fn checked(value: u8) -> Self {
        assert!(value >= Self::MIN && value <= Self::MAX, "quirkFactor out of range");
        Self(value)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for QuirkFactor {
    type Error = InvalidQuirkFactor;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidQuirkFactor(value))
        }
    }
}

impl From<QuirkFactor> for i64 {
    fn from(factor: QuirkFactor) -> Self {
        factor.0 as i64
    }
}

/// A single quirky news item, owned by its company document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub headline: String,
    pub source: String,
    /// Free text, never parsed
    pub date: String,
    pub quirk_factor: QuirkFactor,
    pub summary: String,
    pub sentiment: String,
    pub url: String,
}

/// Company record as stored and served
///
/// `name` is the lookup key for every read endpoint. The store does not
/// enforce its uniqueness; the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: Option<String>,
    #[serde(default)]
    pub quirk_news: Vec<NewsItem>,
}
