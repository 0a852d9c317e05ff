//! Hard-coded fallback companies.
//!
//! Built once per process and never persisted, so identifiers stay stable
//! for the lifetime of the server.

use crate::storage::records::{new_id, Company, NewsItem, QuirkFactor};
use std::sync::LazyLock;

static SAMPLE_COMPANIES: LazyLock<Vec<Company>> = LazyLock::new(build);

/// The full sample dataset in its fixed order
pub fn sample_companies() -> &'static [Company] {
    &SAMPLE_COMPANIES
}

/// Exact-name scan of the sample dataset
pub fn find_sample(name: &str) -> Option<&'static Company> {
    sample_companies().iter().find(|c| c.name == name)
}

/// Quirky news for a sample company, empty when the name is unknown
pub fn quirky_news_for(name: &str) -> Vec<NewsItem> {
    find_sample(name)
        .map(|c| c.quirk_news.clone())
        .unwrap_or_default()
}

fn news(
    headline: &str,
    source: &str,
    date: &str,
    quirk_factor: QuirkFactor,
    summary: &str,
    sentiment: &str,
) -> NewsItem {
    NewsItem {
        id: new_id(),
        headline: headline.to_string(),
        source: source.to_string(),
        date: date.to_string(),
        quirk_factor,
        summary: summary.to_string(),
        sentiment: sentiment.to_string(),
        url: "#".to_string(),
    }
}

fn build() -> Vec<Company> {
    vec![
        Company {
            id: new_id(),
            name: "Acme Corporation".to_string(),
            industry: Some("Technology".to_string()),
            quirk_news: vec![
                news(
                    "Acme CEO Starts Office Alpaca Farm to 'Boost Morale'",
                    "Tech Daily",
                    "March 15, 2025",
                    const { QuirkFactor::checked(4) },
                    "In an unusual workplace initiative, Acme's CEO has introduced a herd of alpacas to company headquarters, claiming they improve creativity and reduce stress.",
                    "😂",
                ),
                news(
                    "Acme's AI Assistant Accidentally Orders 10,000 Rubber Ducks",
                    "Business Insider",
                    "March 10, 2025",
                    const { QuirkFactor::checked(5) },
                    "A glitch in Acme's new AI procurement system resulted in thousands of rubber ducks being delivered to their main office. Employees have turned it into an impromptu charity drive.",
                    "😮",
                ),
            ],
        },
        Company {
            id: new_id(),
            name: "Globex Corporation".to_string(),
            industry: Some("Manufacturing".to_string()),
            quirk_news: vec![news(
                "Globex Introduces 'Casual Tuxedo Fridays'",
                "Business Fashion Weekly",
                "March 12, 2025",
                const { QuirkFactor::checked(3) },
                "In a twist on casual Fridays, Globex now requires employees to wear tuxedos and evening gowns, but in a 'casual way' each Friday.",
                "🤔",
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_acme_and_globex() {
        let names: Vec<&str> = sample_companies().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Acme Corporation", "Globex Corporation"]);
    }

    #[test]
    fn identifiers_are_stable_across_calls() {
        let first = find_sample("Acme Corporation").unwrap().id.clone();
        let second = find_sample("Acme Corporation").unwrap().id.clone();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_is_exact() {
        assert!(find_sample("acme corporation").is_none());
        assert!(find_sample(" Acme Corporation").is_none());
        assert_eq!(quirky_news_for("Acme Corporation").len(), 2);
        assert_eq!(quirky_news_for("Globex Corporation").len(), 1);
        assert!(quirky_news_for("Initech").is_empty());
    }
}
