use serde::{Deserialize, Serialize};

/// A company to scan, as read from the input JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub careers_urls: Vec<String>,
}

/// Normalized intermediate job record. Every provider fetcher and the
/// JSON-LD fallback produce this shape; only the filter turns it into a
/// final [`Job`].
#[derive(Debug, Clone, Default)]
pub struct RawJob {
    pub title: String,
    pub location: String,
    pub url: String,
    pub posted_at: Option<String>,
    pub description: String,
}

/// Final job record written to jobs.json and jobs.csv.
///
/// Field order matters: the CSV column order is the declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub company: String,
    pub title: String,
    pub location: String,
    pub url: String,
    pub posted_at: Option<String>,
    pub source: String,
    pub careers_url: String,
    pub min_years: Option<u32>,
    pub entry_level: bool,
    pub match_reason: String,
}
