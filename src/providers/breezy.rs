use crate::fetch::PageFetcher;
use crate::types::RawJob;
use serde::Deserialize;
use tracing::info;

pub(crate) const SIGNATURES: &[&str] = &["breezy.hr"];

pub(crate) const ACCOUNT_PATTERNS: &[&str] = &[
    r"(?i)https?://([a-zA-Z0-9_-]+)\.breezy\.hr",
    r"(?i)breezy\.hr/([a-zA-Z0-9_-]+)",
];

#[derive(Deserialize)]
struct Position {
    #[serde(default)]
    name: String,
    location: Option<Location>,
    #[serde(default)]
    url: String,
    created_at: Option<String>,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Location {
    Name(String),
    Object {
        #[serde(default)]
        name: String,
    },
}

impl Location {
    fn into_string(self) -> String {
        match self {
            Location::Name(name) => name,
            Location::Object { name } => name,
        }
    }
}

pub(crate) async fn fetch_jobs(fetcher: &PageFetcher, company: &str) -> Vec<RawJob> {
    let url = format!("https://api.breezy.hr/v3/company/{}/positions", company);
    let Some(body) = fetcher.fetch_page(&url).await else {
        return Vec::new();
    };
    let jobs = parse_jobs(&body);
    info!("Breezy company {} returned {} jobs", company, jobs.len());
    jobs
}

fn parse_jobs(body: &str) -> Vec<RawJob> {
    let Ok(positions) = serde_json::from_str::<Vec<Position>>(body) else {
        return Vec::new();
    };
    positions
        .into_iter()
        .map(|job| RawJob {
            title: job.name,
            location: job.location.map(Location::into_string).unwrap_or_default(),
            url: job.url,
            posted_at: job.created_at,
            description: job.description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positions() {
        let body = r#"[
            {
                "name": "Apprentice Carpenter",
                "location": {"name": "Oslo"},
                "url": "https://acme.breezy.hr/p/1",
                "created_at": "2024-02-20",
                "description": "Build"
            },
            {
                "name": "Engineer",
                "location": "Remote",
                "url": "https://acme.breezy.hr/p/2"
            }
        ]"#;
        let jobs = parse_jobs(body);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].location, "Oslo");
        assert_eq!(jobs[1].location, "Remote");
    }

    #[test]
    fn test_parse_error_object_yields_nothing() {
        assert!(parse_jobs(r#"{"error": "unknown company"}"#).is_empty());
    }
}
