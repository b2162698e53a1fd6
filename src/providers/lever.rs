use crate::fetch::PageFetcher;
use crate::types::RawJob;
use serde::Deserialize;
use tracing::info;

pub(crate) const SIGNATURES: &[&str] = &["lever.co"];

pub(crate) const ACCOUNT_PATTERNS: &[&str] = &[
    r"(?i)jobs\.lever\.co/([a-zA-Z0-9_-]+)",
    r"(?i)api\.lever\.co/v0/postings/([a-zA-Z0-9_-]+)",
];

#[derive(Deserialize)]
struct Posting {
    #[serde(default)]
    text: String,
    #[serde(default)]
    categories: Categories,
    #[serde(rename = "hostedUrl")]
    hosted_url: Option<String>,
    #[serde(rename = "applyUrl")]
    apply_url: Option<String>,
    // Epoch milliseconds.
    #[serde(rename = "createdAt")]
    created_at: Option<i64>,
    #[serde(rename = "descriptionPlain")]
    description_plain: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Default)]
struct Categories {
    #[serde(default)]
    location: String,
}

pub(crate) async fn fetch_jobs(fetcher: &PageFetcher, account: &str) -> Vec<RawJob> {
    let url = format!("https://api.lever.co/v0/postings/{}?mode=json", account);
    let Some(body) = fetcher.fetch_page(&url).await else {
        return Vec::new();
    };
    let jobs = parse_jobs(&body);
    info!("Lever account {} returned {} jobs", account, jobs.len());
    jobs
}

fn parse_jobs(body: &str) -> Vec<RawJob> {
    let Ok(postings) = serde_json::from_str::<Vec<Posting>>(body) else {
        return Vec::new();
    };
    postings
        .into_iter()
        .map(|job| RawJob {
            title: job.text,
            location: job.categories.location,
            // hostedUrl is the canonical listing page; applyUrl skips it.
            url: job.hosted_url.or(job.apply_url).unwrap_or_default(),
            posted_at: job.created_at.map(|ms| ms.to_string()),
            description: job.description_plain.or(job.description).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_postings() {
        let body = r#"[
            {
                "text": "Associate Designer",
                "categories": {"location": "Remote"},
                "hostedUrl": "https://jobs.lever.co/acme/1",
                "applyUrl": "https://jobs.lever.co/acme/1/apply",
                "createdAt": 1714500000000,
                "descriptionPlain": "Plain text",
                "description": "<p>Rich text</p>"
            },
            {
                "text": "Engineer",
                "applyUrl": "https://jobs.lever.co/acme/2/apply",
                "description": "<p>Only rich</p>"
            }
        ]"#;
        let jobs = parse_jobs(body);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].url, "https://jobs.lever.co/acme/1");
        assert_eq!(jobs[0].posted_at.as_deref(), Some("1714500000000"));
        assert_eq!(jobs[0].description, "Plain text");
        assert_eq!(jobs[1].url, "https://jobs.lever.co/acme/2/apply");
        assert_eq!(jobs[1].location, "");
        assert_eq!(jobs[1].description, "<p>Only rich</p>");
        assert_eq!(jobs[1].posted_at, None);
    }

    #[test]
    fn test_parse_non_array_yields_nothing() {
        assert!(parse_jobs(r#"{"error": "not found"}"#).is_empty());
    }
}
