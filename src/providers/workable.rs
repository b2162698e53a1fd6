use crate::fetch::PageFetcher;
use crate::types::RawJob;
use serde::Deserialize;
use tracing::info;

pub(crate) const SIGNATURES: &[&str] = &["workable.com"];

pub(crate) const ACCOUNT_PATTERNS: &[&str] = &[
    r"(?i)jobs\.workable\.com/([a-zA-Z0-9_-]+)",
    r"(?i)apply\.workable\.com/([a-zA-Z0-9_-]+)",
    r"(?i)workable\.com/([a-zA-Z0-9_-]+)/jobs",
];

#[derive(Deserialize)]
struct AccountResponse {
    #[serde(default)]
    jobs: Vec<AccountJob>,
}

#[derive(Deserialize)]
struct AccountJob {
    #[serde(default)]
    title: String,
    location: Option<Location>,
    shortlink: Option<String>,
    application_url: Option<String>,
    created_at: Option<String>,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize, Default)]
struct Location {
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: String,
}

pub(crate) async fn fetch_jobs(fetcher: &PageFetcher, account: &str) -> Vec<RawJob> {
    let url = format!("https://www.workable.com/api/accounts/{}?details=true", account);
    let Some(body) = fetcher.fetch_page(&url).await else {
        return Vec::new();
    };
    let jobs = parse_jobs(&body);
    info!("Workable account {} returned {} jobs", account, jobs.len());
    jobs
}

fn parse_jobs(body: &str) -> Vec<RawJob> {
    let Ok(response) = serde_json::from_str::<AccountResponse>(body) else {
        return Vec::new();
    };
    response
        .jobs
        .into_iter()
        .map(|job| {
            let location = job
                .location
                .map(|l| if l.city.is_empty() { l.country } else { l.city })
                .unwrap_or_default();
            RawJob {
                title: job.title,
                location,
                url: job.shortlink.or(job.application_url).unwrap_or_default(),
                posted_at: job.created_at,
                description: job.description,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city_falls_back_to_country() {
        let body = r#"{
            "jobs": [
                {
                    "title": "Intern",
                    "location": {"city": "Athens", "country": "Greece"},
                    "shortlink": "https://apply.workable.com/j/1",
                    "created_at": "2024-03-01",
                    "description": "Internship"
                },
                {
                    "title": "Engineer",
                    "location": {"city": "", "country": "Greece"},
                    "application_url": "https://apply.workable.com/j/2/apply"
                }
            ]
        }"#;
        let jobs = parse_jobs(body);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].location, "Athens");
        assert_eq!(jobs[0].url, "https://apply.workable.com/j/1");
        assert_eq!(jobs[1].location, "Greece");
        assert_eq!(jobs[1].url, "https://apply.workable.com/j/2/apply");
    }

    #[test]
    fn test_parse_garbage_yields_nothing() {
        assert!(parse_jobs("not json").is_empty());
    }
}
