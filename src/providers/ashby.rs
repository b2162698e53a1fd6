use crate::fetch::PageFetcher;
use crate::types::RawJob;
use serde::Deserialize;
use tracing::info;

pub(crate) const SIGNATURES: &[&str] = &["ashbyhq.com"];

pub(crate) const ACCOUNT_PATTERNS: &[&str] = &[
    r"(?i)jobs\.ashbyhq\.com/([a-zA-Z0-9_-]+)",
    r"(?i)ashbyhq\.com/([a-zA-Z0-9_-]+)",
];

#[derive(Deserialize)]
struct BoardResponse {
    #[serde(default)]
    jobs: Vec<BoardJob>,
}

#[derive(Deserialize)]
struct BoardJob {
    #[serde(default)]
    title: String,
    // The posting API serves location either as a plain string or as an
    // object with a name.
    location: Option<Location>,
    #[serde(rename = "jobUrl")]
    job_url: Option<String>,
    #[serde(rename = "applicationFormUrl")]
    application_form_url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    #[serde(rename = "descriptionHtml")]
    description_html: Option<String>,
    #[serde(rename = "descriptionPlain")]
    description_plain: Option<String>,
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

pub(crate) async fn fetch_jobs(fetcher: &PageFetcher, account: &str) -> Vec<RawJob> {
    let url = format!(
        "https://api.ashbyhq.com/posting-api/job-board/{}?includeCompensation=true",
        account
    );
    let Some(body) = fetcher.fetch_page(&url).await else {
        return Vec::new();
    };
    let jobs = parse_jobs(&body);
    info!("Ashby board {} returned {} jobs", account, jobs.len());
    jobs
}

fn parse_jobs(body: &str) -> Vec<RawJob> {
    let Ok(response) = serde_json::from_str::<BoardResponse>(body) else {
        return Vec::new();
    };
    response
        .jobs
        .into_iter()
        .map(|job| RawJob {
            title: job.title,
            location: job.location.map(Location::into_string).unwrap_or_default(),
            url: job.job_url.or(job.application_form_url).unwrap_or_default(),
            posted_at: job.published_at,
            description: job
                .description_html
                .or(job.description_plain)
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_string_and_object() {
        let body = r#"{
            "jobs": [
                {
                    "title": "New Grad Engineer",
                    "location": "San Francisco",
                    "jobUrl": "https://jobs.ashbyhq.com/acme/1",
                    "publishedAt": "2024-06-01",
                    "descriptionHtml": "<p>Desc</p>"
                },
                {
                    "title": "Designer",
                    "location": {"name": "London"},
                    "applicationFormUrl": "https://jobs.ashbyhq.com/acme/2/apply",
                    "descriptionPlain": "Plain desc"
                }
            ]
        }"#;
        let jobs = parse_jobs(body);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].location, "San Francisco");
        assert_eq!(jobs[0].url, "https://jobs.ashbyhq.com/acme/1");
        assert_eq!(jobs[0].description, "<p>Desc</p>");
        assert_eq!(jobs[1].location, "London");
        assert_eq!(jobs[1].url, "https://jobs.ashbyhq.com/acme/2/apply");
        assert_eq!(jobs[1].description, "Plain desc");
    }

    #[test]
    fn test_parse_garbage_yields_nothing() {
        assert!(parse_jobs("[]").is_empty());
        assert!(parse_jobs("oops").is_empty());
    }
}
