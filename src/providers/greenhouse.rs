use crate::fetch::PageFetcher;
use crate::types::RawJob;
use serde::Deserialize;
use tracing::info;

pub(crate) const SIGNATURES: &[&str] = &["greenhouse.io", "boards.greenhouse.io"];

pub(crate) const ACCOUNT_PATTERNS: &[&str] = &[
    r"(?i)boards\.greenhouse\.io/([a-zA-Z0-9_-]+)",
    r"(?i)boards-api\.greenhouse\.io/v1/boards/([a-zA-Z0-9_-]+)",
    r"(?i)greenhouse\.io/([a-zA-Z0-9_-]+)",
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
    location: Option<Location>,
    #[serde(default)]
    absolute_url: String,
    updated_at: Option<String>,
    created_at: Option<String>,
    content: Option<String>,
}

#[derive(Deserialize)]
struct Location {
    #[serde(default)]
    name: String,
}

pub(crate) async fn fetch_jobs(fetcher: &PageFetcher, board: &str) -> Vec<RawJob> {
    let url = format!(
        "https://boards-api.greenhouse.io/v1/boards/{}/jobs?content=true",
        board
    );
    let Some(body) = fetcher.fetch_page(&url).await else {
        return Vec::new();
    };
    let jobs = parse_jobs(&body);
    info!("Greenhouse board {} returned {} jobs", board, jobs.len());
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
            location: job.location.map(|l| l.name).unwrap_or_default(),
            url: job.absolute_url,
            posted_at: job.updated_at.or(job.created_at),
            description: job.content.unwrap_or_default(),
        })
        .collect()
}
