use crate::fetch::PageFetcher;
use crate::types::RawJob;
use serde::Deserialize;
use tracing::info;

pub(crate) const SIGNATURES: &[&str] = &["recruitee.com"];

pub(crate) const ACCOUNT_PATTERNS: &[&str] = &[
    r"(?i)https?://([a-zA-Z0-9_-]+)\.recruitee\.com",
    r"(?i)recruitee\.com/o/([a-zA-Z0-9_-]+)",
];

#[derive(Deserialize)]
struct OffersResponse {
    #[serde(default)]
    offers: Vec<Offer>,
}

#[derive(Deserialize)]
struct Offer {
    #[serde(default)]
    title: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    careers_url: String,
    created_at: Option<String>,
    #[serde(default)]
    description: String,
}

pub(crate) async fn fetch_jobs(fetcher: &PageFetcher, company: &str) -> Vec<RawJob> {
    let url = format!("https://{}.recruitee.com/api/offers/", company);
    let Some(body) = fetcher.fetch_page(&url).await else {
        return Vec::new();
    };
    let jobs = parse_jobs(&body);
    info!("Recruitee company {} returned {} jobs", company, jobs.len());
    jobs
}

fn parse_jobs(body: &str) -> Vec<RawJob> {
    let Ok(response) = serde_json::from_str::<OffersResponse>(body) else {
        return Vec::new();
    };
    response
        .offers
        .into_iter()
        .map(|offer| RawJob {
            title: offer.title,
            location: offer.location,
            url: offer.careers_url,
            posted_at: offer.created_at,
            description: offer.description,
        })
        .collect()
}
