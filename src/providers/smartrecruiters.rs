use crate::fetch::PageFetcher;
use crate::types::RawJob;
use serde::Deserialize;
use tracing::info;

pub(crate) const SIGNATURES: &[&str] = &["smartrecruiters.com"];

pub(crate) const ACCOUNT_PATTERNS: &[&str] = &[
    r"(?i)smartrecruiters\.com/([a-zA-Z0-9_-]+)",
    r"(?i)api\.smartrecruiters\.com/v1/companies/([a-zA-Z0-9_-]+)",
];

#[derive(Deserialize)]
struct PostingsResponse {
    #[serde(default)]
    content: Vec<Posting>,
}

#[derive(Deserialize)]
struct Posting {
    #[serde(default)]
    name: String,
    location: Option<Location>,
    #[serde(rename = "ref")]
    #[serde(default)]
    reference: String,
    #[serde(rename = "releasedDate")]
    released_date: Option<String>,
    #[serde(rename = "jobAd")]
    job_ad: Option<JobAd>,
}

#[derive(Deserialize, Default)]
struct Location {
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: String,
}

#[derive(Deserialize)]
struct JobAd {
    #[serde(default)]
    sections: Sections,
}

#[derive(Deserialize, Default)]
struct Sections {
    #[serde(rename = "jobDescription")]
    job_description: Option<Section>,
}

#[derive(Deserialize)]
struct Section {
    #[serde(default)]
    text: String,
}

pub(crate) async fn fetch_jobs(fetcher: &PageFetcher, company: &str) -> Vec<RawJob> {
    let url = format!(
        "https://api.smartrecruiters.com/v1/companies/{}/postings",
        company
    );
    let Some(body) = fetcher.fetch_page(&url).await else {
        return Vec::new();
    };
    let jobs = parse_jobs(&body);
    info!("SmartRecruiters company {} returned {} jobs", company, jobs.len());
    jobs
}

fn parse_jobs(body: &str) -> Vec<RawJob> {
    let Ok(response) = serde_json::from_str::<PostingsResponse>(body) else {
        return Vec::new();
    };
    response
        .content
        .into_iter()
        .map(|job| {
            let location = job
                .location
                .map(|l| if l.city.is_empty() { l.country } else { l.city })
                .unwrap_or_default();
            let description = job
                .job_ad
                .and_then(|ad| ad.sections.job_description)
                .map(|s| s.text)
                .unwrap_or_default();
            RawJob {
                title: job.name,
                location,
                url: job.reference,
                posted_at: job.released_date,
                description,
            }
        })
        .collect()
}
