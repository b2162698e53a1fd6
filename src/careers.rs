use crate::fetch::PageFetcher;
use crate::types::Company;
use std::collections::HashSet;
use tracing::info;

/// Path suffixes commonly used for career pages, tried against the
/// company homepage in this order.
const COMMON_CAREERS_PATHS: [&str; 10] = [
    "careers",
    "jobs",
    "company/careers",
    "company/jobs",
    "about/careers",
    "about/jobs",
    "careers/jobs",
    "join-us",
    "work-with-us",
    "team",
];

fn normalize_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// Ordered candidate careers URLs for a company: explicit URLs first,
/// then homepage + common path. Deduplicated on the trailing-slash
/// normalized form, preserving order.
pub fn candidate_careers_urls(company: &Company) -> Vec<String> {
    let mut urls: Vec<String> = company
        .careers_urls
        .iter()
        .filter(|u| !u.is_empty())
        .cloned()
        .collect();

    let homepage = company.homepage.trim_end_matches('/');
    if !homepage.is_empty() {
        for path in COMMON_CAREERS_PATHS {
            urls.push(format!("{}/{}", homepage, path));
        }
    }

    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for url in urls {
        let normalized = normalize_url(&url).to_string();
        if !normalized.is_empty() && seen.insert(normalized.clone()) {
            ordered.push(normalized);
        }
    }
    ordered
}

/// Try each candidate in order and return the first that yields usable
/// HTML, together with that HTML.
pub async fn find_working_careers_url(
    fetcher: &PageFetcher,
    company: &Company,
) -> Option<(String, String)> {
    for url in candidate_careers_urls(company) {
        if let Some(html) = fetcher.fetch_page(&url).await {
            info!("Careers page for {}: {}", company.name, url);
            return Some((url, html));
        }
    }
    None
}
