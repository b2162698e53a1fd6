use crate::types::RawJob;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Extract JobPosting records from the structured-data script blocks of
/// a careers page. Used whenever no provider route produced jobs.
///
/// Accepts a single object, an array of objects, or an object carrying
/// an `@graph` list. Malformed blocks are skipped silently.
pub fn extract_jobs(html: &str, base_url: &str) -> Vec<RawJob> {
    let document = Html::parse_document(html);
    let selector = match Selector::parse(r#"script[type="application/ld+json"]"#) {
        Ok(sel) => sel,
        Err(_) => return Vec::new(),
    };

    let mut jobs = Vec::new();
    for script in document.select(&selector) {
        let raw = script.text().collect::<String>();
        if raw.trim().is_empty() {
            continue;
        }
        let data: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                debug!("Skipping malformed ld+json block: {}", e);
                continue;
            }
        };
        for item in items_of(data) {
            if let Some(job) = job_posting(&item, base_url) {
                jobs.push(job);
            }
        }
    }
    jobs
}

fn items_of(data: Value) -> Vec<Value> {
    match data {
        Value::Array(items) => items,
        Value::Object(ref map) if map.contains_key("@graph") => match map.get("@graph") {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        },
        other => vec![other],
    }
}

fn job_posting(item: &Value, base_url: &str) -> Option<RawJob> {
    let obj = item.as_object()?;
    if obj.get("@type").and_then(Value::as_str) != Some("JobPosting") {
        return None;
    }

    let title = obj.get("title").and_then(Value::as_str).unwrap_or_default();
    let mut url = obj
        .get("url")
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
        .unwrap_or(base_url)
        .to_string();
    if url.starts_with('/') {
        if let Ok(base) = Url::parse(base_url) {
            if let Ok(joined) = base.join(&url) {
                url = joined.to_string();
            }
        }
    }

    Some(RawJob {
        title: title.to_string(),
        location: locality(obj.get("jobLocation")),
        url,
        posted_at: obj
            .get("datePosted")
            .and_then(Value::as_str)
            .map(str::to_string),
        description: obj
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    })
}

/// Best-effort locality: single-location object first, else the first
/// element of a multi-location list.
fn locality(location: Option<&Value>) -> String {
    fn from_object(loc: &Value) -> Option<String> {
        loc.get("address")?
            .get("addressLocality")?
            .as_str()
            .map(str::to_string)
    }
    match location {
        Some(loc @ Value::Object(_)) => from_object(loc),
        Some(Value::Array(items)) => items.first().and_then(from_object),
        _ => None,
    }
    .unwrap_or_default()
}
