pub mod ashby;
pub mod breezy;
pub mod greenhouse;
pub mod lever;
pub mod recruitee;
pub mod smartrecruiters;
pub mod workable;

use crate::fetch::PageFetcher;
use crate::types::RawJob;
use regex::Regex;

/// Applicant tracking systems we can recognize on a careers page.
/// Teamtailor and Jobvite are detected but have no public-API fetcher;
/// they fall through to the generic JSON-LD extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Greenhouse,
    Lever,
    Ashby,
    Workable,
    Smartrecruiters,
    Recruitee,
    Breezy,
    Teamtailor,
    Jobvite,
    Generic,
}

impl Provider {
    pub fn tag(&self) -> &'static str {
        match self {
            Provider::Greenhouse => "greenhouse",
            Provider::Lever => "lever",
            Provider::Ashby => "ashby",
            Provider::Workable => "workable",
            Provider::Smartrecruiters => "smartrecruiters",
            Provider::Recruitee => "recruitee",
            Provider::Breezy => "breezy",
            Provider::Teamtailor => "teamtailor",
            Provider::Jobvite => "jobvite",
            Provider::Generic => "generic",
        }
    }
}

struct Entry {
    provider: Provider,
    signatures: &'static [&'static str],
    account_patterns: Vec<Regex>,
}

impl Entry {
    fn new(
        provider: Provider,
        signatures: &'static [&'static str],
        account_patterns: &[&str],
    ) -> Self {
        let account_patterns = account_patterns
            .iter()
            .map(|p| Regex::new(p).expect("Invalid account pattern"))
            .collect();
        Self {
            provider,
            signatures,
            account_patterns,
        }
    }
}

/// Registry of known providers: detection signatures, account-id
/// extraction rules and fetch dispatch, in fixed precedence order.
pub struct ProviderRegistry {
    entries: Vec<Entry>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        let entries = vec![
            Entry::new(
                Provider::Greenhouse,
                greenhouse::SIGNATURES,
                greenhouse::ACCOUNT_PATTERNS,
            ),
            Entry::new(Provider::Lever, lever::SIGNATURES, lever::ACCOUNT_PATTERNS),
            Entry::new(Provider::Ashby, ashby::SIGNATURES, ashby::ACCOUNT_PATTERNS),
            Entry::new(
                Provider::Workable,
                workable::SIGNATURES,
                workable::ACCOUNT_PATTERNS,
            ),
            Entry::new(
                Provider::Smartrecruiters,
                smartrecruiters::SIGNATURES,
                smartrecruiters::ACCOUNT_PATTERNS,
            ),
            Entry::new(
                Provider::Recruitee,
                recruitee::SIGNATURES,
                recruitee::ACCOUNT_PATTERNS,
            ),
            Entry::new(Provider::Breezy, breezy::SIGNATURES, breezy::ACCOUNT_PATTERNS),
            Entry::new(Provider::Teamtailor, &["teamtailor.com"], &[]),
            Entry::new(Provider::Jobvite, &["jobvite.com"], &[]),
        ];
        Self { entries }
    }

    /// Detect the provider hosting a careers page. Total over any
    /// (url, html) pair; first signature match wins in registry order,
    /// defaulting to Generic.
    pub fn detect(&self, url: &str, html: &str) -> Provider {
        let haystack = format!("{} {}", html.to_lowercase(), url.to_lowercase());
        self.entries
            .iter()
            .find(|e| e.signatures.iter().any(|s| haystack.contains(s)))
            .map(|e| e.provider)
            .unwrap_or(Provider::Generic)
    }

    /// Extract the provider account/board id from the careers URL and
    /// page HTML: first capture group of the first matching pattern.
    pub fn extract_account(&self, provider: Provider, url: &str, html: &str) -> Option<String> {
        let entry = self.entries.iter().find(|e| e.provider == provider)?;
        let text = format!("{} {}", url, html);
        entry
            .account_patterns
            .iter()
            .find_map(|p| p.captures(&text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Fetch and normalize jobs from the provider's public endpoint.
    /// Providers without a fetcher contribute nothing.
    pub async fn fetch_jobs(
        &self,
        provider: Provider,
        fetcher: &PageFetcher,
        account: &str,
    ) -> Vec<RawJob> {
        match provider {
            Provider::Greenhouse => greenhouse::fetch_jobs(fetcher, account).await,
            Provider::Lever => lever::fetch_jobs(fetcher, account).await,
            Provider::Ashby => ashby::fetch_jobs(fetcher, account).await,
            Provider::Workable => workable::fetch_jobs(fetcher, account).await,
            Provider::Smartrecruiters => smartrecruiters::fetch_jobs(fetcher, account).await,
            Provider::Recruitee => recruitee::fetch_jobs(fetcher, account).await,
            Provider::Breezy => breezy::fetch_jobs(fetcher, account).await,
            Provider::Teamtailor | Provider::Jobvite | Provider::Generic => Vec::new(),
        }
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_url() {
        let registry = ProviderRegistry::new();
        assert_eq!(
            registry.detect("https://boards.greenhouse.io/acme", ""),
            Provider::Greenhouse
        );
        assert_eq!(
            registry.detect("https://jobs.lever.co/acme", ""),
            Provider::Lever
        );
        assert_eq!(
            registry.detect("https://jobs.ashbyhq.com/acme", ""),
            Provider::Ashby
        );
    }

    #[test]
    fn test_detect_by_html() {
        let registry = ProviderRegistry::new();
        let html = "<script src='https://acme.recruitee.com/widget.js'></script>";
        assert_eq!(
            registry.detect("https://acme.com/careers", html),
            Provider::Recruitee
        );
    }

    #[test]
    fn test_detect_defaults_to_generic() {
        let registry = ProviderRegistry::new();
        assert_eq!(
            registry.detect("https://acme.com/careers", "<html>Join us!</html>"),
            Provider::Generic
        );
        assert_eq!(registry.detect("", ""), Provider::Generic);
    }

    #[test]
    fn test_detect_first_match_wins() {
        let registry = ProviderRegistry::new();
        // Both signatures present; greenhouse precedes lever in the table.
        let html = "links to lever.co and boards.greenhouse.io";
        assert_eq!(
            registry.detect("https://acme.com/careers", html),
            Provider::Greenhouse
        );
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        let registry = ProviderRegistry::new();
        assert_eq!(
            registry.detect("https://Apply.Workable.com/Acme", ""),
            Provider::Workable
        );
    }

    #[test]
    fn test_unhandled_providers_have_no_account() {
        let registry = ProviderRegistry::new();
        assert_eq!(
            registry.detect("https://acme.teamtailor.com", ""),
            Provider::Teamtailor
        );
        assert_eq!(
            registry.extract_account(Provider::Teamtailor, "https://acme.teamtailor.com", ""),
            None
        );
        assert_eq!(
            registry.extract_account(Provider::Jobvite, "https://jobs.jobvite.com/acme", ""),
            None
        );
    }

    #[test]
    fn test_extract_account_first_pattern_wins() {
        let registry = ProviderRegistry::new();
        let html = "see https://boards-api.greenhouse.io/v1/boards/widgetco/jobs";
        assert_eq!(
            registry.extract_account(Provider::Greenhouse, "https://boards.greenhouse.io/acme", html),
            Some("acme".to_string())
        );
    }
}
