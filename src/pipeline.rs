use crate::careers;
use crate::fetch::PageFetcher;
use crate::filter::ExperienceRules;
use crate::jsonld;
use crate::providers::{Provider, ProviderRegistry};
use crate::types::{Company, Job, RawJob};
use anyhow::Result;
use std::time::Duration;
use tracing::{info, warn};

/// Sequential scan pipeline: one company at a time, provider route
/// first, JSON-LD fallback second, entry-level filter last.
pub struct Pipeline {
    fetcher: PageFetcher,
    registry: ProviderRegistry,
    rules: ExperienceRules,
    sleep: Duration,
    max_per_company: usize,
}

impl Pipeline {
    /// `max_per_company` of 0 means unlimited.
    pub fn new(sleep: Duration, max_per_company: usize) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new()?,
            registry: ProviderRegistry::new(),
            rules: ExperienceRules::new(),
            sleep,
            max_per_company,
        })
    }

    pub async fn run(&self, companies: &[Company]) -> Vec<Job> {
        let mut all_jobs = Vec::new();
        for company in companies {
            let mut jobs = self.collect_company_jobs(company).await;
            if self.max_per_company > 0 && jobs.len() > self.max_per_company {
                jobs.truncate(self.max_per_company);
            }
            info!("{}: {} matching jobs", company.name, jobs.len());
            all_jobs.extend(jobs);
        }
        all_jobs
    }

    /// Every failure inside this path is absorbed: a company that cannot
    /// be resolved or parsed simply contributes zero jobs.
    pub async fn collect_company_jobs(&self, company: &Company) -> Vec<Job> {
        let Some((careers_url, html)) =
            careers::find_working_careers_url(&self.fetcher, company).await
        else {
            warn!("No working careers page for {}", company.name);
            return Vec::new();
        };

        let provider = self.registry.detect(&careers_url, &html);
        info!("{}: provider {}", company.name, provider.tag());

        let mut raw_jobs: Vec<RawJob> = Vec::new();
        if provider != Provider::Generic {
            if let Some(account) = self.registry.extract_account(provider, &careers_url, &html) {
                raw_jobs = self
                    .registry
                    .fetch_jobs(provider, &self.fetcher, &account)
                    .await;
            } else {
                warn!(
                    "{}: no {} account id found, falling back",
                    company.name,
                    provider.tag()
                );
            }
        }

        if raw_jobs.is_empty() {
            raw_jobs = jsonld::extract_jobs(&html, &careers_url);
        }

        // Politeness throttle between companies, not a correctness need.
        tokio::time::sleep(self.sleep).await;

        self.rules
            .filter_jobs(&company.name, raw_jobs, &careers_url, provider.tag())
    }
}
