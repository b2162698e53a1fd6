use crate::types::{Job, RawJob};
use regex::Regex;

/// Title keywords that mark a role as entry-level on their own.
pub const TITLE_KEYWORDS: [&str; 9] = [
    "entry",
    "entry-level",
    "junior",
    "associate",
    "new grad",
    "graduate",
    "early career",
    "intern",
    "apprentice",
];

/// Jobs asking for more than this many years of experience are excluded.
pub const MAX_YEARS_EXPERIENCE: u32 = 2;

pub fn is_entry_level_title(title: &str) -> bool {
    let lower = title.to_lowercase();
    TITLE_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Compiled experience-requirement patterns, built once and reused for
/// every job description.
pub struct ExperienceRules {
    years_patterns: Vec<Regex>,
    zero_to_two: Regex,
    two_plus: Regex,
}

impl ExperienceRules {
    pub fn new() -> Self {
        let years_patterns = [
            r"(?i)(\d+)\s*[-–]\s*(\d+)\s*years",
            r"(?i)(\d+)\+\s*years",
            r"(?i)at least\s*(\d+)\s*years",
            r"(?i)minimum\s*of\s*(\d+)\s*years",
            r"(?i)(\d+)\s*years",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid years pattern"))
        .collect();

        Self {
            years_patterns,
            zero_to_two: Regex::new(r"(?i)\b0\s*[-–]\s*2\s*years\b")
                .expect("Invalid 0-2 years pattern"),
            two_plus: Regex::new(r"(?i)\b2\+\s*years\b").expect("Invalid 2+ years pattern"),
        }
    }

    /// Minimum years of experience mentioned anywhere in the text: the
    /// smallest low bound across all matches of all patterns.
    pub fn extract_min_years(&self, text: &str) -> Option<u32> {
        if text.is_empty() {
            return None;
        }
        let mut min_years: Option<u32> = None;
        for pattern in &self.years_patterns {
            for caps in pattern.captures_iter(text) {
                let Ok(low) = caps[1].parse::<u32>() else {
                    continue;
                };
                if min_years.is_none_or(|m| low < m) {
                    min_years = Some(low);
                }
            }
        }
        min_years
    }

    /// Apply the entry-level rules to one company's raw jobs. First rule
    /// that fires decides the match_reason; jobs without a title are
    /// dropped outright.
    pub fn filter_jobs(
        &self,
        company: &str,
        jobs: Vec<RawJob>,
        careers_url: &str,
        source: &str,
    ) -> Vec<Job> {
        let mut filtered = Vec::new();
        for job in jobs {
            let title = job.title.trim();
            if title.is_empty() {
                continue;
            }
            let description = job.description.trim();
            let min_years = self.extract_min_years(description);
            let entry_level = is_entry_level_title(title);

            // The literal 0-2 range check precedes the minimum-years scan.
            let reason = if entry_level {
                Some("entry_title".to_string())
            } else if !description.is_empty() && self.zero_to_two.is_match(description) {
                Some("0-2_years".to_string())
            } else if min_years.is_some_and(|y| y <= MAX_YEARS_EXPERIENCE) {
                min_years.map(|y| format!("min_years_{}", y))
            } else if !description.is_empty() && self.two_plus.is_match(description) {
                Some("2plus_years".to_string())
            } else {
                None
            };

            if let Some(match_reason) = reason {
                filtered.push(Job {
                    company: company.to_string(),
                    title: title.to_string(),
                    location: job.location.trim().to_string(),
                    url: job.url.trim().to_string(),
                    posted_at: job.posted_at.clone(),
                    source: source.to_string(),
                    careers_url: careers_url.to_string(),
                    min_years,
                    entry_level,
                    match_reason,
                });
            }
        }
        filtered
    }
}

impl Default for ExperienceRules {
    fn default() -> Self {
        Self::new()
    }
}
