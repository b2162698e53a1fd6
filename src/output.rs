use crate::filter::{MAX_YEARS_EXPERIENCE, TITLE_KEYWORDS};
use crate::types::Job;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Write jobs.json, jobs.csv and metadata.json into the output
/// directory, creating it if needed.
pub fn write_outputs(out_dir: &Path, jobs: &[Job], company_count: usize) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let json_path = out_dir.join("jobs.json");
    let payload = serde_json::to_string_pretty(jobs).context("Failed to serialize jobs")?;
    std::fs::write(&json_path, payload)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;

    let csv_path = out_dir.join("jobs.csv");
    write_csv(&csv_path, jobs)?;

    let meta_path = out_dir.join("metadata.json");
    let metadata = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "total_jobs": jobs.len(),
        "company_count": company_count,
        "filters": {
            "entry_level_titles": TITLE_KEYWORDS,
            "max_years_experience": MAX_YEARS_EXPERIENCE,
        },
    });
    std::fs::write(&meta_path, serde_json::to_string_pretty(&metadata)?)
        .with_context(|| format!("Failed to write {}", meta_path.display()))?;

    info!("Wrote {} jobs to {}", jobs.len(), out_dir.display());
    Ok(())
}

/// Columns follow the Job field order. None encodes as an empty cell and
/// booleans as true/false, which reconstructs losslessly on read-back.
fn write_csv(path: &Path, jobs: &[Job]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    for job in jobs {
        writer
            .serialize(job)
            .with_context(|| format!("Failed to write CSV record for {}", job.title))?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
