use crate::types::Company;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Load the company list from a JSON array file.
pub fn load_companies(path: &Path) -> Result<Vec<Company>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read company file: {}", path.display()))?;
    let companies: Vec<Company> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse company file: {}", path.display()))?;
    info!("Loaded {} companies from {}", companies.len(), path.display());
    Ok(companies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_companies() {
        let path = std::env::temp_dir().join(format!("jobscout_companies_{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            br#"[
                {"name": "Acme", "homepage": "https://acme.com"},
                {"name": "Widget", "homepage": "https://widget.co",
                 "careers_urls": ["https://jobs.widget.co"]}
            ]"#,
        )
        .unwrap();

        let companies = load_companies(&path).unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].name, "Acme");
        assert!(companies[0].careers_urls.is_empty());
        assert_eq!(companies[1].careers_urls, vec!["https://jobs.widget.co"]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_companies(Path::new("/nonexistent/companies.json")).is_err());
    }
}
