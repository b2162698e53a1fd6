use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(about = "Discover entry-level jobs on company career sites")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan company career sites and write filtered results
    Scan {
        /// Path to the companies JSON file
        #[arg(long, default_value = "data/companies.json")]
        companies: PathBuf,
        /// Output directory for jobs.json, jobs.csv and metadata.json
        #[arg(long, default_value = "output")]
        out_dir: PathBuf,
        /// Seconds to wait after each company's network activity
        #[arg(long, default_value_t = 0.3)]
        sleep: f64,
        /// Limit results per company (0 = no limit)
        #[arg(long, default_value_t = 0)]
        max_per_company: usize,
    },
    /// Serve an output directory for local browsing
    Serve {
        /// Directory to serve
        #[arg(long, default_value = "output")]
        dir: PathBuf,
        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_defaults() {
        let cli = Cli::try_parse_from(["jobscout", "scan"]).unwrap();
        match cli.command {
            Command::Scan {
                companies,
                out_dir,
                sleep,
                max_per_company,
            } => {
                assert_eq!(companies, PathBuf::from("data/companies.json"));
                assert_eq!(out_dir, PathBuf::from("output"));
                assert_eq!(sleep, 0.3);
                assert_eq!(max_per_company, 0);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_scan_overrides() {
        let cli = Cli::try_parse_from([
            "jobscout",
            "scan",
            "--companies",
            "my.json",
            "--sleep",
            "1.5",
            "--max-per-company",
            "10",
        ])
        .unwrap();
        match cli.command {
            Command::Scan {
                companies,
                sleep,
                max_per_company,
                ..
            } => {
                assert_eq!(companies, PathBuf::from("my.json"));
                assert_eq!(sleep, 1.5);
                assert_eq!(max_per_company, 10);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_serve_parses() {
        let cli = Cli::try_parse_from(["jobscout", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { dir, port } => {
                assert_eq!(dir, PathBuf::from("output"));
                assert_eq!(port, 9000);
            }
            _ => panic!("expected serve"),
        }
    }
}
