use anyhow::Result;
use rocket::fs::FileServer;
use std::path::PathBuf;
use tracing::{info, warn};

/// Minimal static file server for browsing scan results locally.
pub async fn serve_output(dir: PathBuf, port: u16) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!("Output directory not found: {}", dir.display());
    }

    info!("Serving {} on http://127.0.0.1:{}/", dir.display(), port);

    let figment = rocket::Config::figment()
        .merge(("address", "127.0.0.1"))
        .merge(("port", port));

    if let Err(e) = rocket::custom(figment)
        .mount("/", FileServer::from(dir))
        .launch()
        .await
    {
        // Format outside the macro: rocket::Error panics on drop unless its
        // Display impl has run, and tracing macros skip argument evaluation
        // when no subscriber is active.
        let e = e.to_string();
        warn!("Static file server exited with error: {}", e);
    }

    Ok(())
}
