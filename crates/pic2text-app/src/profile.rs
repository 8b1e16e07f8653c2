use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use pic2text_config::Config;

/// Load a JSON config file; missing fields fall back to the environment
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}
