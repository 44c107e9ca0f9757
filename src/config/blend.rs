use crate::blend::BlendParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the comparison harness writes its results.
#[derive(Clone, Debug, Deserialize)]
pub struct BlendOutputConfig {
    pub sequential_image: PathBuf,
    pub banded_image: PathBuf,
    pub chunked_image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

/// Runtime configuration for the `blend_compare` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct BlendToolConfig {
    pub source: PathBuf,
    pub target: PathBuf,
    pub mask: PathBuf,
    #[serde(default)]
    pub params: BlendParams,
    pub output: BlendOutputConfig,
}

pub fn load_config(path: &Path) -> Result<BlendToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: BlendToolConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
