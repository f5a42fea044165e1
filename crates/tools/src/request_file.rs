//! TOML request files: a list of `[[map]]` tables.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cartograph::MapRequest;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct RequestFile {
    #[serde(default)]
    map: Vec<MapRequest>,
}

pub fn parse_requests(text: &str) -> Result<Vec<MapRequest>> {
    let file: RequestFile = toml::from_str(text).context("Failed to parse request TOML")?;
    Ok(file.map)
}

pub fn load_requests(path: &Path) -> Result<Vec<MapRequest>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;
    parse_requests(&text).with_context(|| format!("Invalid request file: {}", path.display()))
}
