use anyhow::{Context, Result};
use graphsky_layout::{GraphDescription, Layout};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON graph description
pub fn load_description(path: &Path) -> Result<GraphDescription> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid graph description in {}", path.display()))
}

pub fn to_json(layout: &Layout, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(layout)?
    } else {
        serde_json::to_string(layout)?
    };
    Ok(json)
}

/// Where the layout of `input` goes inside `dir`: `<stem>.layout.json`
pub fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());
    dir.join(format!("{stem}.layout.json"))
}

pub fn save_layout(path: &Path, layout: &Layout, pretty: bool) -> Result<()> {
    fs::write(path, to_json(layout, pretty)?)
        .with_context(|| format!("Failed to write {}", path.display()))
}
