//! Style files: a JSON object of [`StyleAttributes`] fields, any of which may be omitted.

use std::path::Path;

use crate::style::StyleAttributes;

pub type Result<T> = std::result::Result<T, StyleError>;

#[derive(Debug)]
pub enum StyleError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::Io(err) => write!(f, "Failed to read style file: {}", err),
            StyleError::Parse(err) => write!(f, "Invalid style: {}", err),
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StyleError::Io(err) => Some(err),
            StyleError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StyleError {
    fn from(err: std::io::Error) -> Self {
        StyleError::Io(err)
    }
}

impl From<serde_json::Error> for StyleError {
    fn from(err: serde_json::Error) -> Self {
        StyleError::Parse(err)
    }
}

pub fn parse_style(json: &str) -> Result<StyleAttributes> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_style(path: impl AsRef<Path>) -> Result<StyleAttributes> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)?;
    let style = parse_style(&data)?;
    tracing::debug!(path = %path.display(), "style loaded");
    Ok(style)
}

/// Writes `style` as pretty JSON, creating parent directories as needed.
pub fn save_style(path: impl AsRef<Path>, style: &StyleAttributes) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(style)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
