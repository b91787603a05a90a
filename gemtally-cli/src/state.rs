use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `$GEMTALLY_HOME`, or `~/.gemtally`
pub fn gemtally_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("GEMTALLY_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set (or set GEMTALLY_HOME)")?;
    Ok(PathBuf::from(home).join(".gemtally"))
}

pub fn ensure_gemtally_home() -> Result<PathBuf> {
    let dir = gemtally_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Read the report message from a file, or stdin for `None` / `-`.
pub fn read_message(input: Option<&Path>) -> Result<String> {
    match input {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("read {}", p.display()))
        }
        _ => std::io::read_to_string(std::io::stdin()).context("read message from stdin"),
    }
}
