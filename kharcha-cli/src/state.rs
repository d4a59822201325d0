use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$KHARCHA_HOME`, else `$HOME/.kharcha`
pub fn kharcha_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("KHARCHA_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".kharcha"))
}

pub fn ensure_kharcha_home() -> Result<PathBuf> {
    let dir = kharcha_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
