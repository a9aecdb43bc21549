use crate::error::Result;
use std::fs;
use std::path::PathBuf;

pub const STATE_FILENAME: &str = "quickcode.json";

/// Get the snipdeck configuration directory.
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".snipdeck"))
        .unwrap_or_else(|| PathBuf::from(".snipdeck"))
}

/// Get the path to the persisted quick code state file.
pub fn state_file_path() -> PathBuf {
    config_dir().join(STATE_FILENAME)
}

/// Ensure the configuration directory exists.
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}
