use crate::error::{Result, ScriptGenError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name offered for a generated script: whitespace runs become `_`
pub fn script_file_name(game_name: &str) -> String {
    let mut name = String::with_capacity(game_name.len() + 11);
    let mut in_space = false;
    for c in game_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push_str("_Script.lua");
    name
}

/// The user's downloads directory
pub fn default_export_dir() -> Result<PathBuf> {
    let home_dir = home::home_dir()
        .ok_or_else(|| ScriptGenError::Export("Could not determine home directory".to_string()))?;
    Ok(home_dir.join("Downloads"))
}

/// Write `code` into `dir` under [`script_file_name`], returning the path
pub fn export_script<P: AsRef<Path>>(dir: P, game_name: &str, code: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|e| ScriptGenError::Export(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let path = dir.join(script_file_name(game_name));
    fs::write(&path, code)
        .map_err(|e| ScriptGenError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    info!("Exported script to {}", path.display());
    Ok(path)
}
