//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/hello-gui/` or `$XDG_CONFIG_HOME/hello-gui/`
/// - **macOS**: `~/Library/Application Support/com.example.hello-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\example\hello-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "example", "hello-gui") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    // Create config directory if it doesn't exist
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}
