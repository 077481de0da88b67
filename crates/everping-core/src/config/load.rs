//! Reading and writing the configuration file
//!
//! Reads go through `tokio::fs`; writes go through the atomic replace helper
//! so a crash mid-save never leaves a truncated document behind.

use std::path::{Path, PathBuf};

use super::{defaults::CONFIG_FILE_NAME, types::Config};
use crate::{atomic::write_atomic_async, Error, Result};

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Path of the configuration file inside the plugin's data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

// ═══════════════════════════════════════════════════════════════════════════
// READ / WRITE
// ═══════════════════════════════════════════════════════════════════════════

/// Load and parse a YAML configuration file.
///
/// # Errors
///
/// Returns error if:
/// - Path is a directory instead of a file
/// - File cannot be read
/// - YAML is malformed or its top level is not a mapping
pub async fn read_config_file(path: &Path) -> Result<Config> {
    let is_dir = tokio::fs::metadata(path)
        .await
        .is_ok_and(|meta| meta.is_dir());
    if is_dir {
        return Err(Error::io_error(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            Error::io_error(format!(
                "Permission denied reading config file {}: {e}",
                path.display()
            ))
        } else {
            Error::io_error(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        }
    })?;

    Config::from_yaml_str(&content).map_err(|e| {
        Error::parse_error(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })
}

/// Serialize `config` and atomically replace the file at `path`.
///
/// # Errors
///
/// Returns error if serialization fails or the file cannot be written.
pub async fn write_config_file(path: &Path, config: &Config) -> Result<()> {
    let text = config.to_yaml_string()?;
    write_atomic_async(path.to_path_buf(), text.into_bytes())
        .await
        .map_err(|e| {
            Error::io_error(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
}
