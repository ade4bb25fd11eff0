use crate::common::timestamp_utils;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

pub const SNAPSHOT_EXTENSION: &str = "jpg";

pub fn generate_timestamped_filename(
    base_name: &str,        // e.g., camera alias
    timestamp_format: &str, // from config, e.g., "%Y%m%d_%H%M%S"
    extension: &str,
) -> String {
    let timestamp = timestamp_utils::current_local_timestamp_str(timestamp_format);
    format!("{}_{}.{}", sanitize_file_stem(base_name), timestamp, extension)
}

// Aliases are user-chosen and may contain spaces or separators.
fn sanitize_file_stem(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "netwave".to_string()
    } else {
        cleaned
    }
}

pub fn ensure_output_directory(dir_path: &Path) -> Result<PathBuf> {
    if !dir_path.exists() {
        debug!("Output directory '{}' does not exist, attempting to create it.", dir_path.display());
        std::fs::create_dir_all(dir_path)
            .with_context(|| format!("Failed to create output directory '{}'", dir_path.display()))?;
    } else if !dir_path.is_dir() {
        bail!("Output path '{}' exists but is not a directory.", dir_path.display());
    }
    Ok(dir_path.to_path_buf())
}

/// Picks where a snapshot goes: an explicit file, a file inside an explicit directory,
/// or a timestamped file in `default_dir`.
pub fn resolve_snapshot_path(
    output: Option<&str>,
    default_dir: &str,
    base_name: &str,
    timestamp_format: &str,
) -> Result<PathBuf> {
    let filename = || generate_timestamped_filename(base_name, timestamp_format, SNAPSHOT_EXTENSION);
    match output {
        Some(out) if out.ends_with('/') || Path::new(out).is_dir() => {
            let dir = ensure_output_directory(Path::new(out))?;
            Ok(dir.join(filename()))
        }
        Some(out) => {
            let path = PathBuf::from(out);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                ensure_output_directory(parent)?;
            }
            Ok(path)
        }
        None => {
            let dir = ensure_output_directory(Path::new(default_dir))?;
            Ok(dir.join(filename()))
        }
    }
}

pub fn write_snapshot(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write snapshot to '{}'", path.display()))?;
    info!("💾 Saved snapshot ({} bytes) to {}", bytes.len(), path.display());
    Ok(())
}
