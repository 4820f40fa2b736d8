//! # Parley Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output used by Parley's data
//! files. The knowledge base and the conversation history are both JSON
//! documents that are read fully on startup and rewritten in full after every
//! change, so the helpers here are built around that pattern.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing, and
//!   rejects paths that exist but are not directories.
//! - **`read_file_to_string`**: `fs::read_to_string` with error context.
//! - **`write_string_to_file`**: Ensures the parent directory exists, writes
//!   the content to a sibling temporary file and renames it over the target,
//!   so readers never observe a half-written file.
//! - **`read_json`**: Reads and deserializes a JSON file, returning `None`
//!   when the file does not exist yet.
//! - **`write_json`**: Serializes a value as pretty JSON (2-space indent) and
//!   writes it with `write_string_to_file`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let base: Option<KnowledgeBase> = io::read_json(path)?;
//! io::write_json(path, &base.unwrap_or_default())?;
//! ```
//!
use crate::core::error::{ParleyError, Result}; // Use standard Result and custom Error types
use anyhow::Context; // For adding context to errors
use serde::{de::DeserializeOwned, Serialize};
use std::fs; // Standard filesystem module
use std::io::ErrorKind;
use std::path::{Path, PathBuf}; // Filesystem path types
use tracing::{debug, info}; // Logging utilities

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory,
/// including any necessary parent directories (similar to `mkdir -p`).
/// If the path already exists but is not a directory (e.g., it's a file),
/// an error (`ParleyError::FileSystem`) is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ParleyError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read, with
/// context indicating which file failed.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a file, replacing it atomically if it exists.
///
/// The parent directory is created when missing. Content goes to
/// `<file>.tmp` next to the target first and is then renamed into place.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    // --- Ensure Parent Directory Exists ---
    // An empty parent means a bare file name relative to the current directory.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    // --- Write Temporary File, Then Rename ---
    let temp_path = temp_sibling(path);
    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to file {:?}", temp_path))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to move {:?} into place at {:?}", temp_path, path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Reads and deserializes a JSON file.
///
/// Returns `Ok(None)` if the file does not exist. Malformed content is
/// reported as `ParleyError::MalformedJson` naming the file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("JSON file {:?} does not exist yet", path);
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read file {:?}", path));
        }
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| {
            ParleyError::MalformedJson {
                path: path.display().to_string(),
                source,
            }
            .into()
        })
}

/// Serializes `value` as pretty-printed JSON and writes it to `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize JSON for {:?}", path))?;
    content.push('\n');
    write_string_to_file(path, &content)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    /// `ensure_dir_exists` creates nested directories.
    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    /// `ensure_dir_exists` fails when the path is a file.
    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "content")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    /// Writing creates parent directories and leaves no temporary file behind.
    #[test]
    fn test_write_string_to_file_creates_parents() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nested/dir/data.json");
        write_string_to_file(&file_path, "first")?;
        write_string_to_file(&file_path, "second")?;
        assert_eq!(read_file_to_string(&file_path)?, "second");
        assert!(!base_dir.path().join("nested/dir/data.json.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_read_json_missing_is_none() -> Result<()> {
        let base_dir = tempdir()?;
        let value: Option<Sample> = read_json(&base_dir.path().join("absent.json"))?;
        assert!(value.is_none());
        Ok(())
    }

    #[test]
    fn test_json_write_then_read() -> Result<()> {
        let base_dir = tempdir()?;
        let path = base_dir.path().join("sample.json");
        let sample = Sample {
            name: "parley".into(),
            count: 3,
        };
        write_json(&path, &sample)?;

        let raw = read_file_to_string(&path)?;
        assert!(raw.contains("\n  \"name\": \"parley\""));
        assert_eq!(read_json::<Sample>(&path)?, Some(sample));
        Ok(())
    }

    #[test]
    fn test_read_json_malformed() -> Result<()> {
        let base_dir = tempdir()?;
        let path = base_dir.path().join("broken.json");
        fs::write(&path, "{ \"name\": ")?;
        let err = read_json::<Sample>(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParleyError>(),
            Some(ParleyError::MalformedJson { .. })
        ));
        Ok(())
    }
}
