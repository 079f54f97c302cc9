//! File system helpers
//!
//! Thin typed wrappers over std::fs used by the storage operations.

use std::fs;
use std::io::Result;
use std::path::Path;
use std::time::SystemTime;

/// Extensions counted as images (matched case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpeg", ".jpg"];

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Check if any entry exists at the path
pub fn entry_exists(path: &Path) -> bool {
    path.exists()
}

/// Create a directory (non-recursive; the parent must exist)
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir(path)
}

/// Count direct children whose name carries an image extension
pub fn count_image_entries(folder: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(folder)? {
        let name = entry?.file_name().to_string_lossy().to_lowercase();
        if IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            count += 1;
        }
    }
    Ok(count)
}

/// Scan direct children for the most recently modified plain file.
///
/// Directories are skipped; a symlink counts only when it resolves to a
/// file. Ties keep the entry encountered first, in whatever order the
/// directory listing yields entries (not a stable order).
pub fn newest_plain_file(folder: &Path) -> Result<Option<String>> {
    let mut most_recent: Option<(String, SystemTime)> = None;

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        // follows symlinks; a dangling link is simply skipped
        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => continue,
        };
        let modified = metadata.modified()?;

        let is_newer = match &most_recent {
            Some((_, best)) => modified > *best,
            None => true,
        };
        if is_newer {
            most_recent = Some((entry.file_name().to_string_lossy().to_string(), modified));
        }
    }

    Ok(most_recent.map(|(name, _)| name))
}

/// Remove a single direct child: files and symlinks are unlinked,
/// directories are removed recursively
pub fn remove_child(path: &Path) -> Result<()> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    if file_type.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
