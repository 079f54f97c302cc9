//! Storage operations
//!
//! Folder and file operations for the capture pipeline. Every function
//! checks its preconditions, performs one file system call, and returns
//! an outcome envelope; OS failures never escape past the boundary.

use log::{error, info, warn};
use std::fs;
use std::path::Path;

use crate::error::StorageError;
use crate::outcome::OpOutcome;
use crate::storage::filesystem;

fn missing_directory(folder: &Path) -> OpOutcome {
    let err = StorageError::DirectoryNotFound(folder.display().to_string());
    warn!("{}", err);
    OpOutcome::failure(err.status_code(), "Folder not found", &err)
}

fn missing_file(path: &Path) -> OpOutcome {
    let err = StorageError::FileNotFound(path.display().to_string());
    warn!("{}", err);
    OpOutcome::failure(err.status_code(), "File not found", &err)
}

/// Creates the folder if it does not exist.
///
/// Non-recursive: the parent must already exist. An existing folder is
/// reported as already-present, not as an error.
pub fn create_folder(path: &Path) -> OpOutcome {
    if filesystem::entry_exists(path) {
        info!("Folder {} exists", path.display());
        return OpOutcome::already_exists(format!("Folder already exists: {}", path.display()));
    }

    match filesystem::create_directory(path) {
        Ok(()) => {
            info!("Created folder {}", path.display());
            OpOutcome::created(format!("Folder created: {}", path.display())).with_path(path)
        }
        Err(e) => {
            let err = StorageError::classify(e, path);
            error!("Failed to create folder {}: {}", path.display(), err);
            OpOutcome::failure(err.status_code(), "Failed to create folder", &err)
        }
    }
}

/// Resolves a file inside a folder to its joined path.
///
/// Read-only: no side effects on either path.
pub fn resolve_file_path(folder: &Path, file_name: &str) -> OpOutcome {
    if !filesystem::directory_exists(folder) {
        return missing_directory(folder);
    }

    let path = folder.join(file_name);
    if !filesystem::entry_exists(&path) {
        return missing_file(&path);
    }

    info!("Resolved {} in {}", file_name, folder.display());
    OpOutcome::ok(format!("File located: {}", file_name)).with_path(&path)
}

/// Counts direct children whose lowercased name ends in an image
/// extension. Nothing is descended into.
pub fn count_images(folder: &Path) -> OpOutcome {
    if !filesystem::directory_exists(folder) {
        return missing_directory(folder);
    }

    match filesystem::count_image_entries(folder) {
        Ok(count) => {
            info!("{} image files in {}", count, folder.display());
            OpOutcome::ok(format!("{} image files found", count)).with_file_count(count)
        }
        Err(e) => {
            let err = StorageError::classify(e, folder);
            error!("Failed to scan {}: {}", folder.display(), err);
            OpOutcome::failure(err.status_code(), "Failed to count images", &err)
        }
    }
}

/// Moves a file out of one folder into another.
///
/// The destination folder is created on demand. The move delegates to
/// rename, so source and destination must live on the same file system.
pub fn move_file(file_name: &str, src_folder: &Path, dst_folder: &Path) -> OpOutcome {
    if !filesystem::directory_exists(src_folder) {
        return missing_directory(src_folder);
    }

    let src = src_folder.join(file_name);
    if !filesystem::entry_exists(&src) {
        return missing_file(&src);
    }

    // destination is created on demand; its outcome is not propagated
    let _ = create_folder(dst_folder);
    let dst = dst_folder.join(file_name);

    info!("Moving {} to {}", src.display(), dst.display());
    match fs::rename(&src, &dst) {
        Ok(()) => OpOutcome::ok(format!("File moved to {}", dst.display())).with_path(&dst),
        Err(e) => {
            let err = StorageError::classify(e, &src);
            error!("Failed to move {}: {}", src.display(), err);
            OpOutcome::failure(err.status_code(), "Failed to move file", &err)
        }
    }
}

/// Copies a file into another folder, leaving the source intact.
///
/// An existing file of the same name at the destination is overwritten.
pub fn copy_file(file_name: &str, src_folder: &Path, dst_folder: &Path) -> OpOutcome {
    if !filesystem::directory_exists(src_folder) {
        return missing_directory(src_folder);
    }

    let src = src_folder.join(file_name);
    if !filesystem::entry_exists(&src) {
        return missing_file(&src);
    }

    let _ = create_folder(dst_folder);
    let dst = dst_folder.join(file_name);

    info!("Copying {} to {}", src.display(), dst.display());
    match fs::copy(&src, &dst) {
        Ok(_) => OpOutcome::ok(format!("File copied to {}", dst.display())).with_path(&dst),
        Err(e) => {
            let err = StorageError::classify(e, &src);
            error!("Failed to copy {}: {}", src.display(), err);
            OpOutcome::failure(err.status_code(), "Failed to copy file", &err)
        }
    }
}

/// Finds the direct child file with the largest modification time.
///
/// An empty folder is a success with no file named. When two files share
/// a timestamp the first one encountered wins; enumeration order is
/// whatever the file system yields and must not be assumed stable.
pub fn find_most_recent_file(folder: &Path) -> OpOutcome {
    if !filesystem::directory_exists(folder) {
        return missing_directory(folder);
    }

    match filesystem::newest_plain_file(folder) {
        Ok(Some(name)) => {
            info!("Most recent file in {}: {}", folder.display(), name);
            OpOutcome::ok(format!("Most recent file: {}", name)).with_most_recent_file(name)
        }
        Ok(None) => {
            info!("No files in {}", folder.display());
            OpOutcome::ok("No files in folder")
        }
        Err(e) => {
            let err = StorageError::classify(e, folder);
            error!("Failed to scan {}: {}", folder.display(), err);
            OpOutcome::failure(err.status_code(), "Failed to find most recent file", &err)
        }
    }
}

/// Deletes every direct child of the folder.
///
/// Not atomic: the first failure is reported and iteration stops,
/// leaving the folder partially emptied.
pub fn empty_folder(folder: &Path) -> OpOutcome {
    if !filesystem::directory_exists(folder) {
        return missing_directory(folder);
    }

    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            let err = StorageError::classify(e, folder);
            error!("Failed to list {}: {}", folder.display(), err);
            return OpOutcome::failure(err.status_code(), "Failed to empty folder", &err);
        }
    };

    let mut removed = 0usize;
    for entry in entries {
        let child = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                let err = StorageError::from(e);
                error!("Failed to read entry in {}: {}", folder.display(), err);
                return OpOutcome::failure(err.status_code(), "Failed to empty folder", &err);
            }
        };

        if let Err(e) = filesystem::remove_child(&child) {
            let err = StorageError::classify(e, &child);
            error!("Failed to delete {}: {}", child.display(), err);
            return OpOutcome::failure(err.status_code(), "Failed to empty folder", &err);
        }
        removed += 1;
    }

    info!("Emptied {} ({} entries removed)", folder.display(), removed);
    OpOutcome::ok(format!("Folder emptied: {} entries removed", removed))
}
