//! File system storage management
//!
//! Folder and file operations for the capture pipeline.

pub mod filesystem;
pub mod operations;

// Re-export the operation surface
pub use operations::{
    copy_file, count_images, create_folder, empty_folder, find_most_recent_file, move_file,
    resolve_file_path,
};
