//! Snap Station
//!
//! Folder and file management plus remote image upload for a
//! photo-capture pipeline. Every public operation returns an
//! [`OpOutcome`] envelope; callers branch on its status code rather
//! than on errors or empty payloads.

pub mod config;
pub mod error;
pub mod outcome;
pub mod storage;
pub mod upload;

pub use config::StationConfig;
pub use outcome::OpOutcome;
pub use upload::ImageUploader;
