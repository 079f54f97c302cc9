//! Error types
//!
//! Defines domain-specific error types for the storage and upload modules.

use std::fmt;
use std::io;
use std::path::Path;

use crate::outcome::codes;

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    DirectoryNotFound(String),
    FileNotFound(String),
    PermissionDenied(String),
    IoError(io::Error),
}

impl StorageError {
    /// Classify an OS-level failure against the path it occurred on.
    ///
    /// Missing-folder and missing-file cases are checked up front by the
    /// operations, so a NotFound raised mid-call is a race and stays an
    /// `IoError`.
    pub fn classify(error: io::Error, path: &Path) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => {
                StorageError::PermissionDenied(path.display().to_string())
            }
            _ => StorageError::IoError(error),
        }
    }

    /// Convert error to envelope status code
    pub fn status_code(&self) -> u16 {
        match self {
            StorageError::DirectoryNotFound(_) | StorageError::FileNotFound(_) => codes::NOT_FOUND,
            StorageError::PermissionDenied(_) | StorageError::IoError(_) => codes::INTERNAL_ERROR,
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DirectoryNotFound(p) => write!(f, "Directory not found: {}", p),
            StorageError::FileNotFound(p) => write!(f, "File not found: {}", p),
            StorageError::PermissionDenied(p) => write!(f, "Permission denied: {}", p),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Upload module errors
#[derive(Debug)]
pub enum UploadError {
    EndpointNotConfigured,
    InvalidEndpoint(String),
    FileNotFound(String),
    FileUnreadable(String),
    Transport(reqwest::Error),
    Rejected { status: u16, body: String },
    MalformedResponse(String),
}

impl UploadError {
    /// Convert error to envelope status code
    pub fn status_code(&self) -> u16 {
        match self {
            UploadError::EndpointNotConfigured | UploadError::FileNotFound(_) => codes::NOT_FOUND,
            UploadError::Rejected { status, .. } => *status,
            UploadError::InvalidEndpoint(_)
            | UploadError::FileUnreadable(_)
            | UploadError::Transport(_)
            | UploadError::MalformedResponse(_) => codes::INTERNAL_ERROR,
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::EndpointNotConfigured => write!(f, "No upload endpoint configured"),
            UploadError::InvalidEndpoint(u) => write!(f, "Invalid upload endpoint: {}", u),
            UploadError::FileNotFound(p) => write!(f, "File not found: {}", p),
            UploadError::FileUnreadable(p) => write!(f, "Failed to read file: {}", p),
            UploadError::Transport(e) => write!(f, "Request error: {}", e),
            UploadError::Rejected { status, body } => {
                write!(f, "HTTP error {}: {}", status, body)
            }
            UploadError::MalformedResponse(e) => write!(f, "Malformed response body: {}", e),
        }
    }
}

impl std::error::Error for UploadError {}

impl From<reqwest::Error> for UploadError {
    fn from(error: reqwest::Error) -> Self {
        UploadError::Transport(error)
    }
}
