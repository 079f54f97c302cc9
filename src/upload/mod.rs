//! Upload module
//!
//! Pushes local image files to the configured remote endpoint.

pub mod client;

// Re-export the uploader
pub use client::ImageUploader;
