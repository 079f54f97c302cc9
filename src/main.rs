//! Snap Station - Entry Point
//!
//! Runs one station pass: keeps the capture folders in shape and pushes
//! the newest capture to the remote endpoint.

use log::{error, info, warn};

use snap_station::config::StationConfig;
use snap_station::storage;
use snap_station::upload::ImageUploader;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match StationConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let uploader = match ImageUploader::from_config(&config) {
        Ok(uploader) => uploader,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let capture_dir = config.capture_path();
    let archive_dir = config.archive_path();

    for dir in [&capture_dir, &archive_dir] {
        let outcome = storage::create_folder(dir);
        if !outcome.is_success() {
            error!("Cannot prepare {}: {}", dir.display(), outcome.message);
            std::process::exit(1);
        }
    }

    if let Some(count) = storage::count_images(&capture_dir).file_count {
        info!("{} images waiting in {}", count, capture_dir.display());
    }

    let Some(file_name) = storage::find_most_recent_file(&capture_dir).most_recent_file else {
        info!("No captures to upload");
        return;
    };

    let outcome = uploader.upload_image(&capture_dir.join(&file_name)).await;
    if outcome.is_success() {
        let archived = storage::move_file(&file_name, &capture_dir, &archive_dir);
        if archived.is_success() {
            info!("Uploaded and archived {}", file_name);
        } else {
            warn!("Uploaded {} but archiving failed: {}", file_name, archived.message);
        }
    } else {
        warn!(
            "Upload of {} did not complete: {} (status {})",
            file_name, outcome.message, outcome.status
        );
    }
}
