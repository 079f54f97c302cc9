//! Upload client
//!
//! Sends captured images to the remote endpoint as one multipart POST.

use log::{error, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use std::path::Path;

use crate::config::StationConfig;
use crate::error::UploadError;
use crate::outcome::OpOutcome;

/// Client for pushing image files to the configured endpoint
pub struct ImageUploader {
    client: Client,
    endpoint: Option<Url>,
    field_name: String,
}

impl ImageUploader {
    /// Build an uploader from explicit parts
    pub fn new(endpoint: Option<Url>, field_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            field_name: field_name.into(),
        }
    }

    /// Build an uploader from the station configuration
    pub fn from_config(config: &StationConfig) -> Result<Self, UploadError> {
        let endpoint = match &config.upload_url {
            Some(url) => {
                Some(Url::parse(url).map_err(|_| UploadError::InvalidEndpoint(url.clone()))?)
            }
            None => None,
        };
        Ok(Self::new(endpoint, config.upload_field.as_str()))
    }

    /// Uploads one image file as multipart form data.
    ///
    /// One best-effort POST per call: no retry, no backoff, no chunking.
    /// With no endpoint configured the call returns immediately without
    /// touching the network.
    pub async fn upload_image(&self, path: &Path) -> OpOutcome {
        let Some(endpoint) = &self.endpoint else {
            let err = UploadError::EndpointNotConfigured;
            warn!("{}", err);
            return OpOutcome::failure(err.status_code(), "Upload skipped", &err);
        };

        if !path.is_file() {
            let err = UploadError::FileNotFound(path.display().to_string());
            warn!("{}", err);
            return OpOutcome::failure(err.status_code(), "File not found", &err);
        }

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                let err = UploadError::FileUnreadable(format!("{}: {}", path.display(), e));
                error!("{}", err);
                return OpOutcome::failure(err.status_code(), "Failed to read image", &err);
            }
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        let part = match Part::bytes(bytes)
            .file_name(file_name.clone())
            .mime_str(mime_for(&file_name))
        {
            Ok(part) => part,
            Err(e) => {
                let err = UploadError::from(e);
                error!("Failed to build multipart body: {}", err);
                return OpOutcome::failure(err.status_code(), "Failed to build upload body", &err);
            }
        };
        let form = Form::new().part(self.field_name.clone(), part);

        info!("Uploading {} to {}", path.display(), endpoint);
        let response = match self.client.post(endpoint.clone()).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => {
                let err = UploadError::from(e);
                error!("Upload failed: {}", err);
                return OpOutcome::failure(err.status_code(), "Upload failed", &err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            let err = UploadError::Rejected {
                status: status.as_u16(),
                body,
            };
            warn!("Upload rejected: {}", err);
            return OpOutcome::failure(err.status_code(), "Upload rejected by endpoint", &err);
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => {
                info!("Uploaded {}", path.display());
                OpOutcome::created(format!("Image uploaded: {}", file_name)).with_response(body)
            }
            Err(e) => {
                let err = UploadError::MalformedResponse(e.to_string());
                error!("{}", err);
                OpOutcome::failure(err.status_code(), "Endpoint returned an unreadable body", &err)
            }
        }
    }
}

/// Content type for the multipart part, by file extension
fn mime_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpeg") || lower.ends_with(".jpg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_rejects_malformed_endpoint() {
        let config = StationConfig {
            upload_url: Some("::nonsense::".to_string()),
            ..StationConfig::default()
        };
        let result = ImageUploader::from_config(&config);
        assert!(matches!(result, Err(UploadError::InvalidEndpoint(_))));
    }

    #[test]
    fn from_config_without_url_has_no_endpoint() {
        let uploader = ImageUploader::from_config(&StationConfig::default()).unwrap();
        assert!(uploader.endpoint.is_none());
        assert_eq!(uploader.field_name, "image");
    }

    #[test]
    fn mime_matches_extension_case_insensitively() {
        assert_eq!(mime_for("shot.PNG"), "image/png");
        assert_eq!(mime_for("shot.jpeg"), "image/jpeg");
        assert_eq!(mime_for("shot.JPG"), "image/jpeg");
        assert_eq!(mime_for("notes.txt"), "application/octet-stream");
    }
}
