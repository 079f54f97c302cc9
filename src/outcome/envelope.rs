//! Outcome envelope
//!
//! The single result structure returned by every storage and upload
//! operation. Callers branch on `status`; payload fields are present
//! only when the operation produced them.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::outcome::codes;

/// Result of a station operation
#[derive(Debug, Clone, Serialize)]
pub struct OpOutcome {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_recent_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OpOutcome {
    fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            path: None,
            file_count: None,
            most_recent_file: None,
            response: None,
            error: None,
        }
    }

    /// Operation completed (200)
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(codes::OK, message)
    }

    /// Resource newly created (201)
    pub fn created(message: impl Into<String>) -> Self {
        Self::new(codes::CREATED, message)
    }

    /// Resource was already present (204)
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(codes::ALREADY_EXISTS, message)
    }

    /// Failure envelope carrying the diagnostic detail
    pub fn failure(status: u16, message: impl Into<String>, detail: impl fmt::Display) -> Self {
        let mut outcome = Self::new(status, message);
        outcome.error = Some(detail.to_string());
        outcome
    }

    /// Attach the resolved path payload
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.display().to_string());
        self
    }

    /// Attach the file-count payload
    pub fn with_file_count(mut self, count: usize) -> Self {
        self.file_count = Some(count);
        self
    }

    /// Attach the most-recent-file payload
    pub fn with_most_recent_file(mut self, name: impl Into<String>) -> Self {
        self.most_recent_file = Some(name.into());
        self
    }

    /// Attach the remote response payload
    pub fn with_response(mut self, body: Value) -> Self {
        self.response = Some(body);
        self
    }

    /// Whether the status is in the success range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_expected_codes() {
        assert_eq!(OpOutcome::ok("done").status, codes::OK);
        assert_eq!(OpOutcome::created("made").status, codes::CREATED);
        assert_eq!(OpOutcome::already_exists("kept").status, codes::ALREADY_EXISTS);
        let failed = OpOutcome::failure(codes::NOT_FOUND, "missing", "no such folder");
        assert_eq!(failed.status, codes::NOT_FOUND);
        assert_eq!(failed.error.as_deref(), Some("no such folder"));
    }

    #[test]
    fn success_range_covers_all_success_variants() {
        assert!(OpOutcome::ok("x").is_success());
        assert!(OpOutcome::created("x").is_success());
        assert!(OpOutcome::already_exists("x").is_success());
        assert!(!OpOutcome::failure(codes::NOT_FOUND, "x", "y").is_success());
        assert!(!OpOutcome::failure(codes::INTERNAL_ERROR, "x", "y").is_success());
    }

    #[test]
    fn absent_payloads_are_not_serialized() {
        let outcome = OpOutcome::ok("counted").with_file_count(2);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["file_count"], 2);
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("path"));
        assert!(!object.contains_key("most_recent_file"));
        assert!(!object.contains_key("response"));
        assert!(!object.contains_key("error"));
    }

    #[test]
    fn path_payload_round_trips() {
        let outcome = OpOutcome::ok("located").with_path(Path::new("shots/a.png"));
        assert_eq!(outcome.path.as_deref(), Some("shots/a.png"));
    }
}
