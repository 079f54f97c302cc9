//! Envelope status codes
//!
//! HTTP-analogous numeric codes carried by operation outcomes.

/// Operation completed
pub const OK: u16 = 200;
/// Resource newly created
pub const CREATED: u16 = 201;
/// Resource was already present
pub const ALREADY_EXISTS: u16 = 204;
/// Folder or file missing
pub const NOT_FOUND: u16 = 404;
/// OS or transport failure
pub const INTERNAL_ERROR: u16 = 500;
