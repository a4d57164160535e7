//! Backdrop configuration loading.
//!
//! Requests the JSON manifest at startup and turns it into the settings
//! resource, falling back to built-in defaults when it is missing or invalid.

/// Manifest request, resolution and fallback handling.
pub mod manifest_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
