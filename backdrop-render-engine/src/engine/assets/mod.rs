//! Backdrop configuration assets.
//!
//! The JSON manifest as loaded from disk, and the validated settings
//! resource the scene is built from.

/// JSON manifest asset with per-section defaults from the `constants` crate.
pub mod backdrop_manifest;

/// Validation of the manifest into typed scene settings.
pub mod backdrop_settings;
