//! Runtime diagnostics systems.
//!
//! FPS tracking for the native overlay and the host page.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to the host page via RPC and updates the native overlay.
pub mod fps_tracking;
