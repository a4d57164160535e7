//! Backdrop scene composition and lifecycle.
//!
//! Spawns the starfield, the tilted galaxy group and the floating moon when
//! the backdrop mounts and tears them down again when it unmounts.

/// Mount state machine, point-field spawning and teardown.
pub mod backdrop;
