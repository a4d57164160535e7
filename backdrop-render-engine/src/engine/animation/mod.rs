//! Per-frame motion applied on top of the static backdrop geometry.
//!
//! Both animations only write `Transform`; generated buffers are never touched.

/// Gentle bobbing and swaying for floating objects such as the moon.
pub mod float_motion;

/// Continuous spin of the point fields driven by elapsed frame time.
pub mod rotation;
