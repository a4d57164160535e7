//! Mesh construction for the backdrop point fields.
//!
//! Converts generated point buffers into point-list meshes that the standard
//! Bevy material pipeline can draw without a custom render pass.

/// Point-list mesh generation from generated point clouds.
///
/// Positions always, vertex colours when the field carries a colour gradient.
pub mod point_field_mesh;
