//! Procedural point-field generation for the decorative backdrop.
//!
//! Pure functions that turn a parameter struct and a random source into
//! immutable point buffers. Nothing here touches the ECS; the scene module
//! calls these once per mount and hands the results to mesh construction.

/// Point and colour buffer types shared by all generators.
pub mod point_cloud;

/// Random source abstraction so generation can be driven by a fixed sequence.
pub mod random;

/// Spiral galaxy generator with a radius-based colour gradient.
pub mod spiral_galaxy;

/// Uniformly scattered starfield generator.
pub mod uniform_field;
