use bevy::math::{Vec2, Vec3};

pub const MOON_RADIUS: f32 = 0.25;
pub const MOON_SEGMENTS: u32 = 64;
pub const MOON_POSITION: Vec3 = Vec3::new(1.2, 0.0, -0.2);
pub const MOON_COLOUR: &str = "#e1e1e1";
pub const MOON_ROUGHNESS: f32 = 0.8;
pub const MOON_METALLIC: f32 = 0.1;

/// Point light riding with the moon, scaled from the page's intensity of 2 into lumens (x10 000).
pub const MOON_LIGHT_INTENSITY: f32 = 20_000.0;
pub const MOON_LIGHT_RANGE: f32 = 5.0;

pub const FLOAT_SPEED: f32 = 1.5;
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.5;
pub const FLOAT_INTENSITY: f32 = 1.0;

/// Output range of the vertical bob before scaling by the float intensity.
pub const FLOAT_RANGE: Vec2 = Vec2::new(-0.1, 0.1);

/// Upper bound of the random phase offset so separate mounts do not bob in sync.
pub const FLOAT_MAX_OFFSET: f32 = 10_000.0;
