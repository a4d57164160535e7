use bevy::prelude::*;
use constants::moon::*;
use constants::point_fields::*;
use constants::render_settings::CLEAR_COLOUR;
use serde::{Deserialize, Serialize};

/// Uniform starfield section of the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldSection {
    pub point_count: usize,
    pub extent: f32,
    pub colour: String,
    /// Each frame the x and y angles decrease by `dt / divisor`.
    pub spin_divisors: [f32; 2],
}

impl Default for StarfieldSection {
    fn default() -> Self {
        Self {
            point_count: STARFIELD_POINT_COUNT,
            extent: STARFIELD_EXTENT,
            colour: STARFIELD_COLOUR.to_string(),
            spin_divisors: STARFIELD_SPIN_DIVISORS.to_array(),
        }
    }
}

/// Spiral galaxy section of the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxySection {
    pub point_count: usize,
    pub radius: f32,
    pub branches: u32,
    pub spin_factor: f32,
    pub jitter_power: f32,
    pub jitter_factor: f32,
    pub vertical_flattening: f32,
    pub inner_colour: String,
    pub outer_colour: String,
    pub opacity: f32,
    /// Radians per second around x and y.
    pub spin_rate: [f32; 2],
    pub translation: [f32; 3],
    /// Euler XYZ angles of the galaxy group, in radians.
    pub tilt: [f32; 3],
}

impl Default for GalaxySection {
    fn default() -> Self {
        Self {
            point_count: GALAXY_POINT_COUNT,
            radius: GALAXY_RADIUS,
            branches: GALAXY_BRANCHES,
            spin_factor: GALAXY_SPIN_FACTOR,
            jitter_power: GALAXY_JITTER_POWER,
            jitter_factor: GALAXY_JITTER_FACTOR,
            vertical_flattening: GALAXY_VERTICAL_FLATTENING,
            inner_colour: GALAXY_INNER_COLOUR.to_string(),
            outer_colour: GALAXY_OUTER_COLOUR.to_string(),
            opacity: GALAXY_OPACITY,
            spin_rate: GALAXY_SPIN_RATE.to_array(),
            translation: GALAXY_TRANSLATION.to_array(),
            tilt: GALAXY_TILT.to_array(),
        }
    }
}

/// Floating moon section of the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoonSection {
    pub radius: f32,
    pub position: [f32; 3],
    pub colour: String,
    pub float_speed: f32,
    pub float_rotation_intensity: f32,
    pub float_intensity: f32,
    pub float_range: [f32; 2],
}

impl Default for MoonSection {
    fn default() -> Self {
        Self {
            radius: MOON_RADIUS,
            position: MOON_POSITION.to_array(),
            colour: MOON_COLOUR.to_string(),
            float_speed: FLOAT_SPEED,
            float_rotation_intensity: FLOAT_ROTATION_INTENSITY,
            float_intensity: FLOAT_INTENSITY,
            float_range: FLOAT_RANGE.to_array(),
        }
    }
}

/// Backdrop scene manifest as a Bevy asset. Mirrors the JSON structure exactly.
/// Every field is optional; anything missing falls back to the built-in constants.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropManifest {
    /// Fixed seed for reproducible point fields; entropy when absent.
    pub seed: Option<u64>,
    pub clear_colour: String,
    pub starfield: StarfieldSection,
    pub galaxy: GalaxySection,
    pub moon: MoonSection,
}

impl Default for BackdropManifest {
    fn default() -> Self {
        Self {
            seed: None,
            clear_colour: CLEAR_COLOUR.to_string(),
            starfield: StarfieldSection::default(),
            galaxy: GalaxySection::default(),
            moon: MoonSection::default(),
        }
    }
}
