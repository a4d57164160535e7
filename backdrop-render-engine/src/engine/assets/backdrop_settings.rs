use bevy::prelude::*;
use thiserror::Error;

use crate::engine::animation::float_motion::FloatMotion;
use crate::engine::animation::rotation::SpinRate;
use crate::engine::assets::backdrop_manifest::{
    BackdropManifest, GalaxySection, MoonSection, StarfieldSection,
};
use crate::engine::generation::spiral_galaxy::SpiralGalaxyParams;
use crate::engine::generation::uniform_field::UniformFieldParams;

/// Reasons a backdrop manifest cannot be turned into scene settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackdropConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("galaxy.branches must be at least 1")]
    NoBranches,

    #[error("galaxy.opacity must lie in [0, 1], got {0}")]
    OpacityOutOfRange(f32),

    #[error("{field} is not a valid hex colour ({value:?}): {reason}")]
    InvalidColour {
        field: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldSettings {
    pub params: UniformFieldParams,
    pub colour: Color,
    pub spin: SpinRate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalaxySettings {
    pub params: SpiralGalaxyParams,
    pub opacity: f32,
    pub spin: SpinRate,
    /// Placement and tilt of the group the spinning points hang from.
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoonSettings {
    pub radius: f32,
    pub position: Vec3,
    pub colour: Color,
    pub float: FloatMotion,
}

/// Validated, typed backdrop configuration used whenever the backdrop mounts.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BackdropSettings {
    pub seed: Option<u64>,
    pub clear_colour: Color,
    pub starfield: StarfieldSettings,
    pub galaxy: GalaxySettings,
    pub moon: MoonSettings,
}

impl Default for BackdropSettings {
    fn default() -> Self {
        BackdropManifest::default()
            .resolve()
            .expect("built-in backdrop constants are valid")
    }
}

impl BackdropManifest {
    /// Validate every section and convert it into scene settings.
    pub fn resolve(&self) -> Result<BackdropSettings, BackdropConfigError> {
        Ok(BackdropSettings {
            seed: self.seed,
            clear_colour: parse_colour("clear_colour", &self.clear_colour)?.into(),
            starfield: self.starfield.resolve()?,
            galaxy: self.galaxy.resolve()?,
            moon: self.moon.resolve()?,
        })
    }
}

impl StarfieldSection {
    fn resolve(&self) -> Result<StarfieldSettings, BackdropConfigError> {
        let extent = non_negative("starfield.extent", self.extent)?;
        let [divisor_x, divisor_y] = self.spin_divisors;
        positive("starfield.spin_divisors", divisor_x)?;
        positive("starfield.spin_divisors", divisor_y)?;

        Ok(StarfieldSettings {
            params: UniformFieldParams {
                point_count: self.point_count,
                extent,
            },
            colour: parse_colour("starfield.colour", &self.colour)?.into(),
            spin: SpinRate::from_divisors(Vec2::new(divisor_x, divisor_y)),
        })
    }
}

impl GalaxySection {
    fn resolve(&self) -> Result<GalaxySettings, BackdropConfigError> {
        if self.branches == 0 {
            return Err(BackdropConfigError::NoBranches);
        }
        let opacity = finite("galaxy.opacity", self.opacity)?;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(BackdropConfigError::OpacityOutOfRange(opacity));
        }

        let params = SpiralGalaxyParams {
            point_count: self.point_count,
            radius: positive("galaxy.radius", self.radius)?,
            branches: self.branches,
            spin_factor: finite("galaxy.spin_factor", self.spin_factor)?,
            jitter_power: non_negative("galaxy.jitter_power", self.jitter_power)?,
            jitter_factor: non_negative("galaxy.jitter_factor", self.jitter_factor)?,
            vertical_flattening: finite("galaxy.vertical_flattening", self.vertical_flattening)?,
            inner_colour: linear_rgb(parse_colour("galaxy.inner_colour", &self.inner_colour)?),
            outer_colour: linear_rgb(parse_colour("galaxy.outer_colour", &self.outer_colour)?),
        };

        let spin = finite_vec("galaxy.spin_rate", &self.spin_rate)?;
        let translation = finite_vec("galaxy.translation", &self.translation)?;
        let tilt = finite_vec("galaxy.tilt", &self.tilt)?;

        Ok(GalaxySettings {
            params,
            opacity,
            spin: SpinRate::new(spin[0], spin[1]),
            transform: Transform::from_xyz(translation[0], translation[1], translation[2])
                .with_rotation(Quat::from_euler(EulerRot::XYZ, tilt[0], tilt[1], tilt[2])),
        })
    }
}

impl MoonSection {
    fn resolve(&self) -> Result<MoonSettings, BackdropConfigError> {
        let position = finite_vec("moon.position", &self.position)?;
        let range = finite_vec("moon.float_range", &self.float_range)?;

        Ok(MoonSettings {
            radius: positive("moon.radius", self.radius)?,
            position: Vec3::from_array(position),
            colour: parse_colour("moon.colour", &self.colour)?.into(),
            float: FloatMotion::new(
                finite("moon.float_speed", self.float_speed)?,
                finite("moon.float_rotation_intensity", self.float_rotation_intensity)?,
                finite("moon.float_intensity", self.float_intensity)?,
                Vec2::from_array(range),
            ),
        })
    }
}

fn finite(field: &'static str, value: f32) -> Result<f32, BackdropConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BackdropConfigError::NotFinite { field, value })
    }
}

fn finite_vec<const N: usize>(
    field: &'static str,
    values: &[f32; N],
) -> Result<[f32; N], BackdropConfigError> {
    for value in values {
        finite(field, *value)?;
    }
    Ok(*values)
}

fn non_negative(field: &'static str, value: f32) -> Result<f32, BackdropConfigError> {
    if finite(field, value)? < 0.0 {
        return Err(BackdropConfigError::Negative { field, value });
    }
    Ok(value)
}

fn positive(field: &'static str, value: f32) -> Result<f32, BackdropConfigError> {
    if finite(field, value)? <= 0.0 {
        return Err(BackdropConfigError::NotPositive { field, value });
    }
    Ok(value)
}

fn parse_colour(field: &'static str, value: &str) -> Result<Srgba, BackdropConfigError> {
    Srgba::hex(value).map_err(|err| BackdropConfigError::InvalidColour {
        field,
        value: value.to_string(),
        reason: err.to_string(),
    })
}

// Gradients are mixed in linear space, matching how the GPU blends vertex colours.
fn linear_rgb(colour: Srgba) -> Vec3 {
    let linear = LinearRgba::from(colour);
    Vec3::new(linear.red, linear.green, linear.blue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_resolve() {
        let settings = BackdropSettings::default();
        assert_eq!(settings.starfield.params.point_count, 3000);
        assert_eq!(settings.starfield.params.extent, 10.0);
        assert_relative_eq!(settings.starfield.spin.x, -1.0 / 20.0);
        assert_relative_eq!(settings.starfield.spin.y, -1.0 / 25.0);
        assert_eq!(settings.galaxy.params.branches, 3);
        assert_eq!(settings.galaxy.spin, SpinRate::new(0.0, 0.15));
        assert_eq!(
            settings.galaxy.transform.translation,
            Vec3::new(-1.2, 0.0, -0.5)
        );
        assert_eq!(settings.moon.position, Vec3::new(1.2, 0.0, -0.2));
    }

    #[test]
    fn galaxy_colours_are_linear() {
        let settings = BackdropSettings::default();
        let inner = settings.galaxy.params.inner_colour;
        // #f7d794 in linear space: 0.930, 0.680, 0.296.
        assert_relative_eq!(inner.x, 0.930, epsilon = 1e-3);
        assert_relative_eq!(inner.y, 0.680, epsilon = 1e-3);
        assert_relative_eq!(inner.z, 0.296, epsilon = 1e-3);
    }

    #[test]
    fn zero_branches_rejected() {
        let mut manifest = BackdropManifest::default();
        manifest.galaxy.branches = 0;
        assert_eq!(manifest.resolve(), Err(BackdropConfigError::NoBranches));
    }

    #[test]
    fn zero_radius_rejected() {
        let mut manifest = BackdropManifest::default();
        manifest.galaxy.radius = 0.0;
        assert_eq!(
            manifest.resolve(),
            Err(BackdropConfigError::NotPositive {
                field: "galaxy.radius",
                value: 0.0
            })
        );
    }

    #[test]
    fn zero_spin_divisor_rejected() {
        let mut manifest = BackdropManifest::default();
        manifest.starfield.spin_divisors = [20.0, 0.0];
        assert_eq!(
            manifest.resolve(),
            Err(BackdropConfigError::NotPositive {
                field: "starfield.spin_divisors",
                value: 0.0
            })
        );
    }

    #[test]
    fn negative_extent_rejected() {
        let mut manifest = BackdropManifest::default();
        manifest.starfield.extent = -1.0;
        assert!(matches!(
            manifest.resolve(),
            Err(BackdropConfigError::Negative {
                field: "starfield.extent",
                ..
            })
        ));
    }

    #[test]
    fn opacity_out_of_range_rejected() {
        let mut manifest = BackdropManifest::default();
        manifest.galaxy.opacity = 1.5;
        assert_eq!(
            manifest.resolve(),
            Err(BackdropConfigError::OpacityOutOfRange(1.5))
        );
    }

    #[test]
    fn bad_colour_reports_field() {
        let mut manifest = BackdropManifest::default();
        manifest.moon.colour = "not-a-colour".to_string();
        let err = manifest.resolve().unwrap_err();
        assert!(matches!(
            &err,
            BackdropConfigError::InvalidColour { field: "moon.colour", value, .. } if value == "not-a-colour"
        ));
        assert!(err.to_string().starts_with("moon.colour is not a valid hex colour"));
    }

    #[test]
    fn non_finite_values_rejected() {
        let mut manifest = BackdropManifest::default();
        manifest.galaxy.tilt = [0.0, f32::NAN, 0.0];
        assert!(matches!(
            manifest.resolve(),
            Err(BackdropConfigError::NotFinite {
                field: "galaxy.tilt",
                ..
            })
        ));
    }

    #[test]
    fn empty_fields_are_allowed() {
        let mut manifest = BackdropManifest::default();
        manifest.starfield.point_count = 0;
        manifest.galaxy.point_count = 0;
        let settings = manifest.resolve().unwrap();
        assert_eq!(settings.starfield.params.point_count, 0);
        assert_eq!(settings.galaxy.params.point_count, 0);
    }
}
