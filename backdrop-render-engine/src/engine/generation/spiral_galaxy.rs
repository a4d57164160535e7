use std::f32::consts::TAU;

use bevy::math::Vec3;

use super::point_cloud::ColouredPointCloud;
use super::random::UnitSource;

/// Shape and colouring of a spiral galaxy point field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralGalaxyParams {
    pub point_count: usize,
    /// Maximum distance of a point from the galaxy centre.
    pub radius: f32,
    /// Number of spiral arms.
    pub branches: u32,
    /// Twist in radians per unit of radius.
    pub spin_factor: f32,
    pub jitter_power: f32,
    pub jitter_factor: f32,
    /// Scale applied to the vertical jitter.
    pub vertical_flattening: f32,
    /// Linear RGB at the centre.
    pub inner_colour: Vec3,
    /// Linear RGB at the rim.
    pub outer_colour: Vec3,
}

/// One generated galaxy point before it is written into the buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyPoint {
    pub position: Vec3,
    /// Distance drawn for this point, before jitter.
    pub radius: f32,
    pub colour: Vec3,
}

impl SpiralGalaxyParams {
    /// Fraction of the way from the centre to the rim, used for colour mixing.
    pub fn mix_fraction(&self, radius: f32) -> f32 {
        if self.radius > 0.0 {
            (radius / self.radius).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    fn branch_angle(&self, index: usize) -> f32 {
        if self.branches == 0 {
            return 0.0;
        }
        let branch = (index % self.branches as usize) as f32;
        branch * TAU / self.branches as f32
    }
}

/// Build the galaxy's positions and matching colours.
pub fn generate_spiral_galaxy<S: UnitSource>(
    params: &SpiralGalaxyParams,
    source: &mut S,
) -> ColouredPointCloud {
    let mut cloud = ColouredPointCloud::with_capacity(params.point_count);
    for index in 0..params.point_count {
        let point = sample_galaxy_point(params, index, source);
        cloud.push(point.position.to_array(), point.colour);
    }
    cloud
}

/// Generate the point at `index`.
///
/// Draws from `source` in a fixed order: radius, then magnitude and sign for
/// the x, y and z jitter.
pub fn sample_galaxy_point<S: UnitSource>(
    params: &SpiralGalaxyParams,
    index: usize,
    source: &mut S,
) -> GalaxyPoint {
    let radius = source.next_unit() * params.radius;
    let spin_angle = radius * params.spin_factor;
    let angle = params.branch_angle(index) + spin_angle;

    let jitter_x = jitter(params, radius, source);
    let jitter_y = jitter(params, radius, source);
    let jitter_z = jitter(params, radius, source);

    let position = Vec3::new(
        angle.cos() * radius + jitter_x,
        jitter_y * params.vertical_flattening,
        angle.sin() * radius + jitter_z,
    );
    let colour = params
        .inner_colour
        .lerp(params.outer_colour, params.mix_fraction(radius));

    GalaxyPoint {
        position,
        radius,
        colour,
    }
}

// Mostly tiny offsets with the odd outlier, scaled with distance from the centre.
fn jitter<S: UnitSource>(params: &SpiralGalaxyParams, radius: f32, source: &mut S) -> f32 {
    let magnitude = source.next_unit().powf(params.jitter_power);
    let sign = if source.next_unit() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign * params.jitter_factor * radius
}
