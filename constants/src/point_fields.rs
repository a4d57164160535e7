use bevy::math::{Vec2, Vec3};

/// Number of stars in the uniform starfield.
pub const STARFIELD_POINT_COUNT: usize = 3000;

/// Edge length of the cube the stars are scattered in, centred on the origin.
pub const STARFIELD_EXTENT: f32 = 10.0;

pub const STARFIELD_COLOUR: &str = "#ffffff";

/// Rotation divisors for the starfield: each frame x -= dt / 20 and y -= dt / 25.
pub const STARFIELD_SPIN_DIVISORS: Vec2 = Vec2::new(20.0, 25.0);

pub const GALAXY_POINT_COUNT: usize = 4000;
pub const GALAXY_RADIUS: f32 = 1.5;
pub const GALAXY_BRANCHES: u32 = 3;

/// Radians of twist per unit of radius.
pub const GALAXY_SPIN_FACTOR: f32 = 5.0;

/// Exponent applied to the jitter draw; higher values pull points onto the arms.
pub const GALAXY_JITTER_POWER: f32 = 3.0;
pub const GALAXY_JITTER_FACTOR: f32 = 0.3;
pub const GALAXY_VERTICAL_FLATTENING: f32 = 0.5;

pub const GALAXY_INNER_COLOUR: &str = "#f7d794";
pub const GALAXY_OUTER_COLOUR: &str = "#915eff";
pub const GALAXY_OPACITY: f32 = 0.8;

/// Angular rate of the galaxy in radians per second (x, y).
pub const GALAXY_SPIN_RATE: Vec2 = Vec2::new(0.0, 0.15);

/// Placement of the galaxy group in the scene.
pub const GALAXY_TRANSLATION: Vec3 = Vec3::new(-1.2, 0.0, -0.5);

/// Euler XYZ tilt of the galaxy group, in radians.
pub const GALAXY_TILT: Vec3 = Vec3::new(0.4, 0.0, 0.2);
