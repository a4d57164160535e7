use bevy::math::Vec3;

/// Page background behind the backdrop canvas (#050816).
pub const CLEAR_COLOUR: &str = "#050816";

pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 2.0);

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

pub const AMBIENT_LIGHT_COLOUR: &str = "#ffffff";

/// Ambient brightness, scaled from the page's 0.4 intensity into Bevy's cd/m² range.
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 320.0;

/// Asset path of the optional scene manifest overriding these defaults.
pub const BACKDROP_MANIFEST_PATH: &str = "backdrop.json";

/// Interval between FPS notifications sent to the host page.
pub const FPS_NOTIFICATION_INTERVAL_SECS: f32 = 0.5;
