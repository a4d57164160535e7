use bevy::prelude::*;

/// Slow bob and sway for a floating object.
///
/// The pose is a pure function of the time since mount plus a phase offset,
/// so the object never drifts away from its rest position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Output range of the vertical bob before scaling by `float_intensity`.
    pub range: Vec2,
    /// Phase offset in seconds.
    pub offset: f32,
    elapsed: f32,
}

impl FloatMotion {
    pub fn new(speed: f32, rotation_intensity: f32, float_intensity: f32, range: Vec2) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
            range,
            offset: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn tick(&mut self, delta_secs: f32) {
        self.elapsed += delta_secs;
    }

    fn phase(&self) -> f32 {
        (self.offset + self.elapsed) / 4.0 * self.speed
    }

    pub fn rotation(&self) -> Quat {
        let phase = self.phase();
        let intensity = self.rotation_intensity;
        Quat::from_euler(
            EulerRot::XYZ,
            phase.cos() / 8.0 * intensity,
            phase.sin() / 8.0 * intensity,
            phase.sin() / 20.0 * intensity,
        )
    }

    pub fn height(&self) -> f32 {
        let bob = self.phase().sin() / 10.0;
        map_linear(bob, -0.1, 0.1, self.range.x, self.range.y) * self.float_intensity
    }
}

fn map_linear(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    to_min + (value - from_min) * (to_max - to_min) / (from_max - from_min)
}

pub fn apply_float_motion(time: Res<Time>, mut query: Query<(&mut FloatMotion, &mut Transform)>) {
    let delta = time.delta_secs();
    for (mut motion, mut transform) in &mut query {
        motion.tick(delta);
        transform.rotation = motion.rotation();
        transform.translation.y = motion.height();
    }
}
