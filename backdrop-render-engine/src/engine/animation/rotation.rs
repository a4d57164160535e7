use bevy::prelude::*;

/// Angular velocity of a point field around its local X and Y axes, in radians per second.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct SpinRate {
    pub x: f32,
    pub y: f32,
}

impl SpinRate {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_vec2(rate: Vec2) -> Self {
        Self::new(rate.x, rate.y)
    }

    /// Rate that decreases each angle by `dt / divisor` per frame.
    ///
    /// A zero divisor leaves that axis still.
    pub fn from_divisors(divisors: Vec2) -> Self {
        let axis = |divisor: f32| if divisor == 0.0 { 0.0 } else { -1.0 / divisor };
        Self::new(axis(divisors.x), axis(divisors.y))
    }
}

/// Accumulated rotation of a point field. Starts at zero on every mount.
///
/// Angles are never wrapped; only their sine and cosine reach the renderer.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
}

impl RotationState {
    pub fn advance(&mut self, rate: SpinRate, delta_secs: f32) {
        self.x += rate.x * delta_secs;
        self.y += rate.y * delta_secs;
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// Advance every spinning field by this frame's delta and apply it to the transform.
pub fn advance_rotation(
    time: Res<Time>,
    mut query: Query<(&SpinRate, &mut RotationState, &mut Transform)>,
) {
    let delta = time.delta_secs();
    for (rate, mut state, mut transform) in &mut query {
        state.advance(*rate, delta);
        transform.rotation = state.to_quat();
    }
}
