use bevy::prelude::*;
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_requested: bool,
    pub settings_ready: bool,
}
