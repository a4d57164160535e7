use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States, Resource)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

// Final transition to running state
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.settings_ready {
        println!("→ Backdrop settings ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .init_resource::<LoadingProgress>()
            .add_systems(
                Update,
                transition_to_running.run_if(in_state(AppState::Loading)),
            );
        app
    }

    fn current(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    #[test]
    fn stays_loading_until_settings_ready() {
        let mut app = test_app();
        app.update();
        app.update();
        assert_eq!(current(&app), AppState::Loading);

        app.world_mut().resource_mut::<LoadingProgress>().settings_ready = true;
        app.update();
        app.update();
        assert_eq!(current(&app), AppState::Running);
    }
}
