use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::render_settings::BACKDROP_MANIFEST_PATH;

use crate::engine::assets::backdrop_manifest::BackdropManifest;
use crate::engine::assets::backdrop_settings::BackdropSettings;
use crate::engine::generation::random::SceneRng;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<BackdropManifest>>,
}

// Start the loading process
pub fn start_loading(
    mut manifest_loader: ResMut<ManifestLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
) {
    println!("Loading backdrop manifest from: {}", BACKDROP_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(BACKDROP_MANIFEST_PATH));
    loading_progress.manifest_requested = true;
}

/// Resolve the manifest once it arrives, or fall back to defaults if it failed to load.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<BackdropManifest>>,
) {
    if !loading_progress.manifest_requested || loading_progress.settings_ready {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    let settings = if let Some(manifest) = manifests.get(handle) {
        println!("✓ Backdrop manifest loaded");
        resolve_or_default(manifest)
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        warn!("Backdrop manifest unavailable, using built-in scene: {}", err);
        BackdropSettings::default()
    } else {
        return;
    };

    insert_backdrop_settings(&mut commands, settings);
    loading_progress.settings_ready = true;
}

/// Validate a loaded manifest, keeping the scene renderable when it is rejected.
pub fn resolve_or_default(manifest: &BackdropManifest) -> BackdropSettings {
    manifest.resolve().unwrap_or_else(|err| {
        warn!("Invalid backdrop manifest, using built-in scene: {}", err);
        BackdropSettings::default()
    })
}

pub fn insert_backdrop_settings(commands: &mut Commands, settings: BackdropSettings) {
    match settings.seed {
        Some(seed) => info!("Backdrop point fields seeded with {}", seed),
        None => info!("Backdrop point fields seeded from entropy"),
    }
    commands.insert_resource(ClearColor(settings.clear_colour));
    commands.insert_resource(SceneRng::new(settings.seed));
    commands.insert_resource(settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetPlugin;
    use bevy::ecs::system::RunSystemOnce;
    use bevy_common_assets::json::JsonAssetPlugin;
    use std::time::Duration;

    fn loader_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .add_plugins(JsonAssetPlugin::<BackdropManifest>::new(&["json"]))
            .init_resource::<LoadingProgress>()
            .init_resource::<ManifestLoader>()
            .add_systems(Update, load_manifest_system);
        app
    }

    fn request(app: &mut App, path: &'static str) {
        let handle = app.world().resource::<AssetServer>().load(path);
        app.world_mut().resource_mut::<ManifestLoader>().handle = Some(handle);
        app.world_mut()
            .resource_mut::<LoadingProgress>()
            .manifest_requested = true;
    }

    fn run_until_ready(app: &mut App) -> bool {
        for _ in 0..400 {
            app.update();
            if app.world().resource::<LoadingProgress>().settings_ready {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn missing_manifest_file_falls_back_to_defaults() {
        let mut app = loader_app();
        request(&mut app, "no_such_backdrop.json");

        assert!(run_until_ready(&mut app));
        assert_eq!(
            *app.world().resource::<BackdropSettings>(),
            BackdropSettings::default()
        );
        assert!(app.world().contains_resource::<SceneRng>());
    }

    #[test]
    fn shipped_manifest_loads() {
        let mut app = loader_app();
        request(&mut app, "backdrop.json");

        assert!(run_until_ready(&mut app));
        assert_eq!(
            app.world().resource::<BackdropSettings>().starfield.params.point_count,
            3000
        );
    }

    #[test]
    fn waits_until_manifest_requested() {
        let mut app = loader_app();
        app.update();
        app.update();
        assert!(!app.world().resource::<LoadingProgress>().settings_ready);
        assert!(!app.world().contains_resource::<BackdropSettings>());
    }

    #[test]
    fn rejected_manifest_falls_back_to_defaults() {
        let mut manifest = BackdropManifest::default();
        manifest.galaxy.branches = 0;
        manifest.seed = Some(9);
        assert_eq!(resolve_or_default(&manifest), BackdropSettings::default());
    }

    #[test]
    fn valid_manifest_overrides_defaults() {
        let mut manifest = BackdropManifest::default();
        manifest.starfield.point_count = 12;
        let settings = resolve_or_default(&manifest);
        assert_eq!(settings.starfield.params.point_count, 12);
    }

    #[test]
    fn settings_insert_clear_colour_and_rng() {
        let mut world = World::new();
        world
            .run_system_once(|mut commands: Commands| {
                let mut settings = BackdropSettings::default();
                settings.seed = Some(1);
                insert_backdrop_settings(&mut commands, settings);
            })
            .unwrap();

        assert!(world.contains_resource::<SceneRng>());
        assert_eq!(world.resource::<BackdropSettings>().seed, Some(1));
        assert_eq!(
            world.resource::<ClearColor>().0,
            BackdropSettings::default().clear_colour
        );
    }
}
