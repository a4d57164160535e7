use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, AMBIENT_LIGHT_COLOUR, CAMERA_FOV_DEGREES, CAMERA_POSITION, CLEAR_COLOUR,
};

// Crate engine modules
use crate::engine::animation::float_motion::apply_float_motion;
use crate::engine::animation::rotation::advance_rotation;
use crate::engine::assets::backdrop_manifest::BackdropManifest;
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::backdrop::{
    BackdropMountRequest, BackdropState, StartupMount, despawn_backdrop, handle_mount_requests,
    mount_backdrop_on_start, record_startup_mount_requests, spawn_backdrop,
};
use crate::engine::systems::fps_tracking::fps_notification_system;
// Web RPC and UI
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::ui::contact_menu::ContactMenuPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::scene::backdrop::backdrop_keyboard_toggle;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .init_state::<BackdropState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers BackdropManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<BackdropManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(ContactMenuPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<StartupMount>()
        .add_event::<BackdropMountRequest>()
        .insert_resource(ClearColor(
            Srgba::hex(CLEAR_COLOUR).map_or(Color::BLACK, Color::from),
        ))
        .insert_resource(AmbientLight {
            color: Srgba::hex(AMBIENT_LIGHT_COLOUR).map_or(Color::WHITE, Color::from),
            brightness: AMBIENT_LIGHT_BRIGHTNESS,
            ..default()
        });

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                record_startup_mount_requests,
                (load_manifest_system, transition_to_running).chain(),
            )
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), mount_backdrop_on_start)
        // Point fields are generated exactly once per mount.
        .add_systems(OnEnter(BackdropState::Active), spawn_backdrop)
        .add_systems(OnExit(BackdropState::Active), despawn_backdrop);

    let runtime_systems = (
        handle_mount_requests,
        advance_rotation,
        apply_float_motion,
        fps_notification_system,
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system).add_systems(
            Update,
            backdrop_keyboard_toggle.run_if(in_state(AppState::Running)),
        );
    }

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    println!("=== PORTFOLIO BACKDROP (STARFIELD + GALAXY + MOON) ===");
    spawn_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
