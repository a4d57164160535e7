use bevy::prelude::*;
use constants::moon::{
    FLOAT_MAX_OFFSET, MOON_LIGHT_INTENSITY, MOON_LIGHT_RANGE, MOON_METALLIC, MOON_ROUGHNESS,
    MOON_SEGMENTS,
};

use crate::engine::animation::rotation::RotationState;
use crate::engine::assets::backdrop_settings::{
    BackdropSettings, GalaxySettings, MoonSettings, StarfieldSettings,
};
use crate::engine::generation::random::{SceneRng, UnitSource};
use crate::engine::generation::spiral_galaxy::generate_spiral_galaxy;
use crate::engine::generation::uniform_field::generate_uniform_field;
use crate::engine::mesh::point_field_mesh::{
    create_coloured_point_field_mesh, create_point_field_mesh, create_point_field_material,
};

/// Whether the decorative backdrop currently exists in the world.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum BackdropState {
    #[default]
    Unmounted,
    Active,
}

impl BackdropState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropState::Unmounted => "unmounted",
            BackdropState::Active => "active",
        }
    }
}

/// Marks the root entities that are despawned on unmount.
#[derive(Component)]
pub struct BackdropEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFieldKind {
    Starfield,
    Galaxy,
}

impl PointFieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointFieldKind::Starfield => "starfield",
            PointFieldKind::Galaxy => "galaxy",
        }
    }
}

/// A spinning point field and the size of its generated buffer.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PointField {
    pub kind: PointFieldKind,
    pub point_count: usize,
}

#[derive(Component)]
pub struct Moon;

/// Request to mount or unmount the backdrop, from the host page or the keyboard.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackdropMountRequest {
    pub mounted: bool,
}

/// Mount state the backdrop takes once loading finishes.
/// Requests that arrive while the manifest is loading land here.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupMount {
    pub mounted: bool,
}

impl Default for StartupMount {
    fn default() -> Self {
        Self { mounted: true }
    }
}

pub fn record_startup_mount_requests(
    mut requests: EventReader<BackdropMountRequest>,
    mut startup: ResMut<StartupMount>,
) {
    if let Some(request) = requests.read().last() {
        info!(
            "Backdrop will start {}",
            if request.mounted { "mounted" } else { "unmounted" }
        );
        startup.mounted = request.mounted;
    }
}

/// Mount the backdrop as soon as the app is running, unless the host asked otherwise.
pub fn mount_backdrop_on_start(
    startup: Res<StartupMount>,
    mut next_state: ResMut<NextState<BackdropState>>,
) {
    if startup.mounted {
        next_state.set(BackdropState::Active);
    } else {
        println!("Backdrop left unmounted at startup");
    }
}

/// Apply the latest mount request of the frame; requests matching the current state are ignored.
/// A request also overrides a transition that is still pending.
pub fn handle_mount_requests(
    mut requests: EventReader<BackdropMountRequest>,
    state: Res<State<BackdropState>>,
    mut next_state: ResMut<NextState<BackdropState>>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };

    let target = if request.mounted {
        BackdropState::Active
    } else {
        BackdropState::Unmounted
    };

    let pending = match *next_state {
        NextState::Pending(pending) => pending,
        NextState::Unchanged => *state.get(),
    };
    if pending == target {
        return;
    }

    info!("Backdrop {} requested", target.as_str());
    if *state.get() == target {
        next_state.reset();
    } else {
        next_state.set(target);
    }
}

/// Toggle the backdrop with the B key on native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn backdrop_keyboard_toggle(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<BackdropState>>,
    mut requests: EventWriter<BackdropMountRequest>,
) {
    if keyboard.just_pressed(KeyCode::KeyB) {
        requests.write(BackdropMountRequest {
            mounted: *state.get() == BackdropState::Unmounted,
        });
    }
}

/// Generate every point field and spawn the backdrop. Runs once per mount.
pub fn spawn_backdrop(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<BackdropSettings>,
    mut rng: ResMut<SceneRng>,
) {
    spawn_starfield(
        &mut commands,
        &mut meshes,
        &mut materials,
        &settings.starfield,
        &mut rng,
    );
    spawn_galaxy(
        &mut commands,
        &mut meshes,
        &mut materials,
        &settings.galaxy,
        &mut rng,
    );
    spawn_moon(
        &mut commands,
        &mut meshes,
        &mut materials,
        &settings.moon,
        &mut rng,
    );

    println!(
        "Backdrop mounted: {} stars, {} galaxy points",
        settings.starfield.params.point_count, settings.galaxy.params.point_count
    );
}

fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    starfield: &StarfieldSettings,
    rng: &mut SceneRng,
) {
    let cloud = generate_uniform_field(&starfield.params, rng.source());

    commands.spawn((
        Name::new("Starfield"),
        Mesh3d(meshes.add(create_point_field_mesh(&cloud))),
        MeshMaterial3d(materials.add(create_point_field_material(starfield.colour))),
        Transform::default(),
        starfield.spin,
        RotationState::default(),
        PointField {
            kind: PointFieldKind::Starfield,
            point_count: cloud.len(),
        },
        BackdropEntity,
    ));
}

fn spawn_galaxy(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    galaxy: &GalaxySettings,
    rng: &mut SceneRng,
) {
    let cloud = generate_spiral_galaxy(&galaxy.params, rng.source());
    let mesh = meshes.add(create_coloured_point_field_mesh(&cloud, galaxy.opacity));
    let material = materials.add(create_point_field_material(Color::WHITE));

    // The group carries the fixed tilt; the child spins inside it.
    commands
        .spawn((
            Name::new("Galaxy"),
            galaxy.transform,
            Visibility::default(),
            BackdropEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::default(),
                galaxy.spin,
                RotationState::default(),
                PointField {
                    kind: PointFieldKind::Galaxy,
                    point_count: cloud.len(),
                },
            ));
        });
}

fn spawn_moon(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    moon: &MoonSettings,
    rng: &mut SceneRng,
) {
    let offset = rng.source().next_unit() * FLOAT_MAX_OFFSET;
    let sphere = meshes.add(Sphere::new(moon.radius).mesh().uv(MOON_SEGMENTS, MOON_SEGMENTS));
    let material = materials.add(StandardMaterial {
        base_color: moon.colour,
        perceptual_roughness: MOON_ROUGHNESS,
        metallic: MOON_METALLIC,
        ..default()
    });

    commands
        .spawn((
            Name::new("Moon float"),
            Transform::default(),
            Visibility::default(),
            moon.float.with_offset(offset),
            BackdropEntity,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Mesh3d(sphere),
                    MeshMaterial3d(material),
                    Transform::from_translation(moon.position),
                    Moon,
                ))
                .with_children(|moon_entity| {
                    moon_entity.spawn((
                        PointLight {
                            color: Color::WHITE,
                            intensity: MOON_LIGHT_INTENSITY,
                            range: MOON_LIGHT_RANGE,
                            shadows_enabled: false,
                            ..default()
                        },
                        Transform::default(),
                    ));
                });
        });
}

/// Remove everything spawned on mount, children included.
pub fn despawn_backdrop(mut commands: Commands, roots: Query<Entity, With<BackdropEntity>>) {
    let mut removed = 0;
    for entity in &roots {
        commands.entity(entity).despawn();
        removed += 1;
    }
    println!("Backdrop unmounted ({} root entities removed)", removed);
}
