use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

use crate::engine::generation::point_cloud::{ColouredPointCloud, PointCloud};

/// Create a point-list mesh with one vertex per generated point.
/// The buffers are only needed on the GPU once uploaded.
pub fn create_point_field_mesh(cloud: &PointCloud) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, cloud.points().to_vec());
    mesh
}

/// Create a point-list mesh carrying per-vertex colours with a uniform alpha.
pub fn create_coloured_point_field_mesh(cloud: &ColouredPointCloud, opacity: f32) -> Mesh {
    let mut mesh = create_point_field_mesh(cloud.positions());
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_COLOR,
        cloud.colours().to_vertex_colours(opacity),
    );
    mesh
}

/// Unlit, alpha-blended material for point fields.
/// Vertex colours, when present, are multiplied with `base_colour`.
pub fn create_point_field_material(base_colour: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: base_colour,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}
