use super::point_cloud::PointCloud;
use super::random::UnitSource;

/// Parameters for a uniformly scattered field of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformFieldParams {
    pub point_count: usize,
    /// Edge length of the cube the points fill, centred on the origin.
    pub extent: f32,
}

/// Scatter `point_count` points uniformly through a cube of side `extent`.
///
/// Each coordinate is an independent draw mapped through `(v - 0.5) * extent`.
pub fn generate_uniform_field<S: UnitSource>(
    params: &UniformFieldParams,
    source: &mut S,
) -> PointCloud {
    let mut cloud = PointCloud::with_capacity(params.point_count);
    for _ in 0..params.point_count {
        let x = (source.next_unit() - 0.5) * params.extent;
        let y = (source.next_unit() - 0.5) * params.extent;
        let z = (source.next_unit() - 0.5) * params.extent;
        cloud.push([x, y, z]);
    }
    cloud
}
