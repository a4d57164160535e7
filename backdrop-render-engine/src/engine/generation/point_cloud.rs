use bevy::math::Vec3;

/// Fixed-length ordered set of 3D points.
///
/// Stored as `[f32; 3]` triples so it can be handed to a mesh attribute
/// directly, and viewed as one flat buffer of `3 * len()` floats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<[f32; 3]>,
}

impl PointCloud {
    pub(crate) fn with_capacity(point_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(point_count),
        }
    }

    pub(crate) fn push(&mut self, point: [f32; 3]) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    /// Contiguous x, y, z, x, y, z, ... view of the cloud.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    pub fn point(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied().map(Vec3::from_array)
    }
}

/// Per-point RGB colours, index-aligned with a [`PointCloud`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColourField {
    colours: Vec<[f32; 3]>,
}

impl ColourField {
    pub(crate) fn with_capacity(point_count: usize) -> Self {
        Self {
            colours: Vec::with_capacity(point_count),
        }
    }

    pub(crate) fn push(&mut self, colour: Vec3) {
        self.colours.push(colour.to_array());
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn colours(&self) -> &[[f32; 3]] {
        &self.colours
    }

    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colours)
    }

    /// RGBA vertex colours with a uniform alpha, as expected by `Mesh::ATTRIBUTE_COLOR`.
    pub fn to_vertex_colours(&self, alpha: f32) -> Vec<[f32; 4]> {
        self.colours
            .iter()
            .map(|[r, g, b]| [*r, *g, *b, alpha])
            .collect()
    }
}

/// A point cloud with one colour per point.
///
/// Only the generators build this, so both halves always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColouredPointCloud {
    positions: PointCloud,
    colours: ColourField,
}

impl ColouredPointCloud {
    pub(crate) fn with_capacity(point_count: usize) -> Self {
        Self {
            positions: PointCloud::with_capacity(point_count),
            colours: ColourField::with_capacity(point_count),
        }
    }

    pub(crate) fn push(&mut self, position: [f32; 3], colour: Vec3) {
        self.positions.push(position);
        self.colours.push(colour);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &PointCloud {
        &self.positions
    }

    pub fn colours(&self) -> &ColourField {
        &self.colours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_view_interleaves_components() {
        let mut cloud = PointCloud::with_capacity(2);
        cloud.push([1.0, 2.0, 3.0]);
        cloud.push([4.0, 5.0, 6.0]);

        assert_eq!(cloud.as_flat(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(cloud.point(1), Some(Vec3::new(4.0, 5.0, 6.0)));
        assert_eq!(cloud.point(2), None);
    }

    #[test]
    fn vertex_colours_carry_alpha() {
        let mut field = ColourField::with_capacity(1);
        field.push(Vec3::new(0.25, 0.5, 0.75));

        assert_eq!(field.to_vertex_colours(0.8), vec![[0.25, 0.5, 0.75, 0.8]]);
    }

    #[test]
    fn coloured_cloud_keeps_halves_aligned() {
        let mut cloud = ColouredPointCloud::with_capacity(3);
        for i in 0..3 {
            cloud.push([i as f32, 0.0, 0.0], Vec3::splat(i as f32));
        }

        assert_eq!(cloud.positions().len(), cloud.colours().len());
        assert_eq!(cloud.positions().as_flat().len(), 9);
        assert_eq!(cloud.colours().as_flat().len(), 9);
        assert_eq!(cloud.colours().colours()[2], [2.0, 2.0, 2.0]);
    }
}
