use crate::engine::graphics::canvas::FilledRect;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            0 => Float32x3,
            1 => Float32x3,
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

/// One filled rectangle, drawn as an instanced unit quad.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RectInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl RectInstance {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            0 => Float32x2,
            1 => Float32x2,
            2 => Float32x4,
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: ATTRIBUTES,
        }
    }
}

impl From<&FilledRect> for RectInstance {
    fn from(rect: &FilledRect) -> Self {
        let [r, g, b, a] = rect.color.map(|c| c as f32 / 255.0);
        Self {
            origin: [rect.x, rect.y],
            size: [rect.width, rect.height],
            color: [r, g, b, a],
        }
    }
}

// Unit cube centred on the origin, coloured by corner position.
pub const CUBE_VERTICES: &[ColorVertex] = &[
    ColorVertex { position: [-0.5, -0.5, -0.5], color: [0.0, 0.0, 0.0] },
    ColorVertex { position: [ 0.5, -0.5, -0.5], color: [1.0, 0.0, 0.0] },
    ColorVertex { position: [ 0.5,  0.5, -0.5], color: [1.0, 1.0, 0.0] },
    ColorVertex { position: [-0.5,  0.5, -0.5], color: [0.0, 1.0, 0.0] },
    ColorVertex { position: [-0.5, -0.5,  0.5], color: [0.0, 0.0, 1.0] },
    ColorVertex { position: [ 0.5, -0.5,  0.5], color: [1.0, 0.0, 1.0] },
    ColorVertex { position: [ 0.5,  0.5,  0.5], color: [1.0, 1.0, 1.0] },
    ColorVertex { position: [-0.5,  0.5,  0.5], color: [0.0, 1.0, 1.0] },
];

// Counter-clockwise when seen from outside.
pub const CUBE_INDICES: &[u16] = &[
    // Front (+z)
    4, 5, 6,  6, 7, 4,
    // Back (-z)
    1, 0, 3,  3, 2, 1,
    // Left (-x)
    0, 4, 7,  7, 3, 0,
    // Right (+x)
    5, 1, 2,  2, 6, 5,
    // Top (+y)
    7, 6, 2,  2, 3, 7,
    // Bottom (-y)
    0, 1, 5,  5, 4, 0,
];

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn cube_has_eight_vertices_and_thirty_six_indices() {
        assert_eq!(CUBE_VERTICES.len(), 8);
        assert_eq!(CUBE_INDICES.len(), 36);
        assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < CUBE_VERTICES.len()));
    }

    #[test]
    fn cube_triangles_face_outward() {
        let pos = |i: u16| Vec3::from(CUBE_VERTICES[i as usize].position);
        for tri in CUBE_INDICES.chunks(3) {
            let (a, b, c) = (pos(tri[0]), pos(tri[1]), pos(tri[2]));
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.length() > 0.0, "degenerate triangle {tri:?}");
            assert!(normal.dot(centroid) > 0.0, "inward triangle {tri:?}");
        }
    }

    #[test]
    fn layouts_match_struct_sizes() {
        assert_eq!(std::mem::size_of::<ColorVertex>(), 24);
        assert_eq!(std::mem::size_of::<RectInstance>(), 32);
        assert_eq!(ColorVertex::desc().array_stride, 24);
        assert_eq!(RectInstance::desc().step_mode, wgpu::VertexStepMode::Instance);
    }

    #[test]
    fn rect_instance_normalizes_color() {
        let rect = FilledRect::new(40.0, 80.0, 40.0, 40.0, [255, 0, 51, 255]);
        let instance = RectInstance::from(&rect);
        assert_eq!(instance.origin, [40.0, 80.0]);
        assert_eq!(instance.size, [40.0, 40.0]);
        assert_eq!(instance.color, [1.0, 0.0, 0.2, 1.0]);
    }
}
