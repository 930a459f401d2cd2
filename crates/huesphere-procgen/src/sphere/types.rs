//! Sphere mesh vertex and container types.

/// A single vertex of the sphere mesh.
///
/// Layout: position(vec3) + normal(vec3) + uv(vec2) = 32 bytes.
/// On the unit sphere `normal == position`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Byte offset of `position`.
    pub const POSITION_OFFSET: u64 = 0;
    /// Byte offset of `normal`.
    pub const NORMAL_OFFSET: u64 = 12;
    /// Byte offset of `uv`.
    pub const UV_OFFSET: u64 = 24;
    /// Stride between consecutive vertices.
    pub const STRIDE: u64 = std::mem::size_of::<MeshVertex>() as u64;
}

/// Indexed triangle mesh of a unit sphere centered at the origin.
///
/// Every index is `< vertices.len()` and `indices.len()` is a multiple of 3.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    pub tessellation: u32,
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples in winding order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

// =============================================================================
// Tests
// =============================================================================
