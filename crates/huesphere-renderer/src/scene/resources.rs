//! One-time GPU upload of the generated mesh and texture.

use huesphere_common::GenerateError;
use huesphere_procgen::{HueTexture, SphereMesh};

use crate::gpu::RendererError;

/// Immutable GPU copies of the scene data, created once at startup.
pub struct SceneResources {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub texture: wgpu::Texture,
    pub texture_view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub texture_bind_group: wgpu::BindGroup,
}

impl SceneResources {
    /// Upload vertex/index buffers and bind the texture.
    ///
    /// `texture_layout` is the pipeline's bind group 1 layout
    /// (texture at binding 0, sampler at binding 1). The texture is stored
    /// in the encoding of `surface_format` so its bytes reach the screen as
    /// generated.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        texture_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
        mesh: &SphereMesh,
        texture: &HueTexture,
    ) -> Result<Self, RendererError> {
        use wgpu::util::DeviceExt;

        let index_count = draw_index_count(mesh)?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere vertex buffer"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere index buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let gpu_texture = create_hue_texture(
            device,
            queue,
            texture,
            texture_format_for(surface_format),
        );
        let texture_view = gpu_texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_sampler(device);

        let texture_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("hue texture bind group"),
            layout: texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        tracing::info!(
            vertices = mesh.vertex_count(),
            indices = mesh.index_count(),
            texture_width = texture.width,
            texture_height = texture.height,
            "scene resources uploaded"
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count,
            texture: gpu_texture,
            texture_view,
            sampler,
            texture_bind_group,
        })
    }
}

/// Index count as a `u32` draw range.
fn draw_index_count(mesh: &SphereMesh) -> Result<u32, RendererError> {
    checked_index_count(mesh.indices.len(), mesh.tessellation)
}

fn checked_index_count(len: usize, tessellation: u32) -> Result<u32, RendererError> {
    u32::try_from(len)
        .map_err(|_| RendererError::from(GenerateError::TessellationTooLarge(tessellation)))
}

/// sRGB texture for an sRGB surface, linear for a linear one. Either way
/// the sampled value written out equals the stored byte.
pub fn texture_format_for(surface_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if surface_format.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

/// Create the RGBA8 texture and copy the hue samples into it.
fn create_hue_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    texture: &HueTexture,
    format: wgpu::TextureFormat,
) -> wgpu::Texture {
    let size = wgpu::Extent3d {
        width: texture.width,
        height: texture.height,
        depth_or_array_layers: 1,
    };

    let gpu_texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("hue texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &gpu_texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &texture.to_rgba8(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * texture.width),
            rows_per_image: Some(texture.height),
        },
        size,
    );

    gpu_texture
}

/// Wrap horizontally across the seam, clamp at the poles.
fn create_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("hue texture sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}
