use crate::atlas::DigitAtlas;
use crate::geometry::GlyphRect;
use anyhow::{bail, Result};
use wgpu;

/// GPU copy of the digit atlas
///
/// Uploaded once at startup; the bind group is shared by every quad drawn in
/// a frame (grid dots sample it too but ignore the texel).
pub struct GlyphAtlas {
    texture: wgpu::Texture,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,

    /// Atlas dimensions
    atlas_width: u32,
    atlas_height: u32,
}

impl GlyphAtlas {
    /// Create the atlas texture and upload the decoded strip
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, atlas: &DigitAtlas) -> Result<Self> {
        let (atlas_width, atlas_height) = atlas.dimensions();
        let max_dimension = device.limits().max_texture_dimension_2d;
        if atlas_width > max_dimension || atlas_height > max_dimension {
            bail!(
                "Digit atlas {}x{} exceeds the GPU texture limit of {}",
                atlas_width,
                atlas_height,
                max_dimension
            );
        }

        let size = wgpu::Extent3d {
            width: atlas_width,
            height: atlas_height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Digit Atlas Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        upload_rgba(queue, &texture, atlas.pixels(), atlas_width, atlas_height);

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Linear filtering for smooth scaling
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Digit Atlas Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Digit Atlas Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Digit Atlas Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        log::info!("Uploaded digit atlas {}x{}", atlas_width, atlas_height);

        Ok(Self {
            texture,
            bind_group_layout,
            bind_group,
            atlas_width,
            atlas_height,
        })
    }

    /// UV coordinates for a source rectangle
    pub fn uv(&self, src: GlyphRect) -> [f32; 4] {
        src.to_uv(self.atlas_width, self.atlas_height)
    }

    /// Get atlas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        let extent = self.texture.size();
        (extent.width, extent.height)
    }
}

/// Upload RGBA8 rows, padding each row to `COPY_BYTES_PER_ROW_ALIGNMENT`
fn upload_rgba(queue: &wgpu::Queue, texture: &wgpu::Texture, rgba: &[u8], width: u32, height: u32) {
    const ALIGNMENT: u32 = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    let unpadded_bytes_per_row = 4 * width;
    let padded_bytes_per_row = unpadded_bytes_per_row.div_ceil(ALIGNMENT) * ALIGNMENT;

    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let destination = wgpu::ImageCopyTexture {
        texture,
        mip_level: 0,
        origin: wgpu::Origin3d::ZERO,
        aspect: wgpu::TextureAspect::All,
    };

    if unpadded_bytes_per_row == padded_bytes_per_row {
        queue.write_texture(
            destination,
            rgba,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(unpadded_bytes_per_row),
                rows_per_image: Some(height),
            },
            size,
        );
        return;
    }

    let row = unpadded_bytes_per_row as usize;
    let padded_row = padded_bytes_per_row as usize;
    let mut padded_data = vec![0u8; padded_row * height as usize];
    for (src, dst) in rgba.chunks_exact(row).zip(padded_data.chunks_exact_mut(padded_row)) {
        dst[..row].copy_from_slice(src);
    }

    queue.write_texture(
        destination,
        &padded_data,
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(padded_bytes_per_row),
            rows_per_image: Some(height),
        },
        size,
    );
}
