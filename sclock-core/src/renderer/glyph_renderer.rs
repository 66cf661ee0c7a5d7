use crate::geometry::{Rect, Viewport};
use crate::palette::Rgb;
use wgpu;

use super::glyph_atlas::GlyphAtlas;
use super::pipeline::create_quad_pipeline;

/// Instance data for a single quad (sent to GPU)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct QuadInstance {
    /// Top-left corner in NDC
    position: [f32; 2],
    /// Size in NDC (height is negative, y points up)
    size: [f32; 2],
    /// UV coordinates in atlas
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    /// Color (RGBA)
    color: [f32; 4],
    /// 1.0 samples the atlas, 0.0 draws a solid quad
    textured: f32,
}

impl QuadInstance {
    pub(crate) const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2, // size
        2 => Float32x2, // uv_min
        3 => Float32x2, // uv_max
        4 => Float32x4, // color
        5 => Float32,   // textured
    ];

    fn new(viewport: Viewport, dst: Rect, uv: [f32; 4], color: Rgb, textured: bool) -> Self {
        let (ndc_x, ndc_y) = viewport.pixels_to_ndc(dst.x, dst.y);
        let (ndc_width, ndc_height) = viewport.pixel_size_to_ndc(dst.width, dst.height);
        Self {
            position: [ndc_x, ndc_y],
            size: [ndc_width, ndc_height],
            uv_min: [uv[0], uv[1]],
            uv_max: [uv[2], uv[3]],
            color: color.to_rgba_f32(),
            textured: if textured { 1.0 } else { 0.0 },
        }
    }

    /// A one-pixel solid square at `(x, y)`
    pub(crate) fn point(viewport: Viewport, x: u32, y: u32, color: Rgb) -> Self {
        Self::new(
            viewport,
            Rect::new(x as f32, y as f32, 1.0, 1.0),
            [0.0; 4],
            color,
            false,
        )
    }

    /// An atlas region stretched over `dst`, color-modulated by `tint`
    pub(crate) fn glyph(viewport: Viewport, dst: Rect, uv: [f32; 4], tint: Rgb) -> Self {
        Self::new(viewport, dst, uv, tint, true)
    }
}

/// Batches quads for a frame and draws them with one instanced call
pub struct GlyphRenderer {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: usize,
    instances: Vec<QuadInstance>,
}

impl GlyphRenderer {
    /// Create a new GPU quad renderer
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat, atlas: &GlyphAtlas) -> Self {
        let pipeline = create_quad_pipeline(device, &atlas.bind_group_layout, surface_format);

        // A 640x480 window with the default grid needs ~3k dots
        let instance_capacity = 4_096;
        let instance_buffer = create_instance_buffer(device, instance_capacity);

        Self {
            pipeline,
            instance_buffer,
            instance_capacity,
            instance_count: 0,
            instances: Vec::with_capacity(instance_capacity),
        }
    }

    /// Drop everything queued for the current frame
    pub(crate) fn clear(&mut self) {
        self.instances.clear();
    }

    pub(crate) fn push(&mut self, instance: QuadInstance) {
        self.instances.push(instance);
    }

    /// Copy queued instances to the GPU, growing the buffer when needed
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(device, self.instance_capacity);
            log::debug!("Grew instance buffer to {} quads", self.instance_capacity);
        }

        self.instance_count = self.instances.len();
        if !self.instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
        }
    }

    /// Render queued quads
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>, atlas: &'a GlyphAtlas) {
        if self.instance_count == 0 {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &atlas.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        render_pass.draw(0..6, 0..self.instance_count as u32);
    }

    /// Quads queued for the current frame
    pub fn queued(&self) -> usize {
        self.instances.len()
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Quad Instance Buffer"),
        size: (capacity * std::mem::size_of::<QuadInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout_matches_attributes() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), 13 * 4);
        assert_eq!(QuadInstance::ATTRIBUTES[4].offset, 32);
        assert_eq!(QuadInstance::ATTRIBUTES[5].offset, 48);
    }

    #[test]
    fn test_point_covers_one_pixel() {
        let viewport = Viewport::new(200, 100);
        let q = QuadInstance::point(viewport, 0, 0, Rgb::from_hex(0xAAAAAA));
        assert_eq!(q.position, [-1.0, 1.0]);
        assert_eq!(q.size, [0.01, -0.02]);
        assert_eq!(q.textured, 0.0);
    }

    #[test]
    fn test_glyph_instance() {
        let viewport = Viewport::new(200, 100);
        let dst = Rect::new(100.0, 50.0, 50.0, 25.0);
        let q = QuadInstance::glyph(viewport, dst, [0.0, 0.0, 0.5, 1.0], Rgb::from_hex(0xFFFFFF));
        assert_eq!(q.position, [0.0, 0.0]);
        assert_eq!(q.size, [0.5, -0.5]);
        assert_eq!(q.uv_max, [0.5, 1.0]);
        assert_eq!(q.color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(q.textured, 1.0);
    }
}
