mod glyph_atlas;
mod glyph_renderer;
mod gpu;
mod pipeline;

use crate::atlas::DigitAtlas;
use crate::driver::RenderDriver;
use crate::frame::FrameOutcome;
use crate::geometry::{GlyphRect, Rect, Viewport};
use crate::palette::Rgb;
use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;
use wgpu;
use winit::window::{Fullscreen, Window};

use glyph_atlas::GlyphAtlas;
use glyph_renderer::{GlyphRenderer, QuadInstance};
use gpu::GpuContext;

/// GPU-accelerated render driver using wgpu
///
/// Drawing calls between `clear` and `present` are batched into instanced
/// quads and submitted in a single render pass.
///
/// Safety: The Surface has a 'static lifetime, but is actually tied to the Window's lifetime.
/// Rust drops struct fields in declaration order, so the surface drops
/// before `window`.
pub struct Renderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    glyph_atlas: GlyphAtlas,
    glyph_renderer: GlyphRenderer,
    clear_color: wgpu::Color,
    viewport: Viewport,
    window: Arc<Window>, // Keep window alive - must be last for drop order
}

impl Renderer {
    /// Create a new renderer and upload the digit atlas
    pub async fn new(window: Arc<Window>, atlas: &DigitAtlas) -> Result<Self> {
        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone()).await?;

        let glyph_atlas = GlyphAtlas::new(&gpu.device, &gpu.queue, atlas)?;
        let glyph_renderer = GlyphRenderer::new(&gpu.device, gpu.config.format, &glyph_atlas);

        let (atlas_width, atlas_height) = glyph_atlas.dimensions();
        info!(
            "Renderer ready: {}x{} surface, {}x{} atlas",
            gpu.config.width, gpu.config.height, atlas_width, atlas_height
        );

        Ok(Self {
            device: gpu.device,
            queue: gpu.queue,
            surface: gpu.surface,
            config: gpu.config,
            glyph_atlas,
            glyph_renderer,
            clear_color: wgpu::Color::BLACK,
            viewport: Viewport::new(size.width, size.height),
            window,
        })
    }

    /// Resize the surface
    ///
    /// A zero dimension (minimized window) is remembered so frames are
    /// skipped, but the surface keeps its last valid size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        if width > 0 && height > 0 {
            info!("Resizing renderer to {}x{}", width, height);
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}

impl RenderDriver for Renderer {
    fn viewport_size(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, color: Rgb) {
        let [r, g, b, a] = color.to_rgba_f32();
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };
        self.glyph_renderer.clear();
    }

    fn draw_rect_point(&mut self, x: u32, y: u32, color: Rgb) {
        self.glyph_renderer
            .push(QuadInstance::point(self.viewport, x, y, color));
    }

    fn draw_glyph(&mut self, src: GlyphRect, dst: Rect, tint: Rgb) {
        let uv = self.glyph_atlas.uv(src);
        self.glyph_renderer
            .push(QuadInstance::glyph(self.viewport, dst, uv, tint));
    }

    fn present(&mut self) -> Result<FrameOutcome> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring");
                self.reconfigure();
                self.glyph_renderer.clear();
                return Ok(FrameOutcome::Dropped);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Timed out acquiring surface texture, dropping frame");
                self.glyph_renderer.clear();
                return Ok(FrameOutcome::Dropped);
            }
            Err(e) => return Err(e.into()),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.glyph_renderer.upload(&self.device, &self.queue);
        log::trace!("Presenting {} quads", self.glyph_renderer.queued());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clock Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.glyph_renderer.render(&mut render_pass, &self.glyph_atlas);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        self.glyph_renderer.clear();

        Ok(FrameOutcome::Presented)
    }

    fn set_window_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn toggle_fullscreen(&mut self) {
        let next = match self.window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        info!("Fullscreen {}", if next.is_some() { "on" } else { "off" });
        self.window.set_fullscreen(next);
    }
}
