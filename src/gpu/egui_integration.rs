//! Egui integration.
//!
//! Egui is used purely as a 2D painter and text service: the scene is drawn
//! with shapes on the background layer and no widgets are created.

use std::num::NonZeroUsize;
use std::sync::Arc;

use egui::epaint::ImageDelta;
use winit::window::Window;

/// Egui integration state.
///
/// Wraps egui context, winit state, and wgpu renderer.
pub struct EguiIntegration {
    pub ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    textures: PendingTextures,
}

/// Output from egui frame processing.
pub struct EguiFrameOutput {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub pixels_per_point: f32,
}

/// Texture changes produced by egui that the renderer has not applied yet.
///
/// Egui sends the font atlas in full once and only patches it afterwards, so
/// deltas are merged here until the renderer consumes them.
#[derive(Default)]
pub struct PendingTextures {
    delta: egui::TexturesDelta,
}

impl PendingTextures {
    /// Queue a frame's delta behind any that are still pending.
    pub fn push(&mut self, delta: egui::TexturesDelta) {
        self.delta.append(delta);
    }

    /// Take every pending allocation or patch, oldest first.
    pub fn take_uploads(&mut self) -> Vec<(egui::TextureId, ImageDelta)> {
        std::mem::take(&mut self.delta.set)
    }

    /// Take every texture egui no longer references.
    pub fn take_frees(&mut self) -> Vec<egui::TextureId> {
        std::mem::take(&mut self.delta.free)
    }
}

/// Context for painting the scene.
///
/// The paint closure advances the simulation clock, so egui must never run
/// it twice in one frame.
fn scene_context() -> egui::Context {
    let ctx = egui::Context::default();
    ctx.set_visuals(egui::Visuals::dark());
    ctx.options_mut(|o| o.max_passes = NonZeroUsize::MIN);
    ctx
}

impl EguiIntegration {
    /// Create new egui integration.
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = scene_context();

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(
            device,
            output_format,
            None,  // depth format
            1,     // msaa samples
            false, // dithering
        );

        Self {
            ctx,
            state,
            renderer,
            textures: PendingTextures::default(),
        }
    }

    /// Forward a winit event so egui tracks window size and scale factor.
    pub fn on_window_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) {
        let _ = self.state.on_window_event(window, event);
    }

    /// Run one egui pass with `paint` and tessellate the result.
    pub fn run(&mut self, window: &Window, paint: impl FnMut(&egui::Context)) -> EguiFrameOutput {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, paint);

        self.state.handle_platform_output(window, full_output.platform_output);
        self.textures.push(full_output.textures_delta);

        // Tessellate shapes into paint jobs
        let paint_jobs = self.ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        EguiFrameOutput {
            paint_jobs,
            pixels_per_point: full_output.pixels_per_point,
        }
    }

    /// Apply every pending texture allocation and patch.
    ///
    /// Independent of the surface, so it runs even when the frame is skipped.
    pub fn upload_textures(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        for (id, image_delta) in self.textures.take_uploads() {
            self.renderer.update_texture(device, queue, id, &image_delta);
        }
    }

    /// Upload vertex and index buffers. Call before creating the render pass
    /// and submit the returned command buffers ahead of the frame's encoder.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output: &EguiFrameOutput,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) -> Vec<wgpu::CommandBuffer> {
        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &output.paint_jobs,
            screen_descriptor,
        )
    }

    /// Get a reference to the renderer for direct rendering.
    pub fn renderer(&self) -> &egui_wgpu::Renderer {
        &self.renderer
    }

    /// Free textures egui released, once a frame has been presented.
    pub fn cleanup(&mut self) {
        for id in self.textures.take_frees() {
            self.renderer.free_texture(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atlas_delta(pos: Option<[usize; 2]>) -> egui::TexturesDelta {
        let image = egui::ColorImage::new([2, 2], egui::Color32::WHITE);
        let image_delta = match pos {
            Some(pos) => ImageDelta::partial(pos, image, egui::TextureOptions::LINEAR),
            None => ImageDelta::full(image, egui::TextureOptions::LINEAR),
        };

        let mut delta = egui::TexturesDelta::default();
        delta.set.push((egui::TextureId::Managed(0), image_delta));
        delta
    }

    #[test]
    fn test_skipped_frame_keeps_full_atlas() {
        let mut textures = PendingTextures::default();

        // First frame never reaches the renderer
        textures.push(atlas_delta(None));
        textures.push(atlas_delta(Some([0, 0])));

        let uploads = textures.take_uploads();
        assert_eq!(uploads.len(), 2);
        assert!(uploads[0].1.is_whole());
        assert!(!uploads[1].1.is_whole());

        assert!(textures.take_uploads().is_empty());
    }

    #[test]
    fn test_frees_wait_until_taken() {
        let mut textures = PendingTextures::default();
        let id = egui::TextureId::Managed(3);

        let mut delta = egui::TexturesDelta::default();
        delta.free.push(id);
        textures.push(delta);
        textures.push(egui::TexturesDelta::default());

        assert!(textures.take_uploads().is_empty());
        assert_eq!(textures.take_frees(), vec![id]);
        assert!(textures.take_frees().is_empty());
    }

    #[test]
    fn test_scene_context_paints_once_per_frame() {
        let ctx = scene_context();
        let mut passes = 0;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            passes += 1;
            ctx.request_discard("layout changed");
        });

        assert_eq!(passes, 1);
    }
}
