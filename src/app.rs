//! Windowed runner.
//!
//! Binds the [`FrameDriver`] to a winit window. Each `RedrawRequested` is one
//! loop iteration: pace, draw through egui, present, then drain the input that
//! queued up since the previous frame.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::driver::{FrameDriver, LoopControl};
use crate::error::SimulationError;
use crate::gpu::{EguiCanvas, EguiIntegration, GpuState};
use crate::input::InputQueue;
use crate::oscillator::Oscillator;
use crate::scene::WINDOW_TITLE;
use crate::time::FramePacer;

/// Window plus everything needed to draw into it.
struct Graphics {
    window: Arc<Window>,
    gpu: GpuState,
    egui: EguiIntegration,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, width: f32, height: f32) -> Result<Self, SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = pollster::block_on(GpuState::new(window.clone()))?;
        let egui = EguiIntegration::new(gpu.device(), gpu.format(), &window);

        Ok(Self { window, gpu, egui })
    }
}

struct App {
    graphics: Option<Graphics>,
    driver: FrameDriver,
    input: InputQueue,
    pacer: FramePacer,
    error: Option<SimulationError>,
}

impl App {
    fn new(driver: FrameDriver) -> Self {
        let pacer = FramePacer::new(driver.scene().frame_rate);
        Self {
            graphics: None,
            driver,
            input: InputQueue::new(),
            pacer,
            error: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = &mut self.graphics else {
            return;
        };

        self.pacer.tick();

        let font_size = self.driver.scene().font_size;
        let driver = &mut self.driver;
        let output = graphics.egui.run(&graphics.window, |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let mut canvas = EguiCanvas::new(painter, font_size);
            driver.render_frame(&mut canvas);
        });

        match graphics.gpu.render(&mut graphics.egui, &output) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => graphics.gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => tracing::warn!(error = ?e, "frame skipped"),
        }

        match self.driver.handle_events(self.input.drain()) {
            LoopControl::Exit => event_loop.exit(),
            LoopControl::Continue => graphics.window.request_redraw(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        let scene = self.driver.scene();
        match Graphics::new(event_loop, scene.width, scene.height) {
            Ok(graphics) => {
                graphics.window.request_redraw();
                self.graphics = Some(graphics);
            }
            Err(e) => {
                tracing::error!(error = %e, "startup failed");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let scale_factor = match &mut self.graphics {
            Some(graphics) => {
                graphics.egui.on_window_event(&graphics.window, &event);
                graphics.window.scale_factor()
            }
            None => 1.0,
        };

        match event {
            WindowEvent::Resized(physical_size) => {
                if let Some(graphics) = &mut self.graphics {
                    graphics.gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => self.input.handle_event(&other, scale_factor),
        }
    }
}

/// Open the window and run until it is closed.
pub fn run() -> Result<(), SimulationError> {
    let driver = FrameDriver::with_defaults()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    tracing::info!(
        pendulum_period = driver.pendulum().period(),
        spring_period = driver.spring().period(),
        "starting"
    );

    let mut app = App::new(driver);
    event_loop.run_app(&mut app)?;

    tracing::info!(frames = app.pacer.frame(), fps = app.pacer.fps(), "stopped");

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
