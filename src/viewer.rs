//! Windowed reference host for a [`ParticleField`].
//!
//! Stands in for the browser canvas: owns the window, the wgpu canvas and
//! one field instance, forwards resizes as authoritative, and requests
//! exactly one redraw per completed frame so the frame chain can never
//! queue a backlog. Tearing the window down simply stops requesting frames;
//! there is nothing else to cancel.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::FieldConfig;
use crate::error::ViewerError;
use crate::field::ParticleField;
use crate::gpu::{CanvasRenderer, GpuContext};
use crate::time::Time;

/// A windowed particle-field viewer builder.
///
/// Use method chaining to configure, then call `.run()` to start:
///
/// ```ignore
/// use driftweb::{FieldConfig, Viewer};
///
/// Viewer::new()
///     .with_config(FieldConfig::new().with_max_count(80))
///     .with_colors("#8b5cf6", "#06b6d4")
///     .run()?;
/// ```
pub struct Viewer {
    config: FieldConfig,
    title: String,
    accent: String,
    accent2: String,
    seed: Option<u64>,
}

impl Viewer {
    /// Create a viewer with default settings.
    pub fn new() -> Self {
        Self {
            config: FieldConfig::new(),
            title: "driftweb".to_string(),
            accent: "#8b5cf6".to_string(),
            accent2: "#06b6d4".to_string(),
            seed: None,
        }
    }

    /// Set the field configuration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the two accent colors as CSS hex tokens. Malformed tokens fall
    /// back to the stock purple/cyan pair.
    pub fn with_colors(mut self, accent: impl Into<String>, accent2: impl Into<String>) -> Self {
        self.accent = accent.into();
        self.accent2 = accent2.into();
        self
    }

    /// Fix the RNG seed for a reproducible particle layout.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Open the window and animate. Blocks until the window is closed.
    ///
    /// Fails fast (rather than showing a dead window) when the event loop,
    /// window, or GPU surface cannot be created.
    pub fn run(self) -> Result<(), ViewerError> {
        let mut field = match self.seed {
            Some(seed) => ParticleField::with_seed(self.config, seed),
            None => ParticleField::new(self.config),
        };
        field.on_theme_change(&self.accent, &self.accent2);

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(field, self.title);
        event_loop.run_app(&mut app)?;

        match app.init_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    canvas: CanvasRenderer,
    field: ParticleField,
    time: Time,
    title: String,
    init_error: Option<ViewerError>,
}

impl App {
    fn new(field: ParticleField, title: String) -> Self {
        Self {
            window: None,
            gpu: None,
            canvas: CanvasRenderer::new(),
            field,
            time: Time::new(),
            title,
            init_error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuContext::new(window.clone())) {
            Ok(gpu) => {
                let size = window.inner_size();
                self.field
                    .initialize(size.width as f32, size.height as f32);
                self.gpu = Some(gpu);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                self.field
                    .on_viewport_resize(physical_size.width as f32, physical_size.height as f32);
            }
            WindowEvent::RedrawRequested => {
                self.field.advance_frame(&mut self.canvas);

                if let Some(gpu) = &mut self.gpu {
                    match gpu.render(&self.canvas) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                let fps_refreshed = self.time.update();
                if let Some(window) = &self.window {
                    if fps_refreshed {
                        window.set_title(&format!(
                            "{} | {} particles, {:.0} fps",
                            self.title,
                            self.field.particle_count(),
                            self.time.fps()
                        ));
                    }
                    // next frame only once this one is fully emitted
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
