//! Interactive software-rendering demo.
//!
//! Renders a spinning object into an in-memory framebuffer on the CPU
//! and presents it through a softbuffer surface. Hold Q/W/E to rotate
//! about x/y/z, Escape to quit.
//!
//! Usage: `nebula_demo [scene-name] [texture-path]`
//!
//! Scene names: `color-cube`, `face-color-cube`, `position-color-cube`,
//! `skinned-cube`, `wavy-plane`. Textured scenes use a procedural
//! checkerboard unless a texture path is given.

use std::error::Error;
use std::num::NonZeroU32;
use std::path::Path;
use std::rc::Rc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use nebula_soft_renderer::nebula::buffer::{DepthBuffer, Framebuffer};
use nebula_soft_renderer::{nebula_error, nebula_info};

mod input;
mod scene;
mod texture_io;

use input::InputState;
use scene::Scene;

const WIDTH: u32 = 768;
const HEIGHT: u32 = 768;

/// Fixed timestep, matching the nominal display rate.
const DT: f32 = 1.0 / 60.0;

/// Background color behind the scene geometry.
const CLEAR_COLOR: u32 = 0x0020_2020;

// ===== APPLICATION =====

struct App {
    scene: Box<dyn Scene>,
    input: InputState,
    framebuffer: Framebuffer,
    depth_buffer: DepthBuffer,

    // Window and surface exist only between resumed() and exit
    window: Option<Rc<Window>>,
    _context: Option<softbuffer::Context<Rc<Window>>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
}

impl App {
    fn new(scene: Box<dyn Scene>) -> Self {
        Self {
            scene,
            input: InputState::default(),
            framebuffer: Framebuffer::new(WIDTH, HEIGHT),
            depth_buffer: DepthBuffer::new(WIDTH, HEIGHT),
            window: None,
            _context: None,
            surface: None,
        }
    }

    /// Render one frame into the framebuffer and present it.
    fn render_frame(&mut self) {
        self.scene.update(DT, &self.input);

        self.framebuffer.clear(CLEAR_COLOR);
        self.depth_buffer.clear();
        self.scene.draw(&mut self.framebuffer, &mut self.depth_buffer);

        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        match surface.buffer_mut() {
            Ok(mut buffer) => {
                buffer.copy_from_slice(self.framebuffer.pixels());
                if let Err(error) = buffer.present() {
                    nebula_error!("nebula_demo", "Failed to present frame: {}", error);
                }
            }
            Err(error) => {
                nebula_error!("nebula_demo", "Failed to acquire surface buffer: {}", error);
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Nebula Software Renderer")
            .with_inner_size(PhysicalSize::new(WIDTH, HEIGHT))
            .with_resizable(false);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Rc::new(window),
            Err(error) => {
                nebula_error!("nebula_demo", "Failed to create window: {}", error);
                event_loop.exit();
                return;
            }
        };

        let context = match softbuffer::Context::new(window.clone()) {
            Ok(context) => context,
            Err(error) => {
                nebula_error!("nebula_demo", "Failed to create display context: {}", error);
                event_loop.exit();
                return;
            }
        };

        let mut surface = match softbuffer::Surface::new(&context, window.clone()) {
            Ok(surface) => surface,
            Err(error) => {
                nebula_error!("nebula_demo", "Failed to create surface: {}", error);
                event_loop.exit();
                return;
            }
        };

        // The surface is sized once; the window is not resizable
        let (Some(width), Some(height)) = (NonZeroU32::new(WIDTH), NonZeroU32::new(HEIGHT))
        else {
            return;
        };
        if let Err(error) = surface.resize(width, height) {
            nebula_error!("nebula_demo", "Failed to size surface: {}", error);
            event_loop.exit();
            return;
        }

        window.request_redraw();

        self.window = Some(window);
        self._context = Some(context);
        self.surface = Some(surface);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if self.input.apply(&event) {
                    event_loop.exit();
                }
            }

            WindowEvent::RedrawRequested => self.render_frame(),

            _ => {}
        }
    }
}

// ===== ENTRY POINT =====

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let scene_name = args.next().unwrap_or_else(|| String::from("color-cube"));
    let texture_path = args.next();

    let texture = match &texture_path {
        Some(path) => texture_io::load(Path::new(path))?,
        None => texture_io::checkerboard(256, 256, 32)?,
    };

    let scene = scene::create(&scene_name, texture)?;
    nebula_info!("nebula_demo", "Starting scene '{}'", scene.name());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(scene);
    event_loop.run_app(&mut app)?;

    Ok(())
}
