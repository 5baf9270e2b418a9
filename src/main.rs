//! Rule 110 Scroll entry point
//!
//! Creates the window and GPU surface, maps keyboard input onto the plain
//! config/board/clock mutators, and drives the redraw-per-frame loop.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use rule110_scroll::consts::{COLS, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, ROWS};
use rule110_scroll::renderer::RenderState;
use rule110_scroll::{FrameRenderer, RenderConfig, ScrollingBoard, SimulationClock};

struct App {
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    board: ScrollingBoard,
    clock: SimulationClock,
    frame: FrameRenderer,
    config: RenderConfig,
    last_frame: Instant,
}

impl App {
    fn new(config: RenderConfig) -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        log::info!("Seeding board with {seed}");

        Self {
            window: None,
            render_state: None,
            board: ScrollingBoard::new(COLS, ROWS, seed, config.noise_probability),
            clock: SimulationClock::new(),
            frame: FrameRenderer::new(),
            config,
            last_frame: Instant::now(),
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: &Key) {
        match key.as_ref() {
            Key::Named(NamedKey::Space) => {
                self.config.toggle_pause();
                log::info!("{}", if self.config.paused { "Paused" } else { "Resumed" });
            }
            Key::Character("r" | "R") => {
                self.board.reset();
                log::info!("Board reset");
            }
            Key::Character("g" | "G") => self.config.toggle_grid(),
            Key::Named(NamedKey::ArrowUp) => {
                self.config.speed_up();
                log::info!("Generation interval: {:.2}s", self.config.generation_interval);
            }
            Key::Named(NamedKey::ArrowDown) => {
                self.config.slow_down();
                log::info!("Generation interval: {:.2}s", self.config.generation_interval);
            }
            Key::Named(NamedKey::ArrowRight) => {
                self.clock.step(&mut self.board, &self.config);
            }
            Key::Character("q" | "Q") | Key::Named(NamedKey::Escape) => {
                self.config.save();
                event_loop.exit();
            }
            _ => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.clock.tick(delta, &mut self.board, &self.config);

        let Some(render_state) = &mut self.render_state else {
            return;
        };
        let (width, height) = render_state.size;
        let vertices = self
            .frame
            .render(&self.board, &self.config, width as f32, height as f32);

        match render_state.render(vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => {
                render_state.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(err) => log::warn!("Render error: {err:?}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Rule 110 Cellular Automaton")
            .with_inner_size(LogicalSize::new(
                DEFAULT_SCREEN_WIDTH,
                DEFAULT_SCREEN_HEIGHT,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );
        let size = window.inner_size();

        let render_state = pollster::block_on(async {
            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
            let surface = instance
                .create_surface(window.clone())
                .expect("Failed to create surface");
            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                })
                .await
                .expect("Failed to get adapter");
            log::info!("Using adapter: {:?}", adapter.get_info().name);

            RenderState::new(surface, &adapter, size.width.max(1), size.height.max(1)).await
        });

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.config.save();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        repeat: false,
                        logical_key,
                        ..
                    },
                ..
            } => {
                self.handle_key(event_loop, &logical_key);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    env_logger::init();

    let config = RenderConfig::load();

    log::info!("Controls:");
    log::info!("  SPACE     - pause/resume");
    log::info!("  R         - reset board");
    log::info!("  G         - toggle grid");
    log::info!("  UP/DOWN   - speed control");
    log::info!("  RIGHT     - step one generation (while paused)");
    log::info!("  Q/ESC     - quit");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .expect("Event loop terminated abnormally");
}
