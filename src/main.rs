use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use sphere_match::camera::Camera;
use sphere_match::cli::{Cli, DemoKind};
use sphere_match::config::{self, Settings};
use sphere_match::core::{Clock, PointerState};
use sphere_match::fog::FogSettings;
use sphere_match::game::{MatchBoard, MatchGame};
use sphere_match::picking::pick_sphere;
use sphere_match::renderer::Renderer;
use sphere_match::scene::{Scene, Spawner};
use sphere_match::scenes;
use sphere_match::types::SceneUniform;
use sphere_match::ui;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    cli: Cli,
    settings: Settings,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    scene: Scene,
    game: MatchGame<Scene>,
    spawner: Option<Spawner>,
    fog: Option<FogSettings>,
    background: [f32; 3],
    pointer: PointerState,
    clock: Clock,
    frame_count: u32,
    fps: f32,
    fps_timer: f32,
}

impl App {
    fn new(cli: Cli, settings: Settings) -> Self {
        let (scene, spawner, fog, background, start) = match cli.demo {
            DemoKind::Match => {
                let (scene, spawner) = scenes::create_match_field(&settings);
                (
                    scene,
                    Some(spawner),
                    None,
                    scenes::MATCH_BACKGROUND,
                    scenes::MATCH_CAMERA_START,
                )
            }
            DemoKind::Fog => {
                let fog = scenes::default_fog();
                (
                    scenes::create_fog_garden(),
                    None,
                    Some(fog),
                    fog.color(),
                    scenes::FOG_CAMERA_START,
                )
            }
        };

        let (position, yaw, pitch) = start;
        let game = MatchGame::with_highlight_opacity(settings.highlight_opacity);

        Self {
            cli,
            settings,
            window: None,
            renderer: None,
            camera: Camera::new(position, yaw, pitch),
            scene,
            game,
            spawner,
            fog,
            background,
            pointer: PointerState::new(),
            clock: Clock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_timer += delta;

        if self.fps_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_timer;
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        self.update_fps(delta);
        self.camera.update();

        let Some(window) = self.window.clone() else {
            return;
        };
        let size = window.inner_size();
        let dims = (size.width.max(1), size.height.max(1));
        let aspect = dims.0 as f32 / dims.1 as f32;

        match self.cli.demo {
            DemoKind::Match => {
                // Clicks queued since the last frame, strictly before
                // evaluation.
                for ndc in self.pointer.take_clicks(dims) {
                    let ray = self.camera.screen_ray(ndc, aspect);
                    self.game.on_pick(pick_sphere(&self.scene, &ray));
                }

                self.game.evaluate(&mut self.scene);

                // Hover highlight runs after evaluate, so slot highlights
                // survive and the pointer target gets the same look.
                if let Some(ndc) = self.pointer.ndc(dims) {
                    let ray = self.camera.screen_ray(ndc, aspect);
                    if let Some(id) = pick_sphere(&self.scene, &ray) {
                        self.scene.set_opacity(id, self.settings.highlight_opacity);
                    }
                }

                if let Some(spawner) = &mut self.spawner {
                    spawner.update(delta, &mut self.scene);
                }
            }
            DemoKind::Fog => {
                // No picking in the showcase; drop stray clicks.
                self.pointer.take_clicks(dims);
                if let Some(fog) = &self.fog {
                    self.background = fog.color();
                }
            }
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let camera_uniform = self.camera.to_uniform();
        let scene_uniform = SceneUniform::new(&self.scene, self.background, self.fog.as_ref());

        let no_ui = self.cli.no_ui;
        let demo = self.cli.demo;
        let score = self.game.score();
        let fps = self.fps;
        let camera = &mut self.camera;
        let fog = &mut self.fog;

        let result = renderer.render(&window, camera_uniform, scene_uniform, &self.scene, |ctx| {
            if no_ui {
                return;
            }
            match demo {
                DemoKind::Match => ui::score_overlay(ctx, score, fps),
                DemoKind::Fog => {
                    if let Some(fog) = fog.as_mut() {
                        ui::showcase_panel(ctx, camera, fog);
                    }
                }
            }
        });

        if let Err(e) = result {
            error!("render error: {}", e);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let title = match self.cli.demo {
            DemoKind::Match => "Sphere Match",
            DemoKind::Fog => "Fog Showcase",
        };

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.settings.window_width,
                    self.settings.window_height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let capacity = self.settings.sphere_count.max(self.scene.len());
        let renderer = match pollster::block_on(Renderer::new(window.clone(), capacity)) {
            Ok(r) => r,
            Err(e) => {
                error!("failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // egui gets first refusal.
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        self.pointer.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.camera.process_keyboard(&event),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = config::load(cli.config.as_deref())?;
    info!("starting {:?} demo", cli.demo);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, settings);
    event_loop.run_app(&mut app)?;

    Ok(())
}
