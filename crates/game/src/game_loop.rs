use glam::Vec3;
use neonrun_camera::FollowCamera;
use neonrun_common::EntityId;
use neonrun_input::{InputEvent, InputState};
use neonrun_kernel::{Clock, GameConfig, KernelError, World, WorldEvent};
use neonrun_render::{RenderView, Renderer};

use crate::hud::Hud;

/// Single-threaded frame loop.
///
/// Each [`tick`](GameLoop::tick) runs, in order: clock, input sampling,
/// player integration, camera target, camera smoothing, enemy updates,
/// render, HUD refresh. The world event log is drained at the end of every
/// tick; the drained batch stays readable through
/// [`frame_events`](GameLoop::frame_events) until the next tick.
pub struct GameLoop<R: Renderer> {
    world: World,
    camera: FollowCamera,
    input: InputState,
    clock: Clock,
    renderer: R,
    hud: Hud,
    camera_offset: Vec3,
    frame_events: Vec<WorldEvent>,
    running: bool,
}

impl<R: Renderer> GameLoop<R> {
    /// Build the world from `config` and place the camera at rest behind the
    /// player. `start_ms` is the timestamp the first tick is measured from.
    pub fn new(config: &GameConfig, renderer: R, start_ms: f64) -> Result<Self, KernelError> {
        let world = World::from_config(config)?;
        let player_pos = world.player().position;
        let camera_offset = config.camera.offset;

        let mut camera =
            FollowCamera::new(player_pos + camera_offset, player_pos).with_seed(config.camera.shake_seed);
        camera.set_smooth_factor(config.camera.smooth_factor);
        camera.fov = config.camera.fov_degrees.to_radians();

        tracing::info!(
            "game loop ready: {} enemies, player at ({:.1}, {:.1}, {:.1})",
            world.active_enemy_count(),
            player_pos.x,
            player_pos.y,
            player_pos.z
        );

        Ok(Self {
            world,
            camera,
            input: InputState::default(),
            clock: Clock::new(start_ms),
            renderer,
            hud: Hud::new(),
            camera_offset,
            frame_events: Vec::new(),
            running: true,
        })
    }

    /// Run one frame at timestamp `now_ms`. Returns the renderer output, or
    /// `None` once the loop has been stopped.
    pub fn tick(&mut self, now_ms: f64) -> Option<R::Output> {
        if !self.running {
            return None;
        }
        let _span = tracing::debug_span!("tick", tick = self.world.tick() + 1).entered();

        let dt = self.clock.tick(now_ms);

        let held = self.input.held_directions();
        let player = self.world.player_mut();
        player.integrate(&held, dt);
        let player_pos = player.position;

        self.camera.set_target_position(player_pos + self.camera_offset);
        self.camera.set_target_look_at(player_pos);
        self.camera.update(dt);

        self.world.step_enemies(dt, Some(player_pos));

        let view = RenderView::from_camera(&self.camera);
        let output = self.renderer.render(&self.world, &view);

        self.hud.refresh(self.clock.fps());
        self.frame_events = self.world.drain_events();
        Some(output)
    }

    /// Feed a platform event into the input state. Resize events also
    /// resize the camera and renderer.
    pub fn handle_input(&mut self, event: &InputEvent) {
        self.input.process_event(event);
        if let InputEvent::Resize { width, height } = event {
            self.resize(*width, *height);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
        self.renderer.resize(width, height);
    }

    /// Prevent any further ticks. A tick already in progress is unaffected.
    pub fn stop(&mut self) {
        if self.running {
            tracing::info!("game loop stopped at tick {}", self.world.tick());
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn damage_enemy(&mut self, id: EntityId, amount: u32) -> Result<u32, KernelError> {
        self.world.damage_enemy(id, amount)
    }

    pub fn shake_camera(&mut self, intensity: f32, duration: f32) {
        self.camera.shake(intensity, duration);
    }

    /// Events recorded during the last tick, including commands issued
    /// since the tick before it.
    pub fn frame_events(&self) -> &[WorldEvent] {
        &self.frame_events
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FollowCamera {
        &mut self.camera
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }
}
