use std::fmt::Write as _;

use glam::Vec3;
use neonrun_camera::FollowCamera;
use neonrun_kernel::World;

/// Camera/view configuration handed to a renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Rendered camera position, shake included.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 20.0, 80.0),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl RenderView {
    pub fn from_camera(camera: &FollowCamera) -> Self {
        Self {
            eye: camera.eye(),
            target: camera.look_at(),
            fov_degrees: camera.fov.to_degrees(),
            aspect: camera.aspect,
        }
    }
}

/// Renderer-agnostic interface to the external scene graph.
///
/// The loop calls [`render`](Renderer::render) once per tick with read-only
/// access to the world and the current view.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&mut self, world: &World, view: &RenderView) -> Self::Output;

    /// Resize the render surface.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Text renderer producing a human-readable frame description.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    size: (u32, u32),
    frames: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, world: &World, view: &RenderView) -> String {
        self.frames += 1;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Frame {} (tick={}) ===",
            self.frames,
            world.tick()
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z,
            view.fov_degrees
        );

        let player = world.player();
        let p = player.position;
        let _ = writeln!(
            out,
            "Player: pos=({:.2}, {:.2}, {:.2}) health={}/{}",
            p.x,
            p.y,
            p.z,
            player.health.current(),
            player.health.max()
        );

        let _ = writeln!(out, "Enemies: {}", world.active_enemy_count());
        for enemy in world.active_enemies() {
            let e = enemy.position();
            let _ = writeln!(
                out,
                "  [{}] {:<6} pos=({:.2}, {:.2}, {:.2}) health={}",
                enemy.id().short(),
                enemy.behavior().to_string(),
                e.x,
                e.y,
                e.z,
                enemy.health().current()
            );
        }
        out
    }

    fn resize(&mut self, width: u32, height: u32) {
        tracing::debug!("debug renderer resized to {width}x{height}");
        self.size = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neonrun_kernel::{EnemyConfig, GameConfig, PlayerConfig, PlayerState};

    #[test]
    fn renders_player_without_enemies() {
        let world = World::new(
            PlayerState::new(&PlayerConfig::default()),
            EnemyConfig::default(),
        );
        let mut renderer = DebugTextRenderer::new();
        let output = renderer.render(&world, &RenderView::default());

        assert!(output.contains("tick=0"));
        assert!(output.contains("Player: pos=(0.00, 5.00, 50.00)"));
        assert!(output.contains("Enemies: 0"));
        assert_eq!(renderer.frames(), 1);
    }

    #[test]
    fn renders_active_enemies_only() {
        let mut world = World::from_config(&GameConfig::default()).unwrap();
        let first = world.active_enemies().next().map(|e| e.id()).unwrap();
        world.damage_enemy(first, 1000).unwrap();

        let mut renderer = DebugTextRenderer::new();
        let output = renderer.render(&world, &RenderView::default());
        assert!(output.contains("Enemies: 2"));
        assert!(!output.contains(&first.short()));
        assert!(output.contains("patrol"));
    }

    #[test]
    fn view_from_camera_uses_rendered_eye() {
        let cam = FollowCamera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        let view = RenderView::from_camera(&cam);
        assert_eq!(view.eye, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(view.target, Vec3::ZERO);
        assert!((view.fov_degrees - 75.0).abs() < 1e-3);
    }

    #[test]
    fn resize_records_size() {
        let mut renderer = DebugTextRenderer::new();
        renderer.resize(1024, 768);
        assert_eq!(renderer.size(), (1024, 768));
    }
}
