use glam::{Mat4, Vec3};
use neonrun_common::approach;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::shake::ShakeEffect;

/// Follow camera with smoothed position and look-at.
///
/// Each [`update`](FollowCamera::update) moves the base position and look-at
/// a fixed fraction of the remaining distance toward their targets. The
/// fraction is applied per tick, not per second, so convergence speed
/// follows the tick rate.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    position: Vec3,
    look_at: Vec3,
    target_position: Vec3,
    target_look_at: Vec3,
    smooth_factor: f32,
    shake: Option<ShakeEffect>,
    shake_offset: Vec3,
    rng: StdRng,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 20.0, 80.0), Vec3::ZERO)
    }
}

impl FollowCamera {
    pub const DEFAULT_SMOOTH_FACTOR: f32 = 0.05;

    /// Camera resting at `position` looking at `look_at`, with targets equal
    /// to the current state.
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            look_at,
            target_position: position,
            target_look_at: look_at,
            smooth_factor: Self::DEFAULT_SMOOTH_FACTOR,
            shake: None,
            shake_offset: Vec3::ZERO,
            rng: StdRng::seed_from_u64(0),
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Reseed the shake RNG for reproducible jitter.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn set_target_position(&mut self, p: Vec3) {
        self.target_position = p;
    }

    pub fn set_target_look_at(&mut self, p: Vec3) {
        self.target_look_at = p;
    }

    pub fn set_smooth_factor(&mut self, f: f32) {
        self.smooth_factor = f.clamp(0.0, 1.0);
    }

    pub fn smooth_factor(&self) -> f32 {
        self.smooth_factor
    }

    /// Aim the targets at a point on a horizontal circle around `center`.
    pub fn orbit_around(&mut self, center: Vec3, radius: f32, angle: f32, height: f32) {
        self.target_position = center
            + Vec3::new(angle.cos() * radius, height, angle.sin() * radius);
        self.target_look_at = center;
    }

    /// Start a shake, replacing any shake already in progress.
    pub fn shake(&mut self, intensity: f32, duration: f32) {
        if self.shake.is_some() {
            tracing::debug!("replacing active camera shake");
        }
        self.shake = Some(ShakeEffect::new(intensity, duration));
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    /// Smooth toward the targets, then advance the shake by `dt`.
    pub fn update(&mut self, dt: f32) {
        self.position = approach(self.position, self.target_position, self.smooth_factor);
        self.look_at = approach(self.look_at, self.target_look_at, self.smooth_factor);

        self.shake_offset = match self.shake.as_mut() {
            Some(effect) => match effect.advance(dt, &mut self.rng) {
                Some(offset) => offset,
                None => {
                    self.shake = None;
                    Vec3::ZERO
                }
            },
            None => Vec3::ZERO,
        };
    }

    /// Smoothed position without shake.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Rendered eye: base position plus the current shake offset.
    pub fn eye(&self) -> Vec3 {
        self.position + self.shake_offset
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn target_look_at(&self) -> Vec3 {
        self.target_look_at
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.look_at, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_is_idempotent_at_fixed_point() {
        let p = Vec3::new(3.3, 17.1, -42.7);
        let l = Vec3::new(0.1, 0.2, 0.3);
        let mut cam = FollowCamera::new(p, l);
        for _ in 0..100 {
            cam.update(0.016);
        }
        assert_eq!(cam.position(), p);
        assert_eq!(cam.look_at(), l);
        assert_eq!(cam.eye(), p);
    }

    #[test]
    fn update_covers_smooth_fraction_per_tick() {
        let mut cam = FollowCamera::new(Vec3::ZERO, Vec3::ZERO);
        cam.set_target_position(Vec3::new(100.0, 0.0, 0.0));
        cam.set_target_look_at(Vec3::new(0.0, 0.0, -10.0));
        cam.update(0.016);
        assert!((cam.position().x - 5.0).abs() < 1e-5);
        assert!((cam.look_at().z + 0.5).abs() < 1e-6);
    }

    #[test]
    fn smoothing_ignores_dt() {
        let mut a = FollowCamera::new(Vec3::ZERO, Vec3::ZERO);
        let mut b = a.clone();
        a.set_target_position(Vec3::X * 10.0);
        b.set_target_position(Vec3::X * 10.0);
        a.update(0.001);
        b.update(0.1);
        assert_eq!(a.position(), b.position());
    }

    #[test]
    fn converges_exponentially() {
        let mut cam = FollowCamera::new(Vec3::ZERO, Vec3::ZERO);
        cam.set_target_position(Vec3::new(0.0, 0.0, 100.0));
        for _ in 0..200 {
            cam.update(0.016);
        }
        // 0.95^200 of the gap remains
        let remaining = 100.0 - cam.position().z;
        assert!(remaining > 0.0 && remaining < 0.01, "remaining {remaining}");
    }

    #[test]
    fn smooth_factor_is_clamped() {
        let mut cam = FollowCamera::default();
        cam.set_smooth_factor(2.5);
        assert_eq!(cam.smooth_factor(), 1.0);
        cam.set_smooth_factor(-1.0);
        assert_eq!(cam.smooth_factor(), 0.0);
    }

    #[test]
    fn full_smoothing_snaps_to_target() {
        let mut cam = FollowCamera::default();
        cam.set_smooth_factor(1.0);
        cam.set_target_position(Vec3::new(1.0, 2.0, 3.0));
        cam.update(0.016);
        assert_eq!(cam.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn orbit_places_target_on_circle() {
        let mut cam = FollowCamera::default();
        let center = Vec3::new(5.0, 0.0, 5.0);
        cam.orbit_around(center, 10.0, 0.0, 4.0);
        assert!((cam.target_position() - Vec3::new(15.0, 4.0, 5.0)).length() < 1e-5);
        assert_eq!(cam.target_look_at(), center);

        cam.orbit_around(center, 10.0, std::f32::consts::FRAC_PI_2, 4.0);
        assert!((cam.target_position() - Vec3::new(5.0, 4.0, 15.0)).length() < 1e-4);
    }

    #[test]
    fn shake_restores_exact_position_after_duration() {
        let p = Vec3::new(0.0, 20.0, 80.0);
        let mut cam = FollowCamera::new(p, Vec3::ZERO).with_seed(11);
        cam.shake(2.0, 0.5);

        let mut saw_offset = false;
        for _ in 0..40 {
            cam.update(1.0 / 60.0);
            if cam.eye() != p {
                saw_offset = true;
            }
            // the base is never perturbed
            assert_eq!(cam.position(), p);
        }
        assert!(saw_offset);
        assert!(!cam.is_shaking());
        assert_eq!(cam.eye(), p);
    }

    #[test]
    fn shake_does_not_disturb_smoothing() {
        let mut plain = FollowCamera::new(Vec3::ZERO, Vec3::ZERO);
        let mut shaken = plain.clone();
        for cam in [&mut plain, &mut shaken] {
            cam.set_target_position(Vec3::new(10.0, 10.0, 10.0));
        }
        shaken.shake(5.0, 1.0);
        for _ in 0..30 {
            plain.update(0.016);
            shaken.update(0.016);
        }
        assert_eq!(plain.position(), shaken.position());
        assert_eq!(plain.look_at(), shaken.look_at());
    }

    #[test]
    fn second_shake_replaces_first() {
        let p = Vec3::ONE;
        let mut cam = FollowCamera::new(p, Vec3::ZERO);
        cam.shake(1.0, 10.0);
        cam.update(0.1);
        cam.shake(1.0, 0.2);
        cam.update(0.1);
        assert!(cam.is_shaking());
        cam.update(0.15);
        // the long first shake is gone, the short one has expired
        assert!(!cam.is_shaking());
        assert_eq!(cam.eye(), p);
    }

    #[test]
    fn aspect_follows_resize() {
        let mut cam = FollowCamera::default();
        cam.set_aspect(1920, 1080);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
        assert!(!cam.view_projection().col(0).x.is_nan());
    }
}
