use glam::Vec3;
use rand::Rng;

/// A decaying positional jitter owned by the camera.
///
/// The effect is a plain value advanced from the camera's own update, so
/// there is no timer that could outlive or race another shake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeEffect {
    intensity: f32,
    duration: f32,
    elapsed: f32,
}

impl ShakeEffect {
    pub fn new(intensity: f32, duration: f32) -> Self {
        Self {
            intensity: intensity.max(0.0),
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Peak per-axis spread at the current elapsed time. Decays linearly
    /// from `intensity` to zero.
    pub fn amplitude(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        self.intensity * (1.0 - self.elapsed / self.duration).max(0.0)
    }

    /// Advance by `dt` and sample an offset, each axis in
    /// `[-amplitude / 2, amplitude / 2]`. Returns `None` once expired.
    pub fn advance<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Option<Vec3> {
        self.elapsed += dt;
        if self.is_finished() {
            return None;
        }
        let a = self.amplitude();
        let mut axis = || (rng.random::<f32>() - 0.5) * a;
        Some(Vec3::new(axis(), axis(), axis()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn amplitude_decays_linearly() {
        let mut s = ShakeEffect::new(2.0, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(s.amplitude(), 2.0);
        s.advance(0.25, &mut rng);
        assert!((s.amplitude() - 1.5).abs() < 1e-6);
        s.advance(0.5, &mut rng);
        assert!((s.amplitude() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn offsets_stay_within_half_amplitude() {
        let mut s = ShakeEffect::new(4.0, 10.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let Some(o) = s.advance(0.01, &mut rng) else {
                panic!("shake ended early");
            };
            let half = s.amplitude() / 2.0;
            assert!(o.abs().max_element() <= half + 1e-6);
        }
    }

    #[test]
    fn expires_after_duration() {
        let mut s = ShakeEffect::new(1.0, 0.5);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(s.advance(0.2, &mut rng).is_some());
        assert!(s.advance(0.2, &mut rng).is_some());
        assert!(s.advance(0.2, &mut rng).is_none());
        assert!(s.is_finished());
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let mut s = ShakeEffect::new(1.0, 0.0);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(s.advance(0.0, &mut rng).is_none());
    }
}
