/// On-screen counters refreshed at the end of every tick.
#[derive(Debug, Clone)]
pub struct Hud {
    fps: u32,
    text: String,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            fps: 0,
            text: "FPS: 0".into(),
        }
    }

    /// Update the FPS readout. Returns true when the displayed value changed.
    pub fn refresh(&mut self, fps: f32) -> bool {
        let rounded = fps.round().max(0.0) as u32;
        if rounded == self.fps {
            return false;
        }
        self.fps = rounded;
        self.text = format!("FPS: {rounded}");
        tracing::trace!("{}", self.text);
        true
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
