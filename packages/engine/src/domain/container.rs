use serde::{Deserialize, Serialize};

/// Width of the reference gacha box
pub const BOX_WIDTH: f32 = 280.0;
/// Height of the reference gacha box
pub const BOX_HEIGHT: f32 = 320.0;

/// Axis-aligned closed box the capsules live in (origin top-left, +y down).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f32,
    pub height: f32,
}

impl Container {
    pub fn new(width: f32, height: f32) -> Result<Self, String> {
        if !width.is_finite() || !height.is_finite() {
            return Err(format!("container size must be finite, got {}x{}", width, height));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(format!("container size must be positive, got {}x{}", width, height));
        }
        Ok(Self { width, height })
    }

    /// Can a body of `radius` sit inside without touching two opposite walls at once?
    pub fn fits(&self, radius: f32) -> bool {
        self.width >= radius * 2.0 && self.height >= radius * 2.0
    }

    /// Lowest and highest legal center coordinate on X for a body of `radius`
    #[inline]
    pub fn x_range(&self, radius: f32) -> (f32, f32) {
        (radius, self.width - radius)
    }

    #[inline]
    pub fn y_range(&self, radius: f32) -> (f32, f32) {
        (radius, self.height - radius)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self { width: BOX_WIDTH, height: BOX_HEIGHT }
    }
}
