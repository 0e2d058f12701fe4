//! Renderer seam. The simulation produces plain data; whoever paints it
//! (DOM, canvas, a test recorder) implements `Renderer` and is handed a
//! read-only view of every capsule between ticks.

use crate::domain::ColorTag;
use crate::systems::particles::Particle;

/// What a renderer is allowed to see of a capsule
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleView {
    pub index: u32,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: ColorTag,
}

impl ParticleView {
    /// Left edge of the sprite box (sprites are positioned by their corner)
    #[inline]
    pub fn left(&self) -> f32 {
        self.x - self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.radius
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}

impl From<&Particle> for ParticleView {
    fn from(p: &Particle) -> Self {
        Self {
            index: p.index,
            x: p.position.x,
            y: p.position.y,
            radius: p.radius,
            color: p.color,
        }
    }
}

pub trait Renderer {
    fn begin_frame(&mut self, _count: usize) {}
    fn draw(&mut self, capsule: &ParticleView);
    fn end_frame(&mut self) {}
}

/// Keeps the last frame it was given. Handy for headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: u64,
    pub last_frame: Vec<ParticleView>,
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, count: usize) {
        self.last_frame.clear();
        self.last_frame.reserve(count);
    }

    fn draw(&mut self, capsule: &ParticleView) {
        self.last_frame.push(*capsule);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}
