use super::renderer::{ParticleView, Renderer};
use super::SimulationCore;

/// f32 slots per capsule in the render buffer: x, y, radius, color tag
pub const RENDER_STRIDE: usize = 4;

/// Rewrite the packed render buffer from the store.
///
/// The buffer is reused between frames; it only reallocates when the
/// population grows, so the pointer handed to JS stays valid across ticks
/// until the next respawn.
pub(super) fn refresh(sim: &mut SimulationCore) {
    let particles = sim.store.get();
    let needed = particles.len() * RENDER_STRIDE;
    sim.render_buffer.resize(needed, 0.0);

    for (slot, p) in sim.render_buffer.chunks_exact_mut(RENDER_STRIDE).zip(particles) {
        slot[0] = p.position.x;
        slot[1] = p.position.y;
        slot[2] = p.radius;
        slot[3] = p.color.0 as f32;
    }
}

pub(super) fn render<R: Renderer + ?Sized>(sim: &SimulationCore, renderer: &mut R) {
    let particles = sim.store.get();
    renderer.begin_frame(particles.len());
    for p in particles {
        renderer.draw(&ParticleView::from(p));
    }
    renderer.end_frame();
}

/// Copy of the capsule centers as `[x0, y0, x1, y1, ...]`
pub(super) fn positions(sim: &SimulationCore) -> Vec<f32> {
    let mut out = Vec::with_capacity(sim.store.len() * 2);
    for p in sim.store.get() {
        out.push(p.position.x);
        out.push(p.position.y);
    }
    out
}
