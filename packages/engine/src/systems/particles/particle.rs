use crate::domain::ColorTag;

use super::Vec2;

/// One capsule: a circular body with a cosmetic color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Spawn order, unique within one population
    pub index: u32,
    /// Center, container-local
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: ColorTag,
}

impl Particle {
    pub fn at_rest(index: u32, position: Vec2, radius: f32) -> Self {
        Self {
            index,
            position,
            velocity: Vec2::zero(),
            radius,
            color: ColorTag::for_index(index),
        }
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.velocity.length_squared()
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
