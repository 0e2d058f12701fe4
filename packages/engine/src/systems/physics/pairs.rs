//! Pairwise capsule contact: positional separation plus a normal impulse.
//!
//! Every unordered pair is visited in ascending `(i, j)` order and corrected
//! in place, so later pairs see the already-moved positions of earlier ones
//! (Gauss-Seidel relaxation). A dense pile needs several ticks to fully
//! separate; that is expected.
//!
//! Cost is O(n²) per tick with no broad phase. Fine for tens of capsules,
//! not for thousands.

use crate::systems::particles::{Particle, Vec2};

use super::types::StepReport;

/// Borrow two distinct elements mutably, `i < j`.
#[inline(always)]
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert!(i < j);
    let (head, tail) = particles.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// What happened to a single pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Not touching (or exactly touching)
    Apart,
    /// Centers coincide, no usable normal. Skipped this tick.
    Coincident,
    /// Overlap removed, bodies already separating
    Separated,
    /// Overlap removed and an impulse applied
    Impulse,
}

/// Resolve one pair in place.
#[inline(always)]
pub fn resolve_pair(a: &mut Particle, b: &mut Particle) -> Contact {
    let delta = b.position - a.position;
    let dist = delta.length();
    let min_dist = a.radius + b.radius;

    if dist >= min_dist {
        return Contact::Apart;
    }
    if dist <= 0.0 {
        return Contact::Coincident;
    }

    let normal = delta / dist;

    // Split the overlap evenly, total push closes the gap exactly.
    let push = normal * ((min_dist - dist) / 2.0);
    a.position -= push;
    b.position += push;

    // Equal masses: only the normal components exchange, tangential untouched.
    let dvn = (b.velocity - a.velocity).dot(normal);
    if dvn < 0.0 {
        let impulse: Vec2 = normal * (dvn / 2.0);
        a.velocity += impulse;
        b.velocity -= impulse;
        return Contact::Impulse;
    }

    Contact::Separated
}

/// Resolve every pair once, ascending order.
pub fn resolve_pairs(particles: &mut [Particle], report: &mut StepReport) {
    let n = particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            report.pair_checks += 1;
            let (a, b) = pair_mut(particles, i, j);
            match resolve_pair(a, b) {
                Contact::Apart => {}
                Contact::Coincident => report.coincident += 1,
                Contact::Separated => report.contacts += 1,
                Contact::Impulse => {
                    report.contacts += 1;
                    report.impulses += 1;
                }
            }
        }
    }
}

/// Largest remaining penetration over all pairs (0 when nothing overlaps)
pub fn max_overlap(particles: &[Particle]) -> f32 {
    let mut worst = 0.0f32;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let overlap = a.radius + b.radius - a.position.distance(b.position);
            worst = worst.max(overlap);
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capsule(index: u32, x: f32, y: f32) -> Particle {
        Particle::at_rest(index, Vec2::new(x, y), 20.0)
    }

    #[test]
    fn overlapping_pair_separates_to_exactly_two_radii() {
        let mut particles = [capsule(0, 100.0, 100.0), capsule(1, 110.0, 100.0)];
        let mut report = StepReport::default();

        resolve_pairs(&mut particles, &mut report);

        assert_eq!(particles[0].position.distance(particles[1].position), 40.0);
        assert_eq!(particles[0].position, Vec2::new(85.0, 100.0));
        assert_eq!(particles[1].position, Vec2::new(125.0, 100.0));
        assert_eq!(report.contacts, 1);
        // At rest: no approach, no impulse.
        assert_eq!(report.impulses, 0);
        assert_eq!(particles[0].velocity, Vec2::zero());

        // A second pass finds them exactly touching and leaves them alone.
        let settled = particles;
        let mut report = StepReport::default();
        resolve_pairs(&mut particles, &mut report);
        assert_eq!(particles, settled);
        assert_eq!(report.contacts, 0);
    }

    #[test]
    fn approaching_pair_exchanges_normal_velocity_only() {
        let mut a = capsule(0, 100.0, 100.0);
        let mut b = capsule(1, 130.0, 100.0);
        a.velocity = Vec2::new(4.0, 1.0);
        b.velocity = Vec2::new(-2.0, -3.0);

        assert_eq!(resolve_pair(&mut a, &mut b), Contact::Impulse);

        // dvn = -6 along +x, each side moves by 3.
        assert!((a.velocity.x - 1.0).abs() < 1e-5);
        assert!((b.velocity.x - 1.0).abs() < 1e-5);
        assert_eq!(a.velocity.y, 1.0);
        assert_eq!(b.velocity.y, -3.0);
    }

    #[test]
    fn separating_pair_gets_no_impulse() {
        let mut a = capsule(0, 100.0, 100.0);
        let mut b = capsule(1, 130.0, 100.0);
        a.velocity = Vec2::new(-1.0, 0.0);
        b.velocity = Vec2::new(1.0, 0.0);

        assert_eq!(resolve_pair(&mut a, &mut b), Contact::Separated);
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut particles = [capsule(0, 50.0, 50.0), capsule(1, 50.0, 50.0)];
        particles[0].velocity = Vec2::new(1.0, 0.0);
        let before = particles;
        let mut report = StepReport::default();

        resolve_pairs(&mut particles, &mut report);

        assert_eq!(particles, before);
        assert_eq!(report.coincident, 1);
        assert_eq!(report.contacts, 0);
    }

    #[test]
    fn correction_never_grows_a_touched_overlap() {
        // Diagonal pair: the push must shrink the overlap, here to zero.
        let mut a = capsule(0, 100.0, 100.0);
        let mut b = capsule(1, 112.0, 109.0);
        let before = a.radius + b.radius - a.position.distance(b.position);

        resolve_pair(&mut a, &mut b);

        let after = a.radius + b.radius - a.position.distance(b.position);
        assert!(before > 0.0);
        assert!(after < before);
        assert!(after.abs() < 1e-3);
    }

    #[test]
    fn visits_every_unordered_pair_once() {
        let mut particles: Vec<Particle> =
            (0..5).map(|i| capsule(i, 30.0 + i as f32 * 50.0, 30.0)).collect();
        let mut report = StepReport::default();

        resolve_pairs(&mut particles, &mut report);

        assert_eq!(report.pair_checks, 10);
        assert_eq!(report.contacts, 0);
        assert_eq!(max_overlap(&particles), 0.0);
    }

    #[test]
    fn max_overlap_reports_deepest_pair() {
        let particles = [
            capsule(0, 0.0, 0.0),
            capsule(1, 35.0, 0.0),
            capsule(2, 200.0, 0.0),
            capsule(3, 210.0, 0.0),
        ];
        assert_eq!(max_overlap(&particles), 30.0);
    }
}
