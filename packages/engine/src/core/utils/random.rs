/// Random number generator (xorshift32)
///
/// State must be non-zero; zero is a fixed point of the shift sequence.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Seed fix-up: a zero seed would lock the generator at zero forever.
#[inline]
pub fn seed_state(seed: u32) -> u32 {
    if seed == 0 { 0x9E37_79B9 } else { seed }
}

/// Uniform float in [0, 1), from the top 24 bits
#[inline]
pub fn unit_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}
