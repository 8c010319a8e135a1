const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

/// xorshift32; a zero state is replaced since it would stay zero forever.
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    if *state == 0 {
        *state = ZERO_SEED_REPLACEMENT;
    }
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in `[0, 1)`.
#[inline]
pub(crate) fn next_unit(state: &mut u32) -> f64 {
    xorshift32(state) as f64 / (u32::MAX as f64 + 1.0)
}
