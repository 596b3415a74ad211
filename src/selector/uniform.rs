//! Uniform index selection over a backend set.

use rand::RngCore;

/// Pick an index in `[0, size)` with uniform probability.
///
/// Draws one 32-bit value `r` and scales it: `(r * size) >> 32`. Unlike
/// `r % size`, which skews toward low indices whenever `size` does not
/// divide 2^32, the scaled product is exactly as uniform as the source for
/// every `size`.
///
/// A `size` of zero or one returns 0 without consuming randomness. Zero is
/// the caller's responsibility to screen; handing back 0 keeps this total
/// rather than trusting that screening happened. The returned index must
/// still be bounds-checked where it is used.
pub fn select<R: RngCore>(size: u32, rng: &mut R) -> u32 {
    if size <= 1 {
        return 0;
    }
    let r = rng.next_u32();
    ((u64::from(r) * u64::from(size)) >> 32) as u32
}
