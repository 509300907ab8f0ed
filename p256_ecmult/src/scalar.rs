//! Scalars laid out for windowed scalar multiplication.
use num_bigint::{BigInt, BigUint, Sign};

/// Width of the little-endian buffer. One byte more than 256 bits so every window, including
/// the ones straddling bit 255, can be read without bounds checks on data-dependent offsets.
pub const SCALAR_BYTES: usize = 33;

/// A scalar as a fixed 33-byte little-endian buffer.
///
/// Scalars wider than 256 bits or negative are first reduced into `[0, n)` where `n` is the group
/// order. Anything else is used as given, so a value in `[n, 2²⁵⁶)` keeps its bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowedScalar([u8; SCALAR_BYTES]);

impl WindowedScalar {
    /// Lays out `k`, reducing it modulo `order` when it doesn't fit in 256 unsigned bits.
    pub fn new(k: &BigInt, order: &BigUint) -> Self {
        let reduced;
        let magnitude = if k.bits() > 256 || k.sign() == Sign::Minus {
            let n = BigInt::from(order.clone());
            reduced = (((k % &n) + &n) % &n).into_parts().1;
            &reduced
        } else {
            k.magnitude()
        };

        let mut bytes = [0u8; SCALAR_BYTES];
        for (dst, src) in bytes.iter_mut().zip(magnitude.to_bytes_le()) {
            *dst = src;
        }
        WindowedScalar(bytes)
    }

    /// The little-endian bytes. Byte 32 is always zero.
    pub fn as_bytes(&self) -> &[u8; SCALAR_BYTES] {
        &self.0
    }

    /// Reads the `W + 1` bit window whose lowest scalar bit is `bit`.
    ///
    /// Bit 0 of the result is scalar bit `bit - 1` (zero for the bottom window) and bits `1..=W`
    /// are scalar bits `bit..bit + W`. `bit` is public; only the bytes read depend on it.
    pub fn window<const W: u32>(&self, bit: usize) -> u32 {
        let mask = (1u32 << (W + 1)) - 1;
        if bit == 0 {
            return ((self.0[0] as u32) << 1) & mask;
        }
        let offset = (bit - 1) / 8;
        let word = self.0[offset] as u32 | (self.0[offset + 1] as u32) << 8;
        (word >> ((bit - 1) % 8)) & mask
    }
}
