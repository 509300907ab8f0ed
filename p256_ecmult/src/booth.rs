//! Signed-digit (Booth) recoding of scalar windows.
//!
//! A window of width `W` is read as `W + 1` bits: the `W` bits of the window plus the top bit of
//! the window below it. Recoding turns that into a digit in `[-2^(W-1), 2^(W-1)]`, so a table
//! only needs the multiples `1..=2^(W-1)` and the sign is applied with a negation.

/// A recoded window digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedDigit {
    magnitude: u32,
    sign: u32,
}

impl SignedDigit {
    /// The absolute value of the digit. This is the table index, `0` selecting infinity.
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// `1` if the digit is negative, `0` otherwise.
    pub fn sign(&self) -> u32 {
        self.sign
    }

    /// `(magnitude << 1) | sign`, the single-word form of the digit.
    pub fn packed(&self) -> u32 {
        (self.magnitude << 1) | self.sign
    }

    /// The digit as a signed integer. Only for public values.
    pub fn value(&self) -> i32 {
        let magnitude = self.magnitude as i32;
        if self.sign == 1 { -magnitude } else { magnitude }
    }
}

/// Recodes a `W + 1` bit window value.
///
/// Branch-free: the top bit of `window` becomes an all-ones or all-zeros mask that picks between
/// `window` and its complement.
pub fn booth_recode<const W: u32>(window: u32) -> SignedDigit {
    let s = !((window >> W).wrapping_sub(1));
    let mut d = (1u32 << (W + 1)).wrapping_sub(window).wrapping_sub(1);
    d = (d & s) | (window & !s);
    d = (d >> 1) + (d & 1);
    SignedDigit {
        magnitude: d,
        sign: s & 1,
    }
}
