//! Field inversion by exponentiation to `p - 2`.
use crate::backend::{FieldArithmetic, FieldElement};

fn sqr_n<B: FieldArithmetic>(a: &FieldElement, n: usize) -> FieldElement {
    let mut res = *a;
    for _ in 0..n {
        res = B::sqr_mont(&res);
    }
    res
}

/// Computes `a⁻¹` in the Montgomery domain with a fixed addition chain for `p - 2`.
///
/// The sequence of squarings and multiplications never depends on `a`. The inverse of zero comes
/// out as zero.
pub fn mod_inverse<B: FieldArithmetic>(a: &FieldElement) -> FieldElement {
    // pN = a^(2^N - 1)
    let p2 = B::mul_mont(&B::sqr_mont(a), a);
    let p4 = B::mul_mont(&sqr_n::<B>(&p2, 2), &p2);
    let p8 = B::mul_mont(&sqr_n::<B>(&p4, 4), &p4);
    let p16 = B::mul_mont(&sqr_n::<B>(&p8, 8), &p8);
    let p32 = B::mul_mont(&sqr_n::<B>(&p16, 16), &p16);

    let mut res = B::mul_mont(&sqr_n::<B>(&p32, 32), a);
    res = B::mul_mont(&sqr_n::<B>(&res, 128), &p32);
    res = B::mul_mont(&sqr_n::<B>(&res, 32), &p32);
    res = B::mul_mont(&sqr_n::<B>(&res, 16), &p16);
    res = B::mul_mont(&sqr_n::<B>(&res, 8), &p8);
    res = B::mul_mont(&sqr_n::<B>(&res, 4), &p4);
    res = B::mul_mont(&sqr_n::<B>(&res, 2), &p2);
    B::mul_mont(&sqr_n::<B>(&res, 2), a)
}
