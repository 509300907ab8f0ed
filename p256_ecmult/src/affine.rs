//! Recovering affine coordinates from Jacobian points.
use crate::{
    backend::FieldArithmetic,
    group::{biguint_from_limbs, EcPoint},
    inverse::mod_inverse,
    Error,
};
use num_bigint::BigUint;

/// Returns the plain affine `x` and, when `want_y` is set, `y` of `point`.
///
/// Computes `x = X/Z²` and `y = Y/Z³` with a single constant-time inversion and takes both out of
/// the Montgomery domain.
pub fn to_affine<B: FieldArithmetic>(
    point: &EcPoint,
    want_y: bool,
) -> Result<(BigUint, Option<BigUint>), Error> {
    if point.is_at_infinity() {
        log::debug!("affine coordinates requested for the point at infinity");
        return Err(Error::PointAtInfinity);
    }
    let point = point.to_jacobian()?;

    let z_inv = mod_inverse::<B>(&point.z);
    let z_inv_sqr = B::sqr_mont(&z_inv);
    let x = B::from_mont(&B::mul_mont(&point.x, &z_inv_sqr));

    let y = if want_y {
        let z_inv_cub = B::mul_mont(&z_inv_sqr, &z_inv);
        let y = B::from_mont(&B::mul_mont(&point.y, &z_inv_cub));
        Some(biguint_from_limbs(y.limbs()))
    } else {
        None
    };

    Ok((biguint_from_limbs(x.limbs()), y))
}
