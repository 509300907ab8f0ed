//! The curve group the scalar multiplication entry points operate on.
use crate::{
    affine,
    backend::{FieldArithmetic, FieldElement, JacobianPoint, Portable},
    ecmult,
    generator::G_MONT,
    Error,
};
use alloc::vec::Vec;
use core::marker::PhantomData;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand_core::RngCore;

/// The P-256 group order `n` as little-endian limbs.
const ORDER: [u64; 4] = [
    0xf3b9cac2fc632551,
    0xbce6faada7179e84,
    0xffffffffffffffff,
    0xffffffff00000000,
];

/// A point as the caller holds it: Jacobian coordinates in the Montgomery domain.
///
/// `z == 0` is the point at infinity. Results of [`Group::multiply`] use `(0, 0, 0)` for it.
/// Each coordinate must fit in 256 bits to be used.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcPoint {
    /// `X·2²⁵⁶ mod p`
    pub x: BigUint,
    /// `Y·2²⁵⁶ mod p`
    pub y: BigUint,
    /// `Z·2²⁵⁶ mod p`
    pub z: BigUint,
}

impl EcPoint {
    /// The point at infinity.
    pub fn infinity() -> Self {
        EcPoint {
            x: BigUint::zero(),
            y: BigUint::zero(),
            z: BigUint::zero(),
        }
    }

    /// Whether `z` is zero.
    pub fn is_at_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Encodes plain affine coordinates `(x, y)` with `Z = 1`.
    pub fn from_affine_coordinates(x: &BigUint, y: &BigUint) -> Result<Self, Error> {
        let one = biguint_from_limbs(FieldElement::ONE.limbs());
        Ok(EcPoint {
            x: to_montgomery(x)?,
            y: to_montgomery(y)?,
            z: one,
        })
    }

    /// Encodes plain Jacobian coordinates `(x, y, z)` representing `(x/z², y/z³)`.
    pub fn from_jacobian_coordinates(x: &BigUint, y: &BigUint, z: &BigUint) -> Result<Self, Error> {
        Ok(EcPoint {
            x: to_montgomery(x)?,
            y: to_montgomery(y)?,
            z: to_montgomery(z)?,
        })
    }

    pub(crate) fn to_jacobian(&self) -> Result<JacobianPoint, Error> {
        Ok(JacobianPoint::new(
            FieldElement::from_limbs(limbs_from_biguint(&self.x)?),
            FieldElement::from_limbs(limbs_from_biguint(&self.y)?),
            FieldElement::from_limbs(limbs_from_biguint(&self.z)?),
        ))
    }

    pub(crate) fn from_jacobian(point: &JacobianPoint) -> Self {
        EcPoint {
            x: biguint_from_limbs(point.x.limbs()),
            y: biguint_from_limbs(point.y.limbs()),
            z: biguint_from_limbs(point.z.limbs()),
        }
    }
}

/// P-256 with an optional generator, multiplied with the field backend `B`.
#[derive(Clone, Debug)]
pub struct Group<B = Portable> {
    order: BigUint,
    generator: Option<EcPoint>,
    backend: PhantomData<B>,
}

impl Group<Portable> {
    /// The standard group with the standard generator in its `Z = 1` form, so base-point
    /// multiplications use the precomputed table.
    pub fn p256() -> Self {
        Group {
            order: biguint_from_limbs(ORDER),
            generator: Some(EcPoint::from_jacobian(&JacobianPoint::from_affine(&G_MONT))),
            backend: PhantomData,
        }
    }
}

impl<B: FieldArithmetic> Group<B> {
    /// Creates a group. `order` reduces scalars that are negative or wider than 256 bits and
    /// must be non-zero.
    ///
    /// The backend is not inferred from the default, so name it: `Group::<Portable>::new(..)`.
    pub fn new(order: BigUint, generator: Option<EcPoint>) -> Result<Self, Error> {
        if order.is_zero() {
            log::debug!("rejecting a group with zero order");
            return Err(Error::ZeroOrder);
        }
        Ok(Group {
            order,
            generator,
            backend: PhantomData,
        })
    }

    /// Replaces the generator.
    pub fn with_generator(self, generator: Option<EcPoint>) -> Self {
        Group {
            generator,
            ..self
        }
    }

    /// The group order.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// The generator, if the group has one.
    pub fn generator(&self) -> Option<&EcPoint> {
        self.generator.as_ref()
    }

    /// Computes `scalar·G + Σ scalars[i]·points[i]` in constant time with respect to the scalars
    /// and coordinates.
    ///
    /// With no `scalar` and no points the result is the point at infinity.
    pub fn multiply(
        &self,
        scalar: Option<&BigInt>,
        points: &[EcPoint],
        scalars: &[BigInt],
    ) -> Result<EcPoint, Error> {
        ecmult::points_mul::<B>(self, scalar, points, scalars)
    }

    /// Plain affine `(x, y)` of `point`.
    pub fn get_affine_coordinates(&self, point: &EcPoint) -> Result<(BigUint, BigUint), Error> {
        let (x, y) = affine::to_affine::<B>(point, true)?;
        Ok((x, y.unwrap_or_default()))
    }

    /// Plain affine `x` of `point`, skipping the work for `y`.
    pub fn get_affine_x(&self, point: &EcPoint) -> Result<BigUint, Error> {
        let (x, _) = affine::to_affine::<B>(point, false)?;
        Ok(x)
    }

    /// Samples a scalar in `[0, n)`.
    ///
    /// 512 random bits are reduced modulo the order so the bias is negligible.
    pub fn random_scalar<R: RngCore>(&self, rng: &mut R) -> BigInt {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        BigInt::from(BigUint::from_bytes_le(&bytes) % &self.order)
    }
}

fn to_montgomery(value: &BigUint) -> Result<BigUint, Error> {
    let element = FieldElement::from_limbs(limbs_from_biguint(value)?);
    Ok(biguint_from_limbs(element.to_montgomery().limbs()))
}

/// Fails with [`Error::CoordinatesOutOfRange`] when `value` needs more than four limbs.
pub(crate) fn limbs_from_biguint(value: &BigUint) -> Result<[u64; 4], Error> {
    let digits: Vec<u64> = value.to_u64_digits();
    if digits.len() > 4 {
        return Err(Error::CoordinatesOutOfRange);
    }
    let mut limbs = [0u64; 4];
    limbs[..digits.len()].copy_from_slice(&digits);
    Ok(limbs)
}

pub(crate) fn biguint_from_limbs(limbs: [u64; 4]) -> BigUint {
    let mut bytes = [0u8; 32];
    for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}
