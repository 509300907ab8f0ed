//! The field-arithmetic capability the scalar multiplication engine is written against.
//!
//! Everything secret-dependent that happens below the engine goes through this trait so the
//! constant-time contract has exactly one boundary to audit. Values are [`FieldElement`]s in the
//! Montgomery domain unless a method says otherwise.
mod portable_impl;

pub use crate::vendor::nistz256::{AffinePoint, FieldElement, JacobianPoint};
pub use portable_impl::Portable;

use crate::select;

/// Fixed-width P-256 field and curve primitives.
pub trait FieldArithmetic {
    /// `a + b mod p`
    fn add(a: &FieldElement, b: &FieldElement) -> FieldElement;
    /// `a - b mod p`
    fn sub(a: &FieldElement, b: &FieldElement) -> FieldElement;
    /// `-a mod p`
    fn neg(a: &FieldElement) -> FieldElement;
    /// `2a mod p`
    fn mul_by_2(a: &FieldElement) -> FieldElement;
    /// `3a mod p`
    fn mul_by_3(a: &FieldElement) -> FieldElement;
    /// `a/2 mod p`
    fn div_by_2(a: &FieldElement) -> FieldElement;
    /// `a·b·2⁻²⁵⁶ mod p`
    fn mul_mont(a: &FieldElement, b: &FieldElement) -> FieldElement;
    /// `a·a·2⁻²⁵⁶ mod p`
    fn sqr_mont(a: &FieldElement) -> FieldElement;
    /// Takes a canonical integer `< 2²⁵⁶` into the Montgomery domain.
    fn to_mont(a: &FieldElement) -> FieldElement;
    /// Returns the canonical integer of a Montgomery-domain value.
    fn from_mont(a: &FieldElement) -> FieldElement;

    /// `2a`. Doubling infinity gives infinity.
    fn point_double(a: &JacobianPoint) -> JacobianPoint;
    /// Must accept infinity on either side and equal inputs.
    fn point_add(a: &JacobianPoint, b: &JacobianPoint) -> JacobianPoint;
    /// Must accept infinity on either side (`(0,0)` for `b`) and equal inputs.
    fn point_add_affine(a: &JacobianPoint, b: &AffinePoint) -> JacobianPoint;

    /// Branch-free lookup in a 5-bit window table. Index `0` yields infinity.
    fn select_w5(table: &[JacobianPoint; 16], index: u32) -> JacobianPoint {
        select::select(table, index)
    }

    /// Branch-free lookup in a 7-bit window table. Index `0` yields `(0, 0)`.
    fn select_w7(table: &[AffinePoint; 64], index: u32) -> AffinePoint {
        select::select(table, index)
    }
}
