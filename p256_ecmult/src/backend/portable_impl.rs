use crate::{
    backend::FieldArithmetic,
    vendor::nistz256::{AffinePoint, FieldElement, JacobianPoint},
};

/// The portable 64-bit limb backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

impl FieldArithmetic for Portable {
    fn add(a: &FieldElement, b: &FieldElement) -> FieldElement {
        a.add(b)
    }

    fn sub(a: &FieldElement, b: &FieldElement) -> FieldElement {
        a.sub(b)
    }

    fn neg(a: &FieldElement) -> FieldElement {
        a.neg()
    }

    fn mul_by_2(a: &FieldElement) -> FieldElement {
        a.mul_by_2()
    }

    fn mul_by_3(a: &FieldElement) -> FieldElement {
        a.mul_by_3()
    }

    fn div_by_2(a: &FieldElement) -> FieldElement {
        a.div_by_2()
    }

    fn mul_mont(a: &FieldElement, b: &FieldElement) -> FieldElement {
        a.mul(b)
    }

    fn sqr_mont(a: &FieldElement) -> FieldElement {
        a.square()
    }

    fn to_mont(a: &FieldElement) -> FieldElement {
        a.to_montgomery()
    }

    fn from_mont(a: &FieldElement) -> FieldElement {
        a.from_montgomery()
    }

    fn point_double(a: &JacobianPoint) -> JacobianPoint {
        a.double()
    }

    fn point_add(a: &JacobianPoint, b: &JacobianPoint) -> JacobianPoint {
        a.add(b)
    }

    fn point_add_affine(a: &JacobianPoint, b: &AffinePoint) -> JacobianPoint {
        a.add_affine(b)
    }
}
