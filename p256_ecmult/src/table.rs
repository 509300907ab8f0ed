//! Per-point tables of small multiples for the 5-bit window.
use crate::backend::{FieldArithmetic, JacobianPoint};

/// The multiples `1·P ..= 16·P` in Jacobian form. Entry `i` holds `(i + 1)·P`.
///
/// Aligned to a cache line so that a table lookup always touches the same set of lines.
#[repr(C, align(64))]
#[derive(Clone, Copy, Debug)]
pub struct PointTable(pub [JacobianPoint; 16]);

impl PointTable {
    /// Builds the table for `point` using 15 operations: doublings where the multiple is even and
    /// additions of `P` otherwise.
    pub fn new<B: FieldArithmetic>(point: &JacobianPoint) -> Self {
        let mut t = [JacobianPoint::INFINITY; 16];
        // t[i] = (i + 1)·P
        t[0] = *point;
        t[1] = B::point_double(&t[0]);
        t[2] = B::point_add(&t[1], &t[0]);
        t[3] = B::point_double(&t[1]);
        t[5] = B::point_double(&t[2]);
        t[7] = B::point_double(&t[3]);
        t[11] = B::point_double(&t[5]);
        t[4] = B::point_add(&t[3], &t[0]);
        t[6] = B::point_add(&t[5], &t[0]);
        t[8] = B::point_add(&t[7], &t[0]);
        t[12] = B::point_add(&t[11], &t[0]);
        t[13] = B::point_double(&t[6]);
        t[9] = B::point_double(&t[4]);
        t[14] = B::point_add(&t[13], &t[0]);
        t[10] = B::point_add(&t[9], &t[0]);
        t[15] = B::point_add(&t[14], &t[0]);
        PointTable(t)
    }

    /// Branch-free lookup of `index·P`, infinity for `0`.
    pub fn select<B: FieldArithmetic>(&self, index: u32) -> JacobianPoint {
        B::select_w5(&self.0, index)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        backend::{FieldElement, Portable},
        generator::G_MONT,
        inverse::mod_inverse,
    };

    fn affine(point: &JacobianPoint) -> (FieldElement, FieldElement) {
        let z_inv = mod_inverse::<Portable>(&point.z);
        let z_inv2 = z_inv.square();
        (point.x.mul(&z_inv2), point.y.mul(&z_inv2.mul(&z_inv)))
    }

    #[test]
    fn entries_are_consecutive_multiples() {
        let g = JacobianPoint::from_affine(&G_MONT);
        let table = PointTable::new::<Portable>(&g);
        let mut expected = g;
        for (i, entry) in table.0.iter().enumerate() {
            assert_eq!(affine(entry), affine(&expected), "entry {}", i);
            expected = expected.add(&g);
        }
    }

    #[test]
    fn table_of_infinity_is_all_infinity() {
        let table = PointTable::new::<Portable>(&JacobianPoint::INFINITY);
        for entry in table.0.iter() {
            assert!(bool::from(entry.is_infinity()));
        }
    }

    #[test]
    fn table_is_cache_line_aligned() {
        assert_eq!(core::mem::align_of::<PointTable>(), 64);
        let table = PointTable::new::<Portable>(&JacobianPoint::INFINITY);
        assert_eq!(&table as *const PointTable as usize % 64, 0);
        assert_eq!(table.select::<Portable>(0), JacobianPoint::INFINITY);
    }
}
