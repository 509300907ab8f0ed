//! The precomputed table for the standard P-256 generator.
use crate::{
    backend::{AffinePoint, FieldElement},
    group::EcPoint,
};

/// Window width used for the generator.
pub const GENERATOR_WINDOW: u32 = 7;
/// Number of rows in [`GENERATOR_TABLE`]. Enough windows to cover 256 bits.
pub const GENERATOR_ROWS: usize = 256 / GENERATOR_WINDOW as usize + 1;
/// Number of entries in each row.
pub const GENERATOR_ROW_LEN: usize = 1 << (GENERATOR_WINDOW - 1);

/// Row `k` holds `1·B, 2·B, …, 64·B` for `B = 2^(7k)·G`, affine and in the Montgomery domain.
///
/// Generated by the build script.
pub static GENERATOR_TABLE: [[AffinePoint; GENERATOR_ROW_LEN]; GENERATOR_ROWS] =
    include!(concat!(env!("OUT_DIR"), "/p256_generator_table.rs"));

/// The standard generator in the Montgomery domain.
pub const G_MONT: AffinePoint = AffinePoint::new(
    FieldElement::from_limbs([
        0x79e730d418a9143c,
        0x75ba95fc5fedb601,
        0x79fb732b77622510,
        0x18905f76a53755c6,
    ]),
    FieldElement::from_limbs([
        0xddf25357ce95560a,
        0x8b4ab8e4ba19e45c,
        0xd2e88688dd21f325,
        0x8571ff1825885d85,
    ]),
);

/// Whether `point` is stored exactly as the standard generator with `Z = 1`.
///
/// Only this exact representation may use [`GENERATOR_TABLE`]. A scaled Jacobian form of the same
/// point is not recognised.
pub fn is_standard_generator(point: &EcPoint) -> bool {
    match point.to_jacobian() {
        Ok(jacobian) => {
            jacobian.x == G_MONT.x && jacobian.y == G_MONT.y && jacobian.z == FieldElement::ONE
        }
        Err(_) => false,
    }
}
