#![allow(non_snake_case)]
#[allow(dead_code)]
#[path = "src/vendor/nistz256/mod.rs"]
mod nistz256;

use nistz256::{field::MODULUS, AffinePoint, FieldElement, JacobianPoint};
use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

// keep in sync with GENERATOR_WINDOW in src/generator.rs
const WINDOW: usize = 7;
const ROWS: usize = 256 / WINDOW + 1;
const ROW_LEN: usize = 1 << (WINDOW - 1);

/// The standard generator in the Montgomery domain.
const G: AffinePoint = AffinePoint::new(
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

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/vendor/nistz256");
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let table_path = Path::new(&out_dir).join("p256_generator_table.rs");
    let table_file = File::create(&table_path).expect("Create p256_generator_table.rs file failed");
    let mut table_file = BufWriter::new(table_file);
    write_generator_table(&mut table_file).expect("Write p256_generator_table.rs file failed");
    table_file
        .flush()
        .expect("Flush p256_generator_table.rs file failed");
}

/// Row `k` holds `1·B, 2·B, …, 64·B` where `B = 2^(7k)·G`.
fn write_generator_table(file: &mut impl Write) -> Result<(), io::Error> {
    let mut base = JacobianPoint::from_affine(&G);

    file.write_fmt(format_args!("["))?;
    for _ in 0..ROWS {
        file.write_fmt(format_args!("    ["))?;
        let mut multiple = base;
        for _ in 0..ROW_LEN {
            let point = normalize(&multiple);
            let (x, y) = (point.x.limbs(), point.y.limbs());
            file.write_fmt(format_args!(
                "        AffinePoint::new(FieldElement::from_limbs([{:#018x}, {:#018x}, {:#018x}, {:#018x}]), FieldElement::from_limbs([{:#018x}, {:#018x}, {:#018x}, {:#018x}])),",
                x[0], x[1], x[2], x[3], y[0], y[1], y[2], y[3]
            ))?;
            multiple = multiple.add(&base);
        }
        file.write_fmt(format_args!("    ],"))?;
        for _ in 0..WINDOW {
            base = base.double();
        }
    }
    file.write_fmt(format_args!("]"))?;

    Ok(())
}

fn normalize(point: &JacobianPoint) -> AffinePoint {
    let z_inv = invert_vartime(&point.z);
    let z_inv2 = z_inv.square();
    let z_inv3 = z_inv2.mul(&z_inv);
    AffinePoint::new(point.x.mul(&z_inv2), point.y.mul(&z_inv3))
}

/// Square-and-multiply over the bits of `p - 2`. Only ever run on public data at build time.
fn invert_vartime(a: &FieldElement) -> FieldElement {
    let mut exponent = MODULUS;
    exponent[0] -= 2;
    let mut res = FieldElement::ONE;
    for limb in exponent.iter().rev() {
        for bit in (0..64).rev() {
            res = res.square();
            if (limb >> bit) & 1 == 1 {
                res = res.mul(a);
            }
        }
    }
    res
}
