#![allow(dead_code)]
//! A slow affine double-and-add over plain big integers to check the constant-time engine
//! against.
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, One, Zero};
use p256_ecmult::{EcPoint, Group};
use proptest::prelude::*;

fn hex(s: &str) -> BigUint {
    BigUint::from_str_radix(s, 16).unwrap()
}

pub fn p() -> BigUint {
    hex("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF")
}

pub fn n() -> BigUint {
    hex("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551")
}

pub fn b() -> BigUint {
    hex("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B")
}

pub fn g() -> RefPoint {
    RefPoint::Affine(
        hex("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
        hex("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefPoint {
    Infinity,
    Affine(BigUint, BigUint),
}

fn inv(a: &BigUint) -> BigUint {
    let p = p();
    a.modpow(&(&p - 2u32), &p)
}

fn sub_mod(a: &BigUint, b: &BigUint) -> BigUint {
    let p = p();
    ((a % &p) + &p - (b % &p)) % &p
}

impl RefPoint {
    pub fn is_on_curve(&self) -> bool {
        match self {
            RefPoint::Infinity => true,
            RefPoint::Affine(x, y) => {
                let p = p();
                let lhs = (y * y) % &p;
                let rhs = sub_mod(&((x * x * x) + b()), &(x * 3u32));
                lhs == rhs
            }
        }
    }

    pub fn double(&self) -> RefPoint {
        match self {
            RefPoint::Infinity => RefPoint::Infinity,
            RefPoint::Affine(x, y) => {
                if y.is_zero() {
                    return RefPoint::Infinity;
                }
                let p = p();
                // a = -3
                let num = sub_mod(&(x * x * 3u32), &BigUint::from(3u32));
                let lambda = (num * inv(&((y * 2u32) % &p))) % &p;
                let x3 = sub_mod(&(&lambda * &lambda), &(x * 2u32));
                let y3 = sub_mod(&(&lambda * sub_mod(x, &x3)), y);
                RefPoint::Affine(x3, y3)
            }
        }
    }

    pub fn add(&self, other: &RefPoint) -> RefPoint {
        match (self, other) {
            (RefPoint::Infinity, _) => other.clone(),
            (_, RefPoint::Infinity) => self.clone(),
            (RefPoint::Affine(x1, y1), RefPoint::Affine(x2, y2)) => {
                let p = p();
                if x1 == x2 {
                    if ((y1 + y2) % &p).is_zero() {
                        return RefPoint::Infinity;
                    }
                    return self.double();
                }
                let lambda = (sub_mod(y2, y1) * inv(&sub_mod(x2, x1))) % &p;
                let x3 = sub_mod(&sub_mod(&(&lambda * &lambda), x1), x2);
                let y3 = sub_mod(&(&lambda * sub_mod(x1, &x3)), y1);
                RefPoint::Affine(x3, y3)
            }
        }
    }

    pub fn mul(&self, k: &BigInt) -> RefPoint {
        let n = BigInt::from(n());
        let k = (((k % &n) + &n) % &n).into_parts().1;
        let mut acc = RefPoint::Infinity;
        for i in (0..k.bits()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = acc.add(self);
            }
        }
        acc
    }

    pub fn to_ec_point(&self) -> EcPoint {
        match self {
            RefPoint::Infinity => EcPoint::infinity(),
            RefPoint::Affine(x, y) => EcPoint::from_affine_coordinates(x, y).unwrap(),
        }
    }
}

/// Reads a result back through the group so it can be compared with a [`RefPoint`].
pub fn to_ref(group: &Group, point: &EcPoint) -> RefPoint {
    if point.is_at_infinity() {
        return RefPoint::Infinity;
    }
    let (x, y) = group.get_affine_coordinates(point).unwrap();
    RefPoint::Affine(x, y)
}

/// Scalars that stress the reduction and recoding edges as well as uniform 256-bit ones.
pub fn scalar() -> impl Strategy<Value = BigInt> {
    let n = BigInt::from(n());
    prop_oneof![
        Just(BigInt::zero()),
        Just(BigInt::one()),
        Just(BigInt::from(128)),
        Just(&n - 1),
        Just(n.clone()),
        Just(BigInt::from(-1)),
        any::<[u8; 32]>().prop_map(|bytes| BigInt::from_bytes_le(Sign::Plus, &bytes)),
        any::<[u8; 32]>().prop_map(|bytes| BigInt::from_bytes_le(Sign::Minus, &bytes)),
        prop::collection::vec(any::<u8>(), 33..48)
            .prop_map(|bytes| BigInt::from_bytes_le(Sign::Plus, &bytes)),
    ]
}
