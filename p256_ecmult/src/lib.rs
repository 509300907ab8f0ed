//! Constant-time scalar multiplication on NIST P-256.
//!
//! Computes `k·G + Σ kᵢ·Pᵢ` with signed-digit windows, a precomputed table for the standard
//! generator and a small per-point table for everything else. Table lookups read every entry and
//! signs are applied with masks, so the work done never depends on the scalars.
//!
//! ```
//! use p256_ecmult::{Group, num_bigint::BigInt};
//!
//! let group = Group::p256();
//! let two = BigInt::from(2);
//! let two_g = group.multiply(Some(&two), &[], &[]).unwrap();
//! let (x, _y) = group.get_affine_coordinates(&two_g).unwrap();
//! assert_eq!(
//!     format!("{:X}", x),
//!     "7CF27B188D034F7E8A52380304B51AC3C08969E277F21B35A60B48FC47669978"
//! );
//! ```
#![no_std]
#![allow(non_snake_case)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

mod vendor;

pub mod affine;
pub mod backend;
pub mod booth;
pub mod ecmult;
mod error;
pub mod generator;
mod group;
pub mod inverse;
pub mod scalar;
pub mod select;
pub mod table;

pub use backend::{FieldArithmetic, Portable};
pub use error::Error;
pub use group::{EcPoint, Group};

pub use num_bigint;
pub use rand_core;
#[cfg(feature = "serde")]
pub extern crate serde;

#[doc(hidden)]
pub const TEST_SOUNDNESS: usize = 20;
