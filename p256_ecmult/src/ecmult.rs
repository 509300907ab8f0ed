//! Windowed scalar multiplication.
//!
//! Two strategies share the work of `k·G + Σ kᵢ·Pᵢ`:
//!
//! - the generator, when it is the standard one, goes through [`mul_generator`] which walks the
//!   precomputed [`GENERATOR_TABLE`] with 7-bit windows and never doubles;
//! - every other point (and a non-standard generator) goes through [`windowed_mul`] which builds a
//!   16-entry table per point and shares one double-and-add ladder over 5-bit windows.
//!
//! Which strategy runs depends only on public information. Within a strategy every table lookup,
//! negation and addition happens regardless of the scalar bits.
use crate::{
    backend::{FieldArithmetic, JacobianPoint},
    booth::booth_recode,
    generator::{is_standard_generator, GENERATOR_TABLE, GENERATOR_WINDOW},
    group::{EcPoint, Group},
    scalar::WindowedScalar,
    select::conditional_negate,
    table::PointTable,
    Error,
};
use alloc::vec::Vec;
use num_bigint::BigInt;
use subtle::ConditionallySelectable;

/// Window width used for arbitrary points.
pub const POINT_WINDOW: u32 = 5;

/// The most points a single call will build tables for.
pub const MAX_POINTS: usize = 0xff_ffff;

/// How the base-point scalar is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BasePlan {
    /// There is no base-point scalar.
    None,
    /// The generator is the standard one and the fixed table is used.
    Precomputed,
    /// The generator joins the other points on the general path.
    Folded,
}

impl BasePlan {
    fn choose<B: FieldArithmetic>(group: &Group<B>, scalar: Option<&BigInt>) -> Result<Self, Error> {
        if scalar.is_none() {
            return Ok(BasePlan::None);
        }
        match group.generator() {
            None => Err(Error::UndefinedGenerator),
            Some(generator) if is_standard_generator(generator) => Ok(BasePlan::Precomputed),
            Some(_) => Ok(BasePlan::Folded),
        }
    }
}

/// Computes `scalar·G + Σ scalars[i]·points[i]`.
///
/// A `scalar` that is negative or wider than 256 bits is reduced modulo the group order, as is
/// each of `scalars`. The result is `(0, 0, 0)` when it is the point at infinity.
pub fn points_mul<B: FieldArithmetic>(
    group: &Group<B>,
    scalar: Option<&BigInt>,
    points: &[EcPoint],
    scalars: &[BigInt],
) -> Result<EcPoint, Error> {
    if points.len() != scalars.len() {
        log::debug!(
            "points_mul given {} points and {} scalars",
            points.len(),
            scalars.len()
        );
        return Err(Error::MismatchedInputs {
            points: points.len(),
            scalars: scalars.len(),
        });
    }
    if scalar.is_none() && points.is_empty() {
        return Ok(EcPoint::infinity());
    }

    let plan = BasePlan::choose(group, scalar)?;
    log::debug!("points_mul over {} points with base plan {:?}", points.len(), plan);

    let base_scalar = scalar.map(|k| WindowedScalar::new(k, group.order()));

    let precomputed = match (plan, &base_scalar) {
        (BasePlan::Precomputed, Some(k)) => Some(mul_generator::<B>(k)),
        _ => None,
    };

    let folded = usize::from(plan == BasePlan::Folded);
    let count = points.len() + folded;
    check_point_count(count)?;

    let mut general_points = Vec::new();
    let mut general_scalars = Vec::new();
    general_points
        .try_reserve_exact(count)
        .map_err(|_| Error::AllocationFailure)?;
    general_scalars
        .try_reserve_exact(count)
        .map_err(|_| Error::AllocationFailure)?;

    for (point, k) in points.iter().zip(scalars) {
        general_points.push(point.to_jacobian()?);
        general_scalars.push(WindowedScalar::new(k, group.order()));
    }
    if let (BasePlan::Folded, Some(generator), Some(k)) = (plan, group.generator(), base_scalar) {
        general_points.push(generator.to_jacobian()?);
        general_scalars.push(k);
    }

    let general = if general_points.is_empty() {
        None
    } else {
        Some(windowed_mul::<B>(&general_points, &general_scalars)?)
    };

    let mut result = match (precomputed, general) {
        (Some(a), Some(b)) => B::point_add(&a, &b),
        (Some(a), None) | (None, Some(a)) => a,
        (None, None) => JacobianPoint::INFINITY,
    };
    let at_infinity = result.is_infinity();
    result.conditional_assign(&JacobianPoint::INFINITY, at_infinity);

    Ok(EcPoint::from_jacobian(&result))
}

fn check_point_count(count: usize) -> Result<(), Error> {
    if count > MAX_POINTS {
        log::debug!("refusing to build tables for {} points", count);
        return Err(Error::AllocationFailure);
    }
    Ok(())
}

/// `k·G` for the standard generator using [`GENERATOR_TABLE`].
///
/// Row `i` contributes the digit of the window at bit `7i` through one mixed addition.
pub fn mul_generator<B: FieldArithmetic>(scalar: &WindowedScalar) -> JacobianPoint {
    let digit = booth_recode::<GENERATOR_WINDOW>(scalar.window::<GENERATOR_WINDOW>(0));
    let mut entry = B::select_w7(&GENERATOR_TABLE[0], digit.magnitude());
    conditional_negate::<B>(&mut entry.y, digit.sign());
    // a zero digit selects (0, 0) which must seed the accumulator as infinity, not as a point
    let mut acc = JacobianPoint::from_affine(&entry);

    for (row, table) in GENERATOR_TABLE.iter().enumerate().skip(1) {
        let bit = row * GENERATOR_WINDOW as usize;
        let digit = booth_recode::<GENERATOR_WINDOW>(scalar.window::<GENERATOR_WINDOW>(bit));
        let mut entry = B::select_w7(table, digit.magnitude());
        conditional_negate::<B>(&mut entry.y, digit.sign());
        acc = B::point_add_affine(&acc, &entry);
    }

    acc
}

/// `Σ scalars[i]·points[i]` with a shared double-and-add ladder over 5-bit windows.
///
/// Windows are processed from bit 255 down to bit 0 with five doublings between consecutive
/// windows. The first point's top window seeds the accumulator.
pub fn windowed_mul<B: FieldArithmetic>(
    points: &[JacobianPoint],
    scalars: &[WindowedScalar],
) -> Result<JacobianPoint, Error> {
    debug_assert_eq!(points.len(), scalars.len());
    check_point_count(points.len())?;

    let mut tables = Vec::new();
    tables
        .try_reserve_exact(points.len())
        .map_err(|_| Error::AllocationFailure)?;
    tables.extend(points.iter().map(PointTable::new::<B>));

    let window = POINT_WINDOW as usize;
    let mut bit = (255 / window) * window;

    let mut acc = JacobianPoint::INFINITY;
    for (i, (table, scalar)) in tables.iter().zip(scalars).enumerate() {
        let digit = booth_recode::<POINT_WINDOW>(scalar.window::<POINT_WINDOW>(bit));
        let mut entry = table.select::<B>(digit.magnitude());
        conditional_negate::<B>(&mut entry.y, digit.sign());
        acc = if i == 0 { entry } else { B::point_add(&acc, &entry) };
    }

    while bit > 0 {
        bit -= window;
        for _ in 0..POINT_WINDOW {
            acc = B::point_double(&acc);
        }
        for (table, scalar) in tables.iter().zip(scalars) {
            let digit = booth_recode::<POINT_WINDOW>(scalar.window::<POINT_WINDOW>(bit));
            let mut entry = table.select::<B>(digit.magnitude());
            conditional_negate::<B>(&mut entry.y, digit.sign());
            acc = B::point_add(&acc, &entry);
        }
    }

    Ok(acc)
}
