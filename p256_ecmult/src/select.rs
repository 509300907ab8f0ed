//! Constant-time table lookup and sign application.
//!
//! Every secret window digit passes through here. Both functions touch the same memory and run
//! the same instructions whatever the digit is.
use crate::backend::{FieldArithmetic, FieldElement};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Returns `table[index - 1]`, or `T::default()` when `index` is `0`.
///
/// Every entry is read and merged under an equality mask so neither the access pattern nor the
/// instruction trace depends on `index`. An `index` past the end of the table also yields the
/// default.
pub fn select<T, const N: usize>(table: &[T; N], index: u32) -> T
where
    T: ConditionallySelectable + Default,
{
    let mut selected = T::default();
    for (i, entry) in table.iter().enumerate() {
        selected.conditional_assign(entry, (i as u32 + 1).ct_eq(&index));
    }
    selected
}

/// Replaces `y` with `-y` when the low bit of `sign` is set.
///
/// The negation is always computed.
pub fn conditional_negate<B: FieldArithmetic>(y: &mut FieldElement, sign: u32) {
    let negated = B::neg(y);
    y.conditional_assign(&negated, Choice::from((sign & 1) as u8));
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::{JacobianPoint, Portable};
    use std::{cell::RefCell, vec::Vec};

    std::thread_local! {
        static TRACE: RefCell<Vec<u32>> = const { RefCell::new(Vec::new()) };
    }

    /// Records which table entries the selector touches.
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct Traced(u32);

    impl ConditionallySelectable for Traced {
        fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
            TRACE.with(|trace| trace.borrow_mut().push(b.0));
            Traced(u32::conditional_select(&a.0, &b.0, choice))
        }
    }

    fn traced_select(table: &[Traced; 16], index: u32) -> (Traced, Vec<u32>) {
        TRACE.with(|trace| trace.borrow_mut().clear());
        let selected = select(table, index);
        let trace = TRACE.with(|trace| trace.borrow().clone());
        (selected, trace)
    }

    #[test]
    fn selects_every_index() {
        let table: [Traced; 16] = core::array::from_fn(|i| Traced(100 + i as u32));
        assert_eq!(select(&table, 0), Traced::default());
        for index in 1..=16 {
            assert_eq!(select(&table, index), table[index as usize - 1]);
        }
        assert_eq!(select(&table, 17), Traced::default());
    }

    #[test]
    fn access_trace_is_independent_of_index() {
        let table: [Traced; 16] = core::array::from_fn(|i| Traced(100 + i as u32));
        let (_, reference) = traced_select(&table, 0);
        assert_eq!(reference.len(), 16);
        for index in 1..=16 {
            let (selected, trace) = traced_select(&table, index);
            assert_eq!(selected, table[index as usize - 1]);
            assert_eq!(trace, reference);
        }
    }

    #[test]
    fn select_jacobian_table() {
        let mut table = [JacobianPoint::INFINITY; 16];
        let mut point = JacobianPoint::new(
            FieldElement::ONE,
            FieldElement::ONE.mul_by_2(),
            FieldElement::ONE,
        );
        for entry in table.iter_mut() {
            *entry = point;
            point.x = point.x.add(&FieldElement::ONE);
        }
        assert_eq!(Portable::select_w5(&table, 0), JacobianPoint::INFINITY);
        assert_eq!(Portable::select_w5(&table, 7), table[6]);
    }

    #[test]
    fn negates_only_when_asked() {
        let y = FieldElement::ONE.mul_by_3();
        let mut kept = y;
        conditional_negate::<Portable>(&mut kept, 0);
        assert_eq!(kept, y);

        let mut negated = y;
        conditional_negate::<Portable>(&mut negated, 1);
        assert_eq!(negated, y.neg());

        // only the low bit carries the sign
        let mut packed = y;
        conditional_negate::<Portable>(&mut packed, 0b1010);
        assert_eq!(packed, y);
    }
}
