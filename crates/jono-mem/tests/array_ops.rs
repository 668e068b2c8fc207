//! Property-based tests for the dynamic array.
//!
//! Operations are checked against a plain `Vec` driven through the same
//! steps, plus standalone invariants on length, capacity and order.

use proptest::prelude::*;

use std::{collections::VecDeque, io::Cursor};

use jono_mem::DynArray;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn with_len_fills_every_slot(len in 0usize..64, value in any::<i64>()) {
        let arr = DynArray::with_len(len, value).unwrap();
        prop_assert_eq!(arr.len(), len);
        prop_assert_eq!(arr.capacity(), len);
        prop_assert!(arr.iter().all(|v| *v == value));
    }

    #[test]
    fn pushes_match_a_vec_model(values in proptest::collection::vec(any::<i64>(), 0..64)) {
        let mut arr = DynArray::new();
        let mut model = Vec::new();
        for &value in &values {
            arr.push(value).unwrap();
            model.push(value);
            prop_assert_eq!(arr.back(), model.last());
            prop_assert!(arr.capacity() >= arr.len());
        }
        prop_assert_eq!(arr.as_slice(), model.as_slice());
    }

    #[test]
    fn capacity_exactly_doubles_when_it_grows(values in proptest::collection::vec(any::<u8>(), 1..128)) {
        let mut arr = DynArray::new();
        for &value in &values {
            let before = arr.capacity();
            arr.push(value).unwrap();
            let after = arr.capacity();
            prop_assert!(
                after == before
                || (before == 0 && after == 1)
                || after == before * 2
            );
        }
    }

    #[test]
    fn pop_front_matches_a_deque_model(
        values in proptest::collection::vec(any::<i64>(), 0..64),
        pops in 0usize..80,
    ) {
        let mut arr = DynArray::from(values.as_slice());
        let mut model: VecDeque<i64> = values.iter().copied().collect();
        for _ in 0..pops {
            prop_assert_eq!(arr.pop_front(), model.pop_front());
        }
        let rest: Vec<i64> = arr.iter().copied().collect();
        let model_rest: Vec<i64> = model.into_iter().collect();
        prop_assert_eq!(rest, model_rest);
    }

    #[test]
    fn resize_keeps_the_prefix(
        values in proptest::collection::vec(any::<i64>(), 0..64),
        new_len in 0usize..96,
    ) {
        let mut arr = DynArray::from(values.as_slice());
        arr.resize(new_len).unwrap();
        let keep = values.len().min(new_len);
        prop_assert_eq!(arr.len(), keep);
        prop_assert_eq!(arr.capacity(), new_len);
        prop_assert_eq!(arr.as_slice(), &values[..keep]);
    }

    #[test]
    fn assign_overwrites_everything(
        values in proptest::collection::vec(any::<i64>(), 0..32),
        n in 0usize..48,
        fill in any::<i64>(),
    ) {
        let mut arr = DynArray::from(values.as_slice());
        arr.assign(n, fill).unwrap();
        prop_assert_eq!(arr.len(), n);
        prop_assert_eq!(arr.capacity(), n);
        prop_assert!(arr.iter().all(|v| *v == fill));
    }

    #[test]
    fn clone_equals_source_then_detaches(values in proptest::collection::vec(any::<i64>(), 1..64)) {
        let arr = DynArray::from(values.as_slice());
        let mut clone = arr.clone();
        prop_assert_eq!(&clone, &arr);
        prop_assert_eq!(clone.capacity(), clone.len());
        clone[0] = clone[0].wrapping_add(1);
        prop_assert_ne!(&clone, &arr);
    }

    #[test]
    fn text_round_trips(values in proptest::collection::vec(any::<i64>(), 0..32)) {
        let original = DynArray::from(values.as_slice());
        let text = format!("{}", original);
        let mut read_back = DynArray::with_len(values.len(), 0i64).unwrap();
        read_back.read_from(&mut Cursor::new(text)).unwrap();
        prop_assert_eq!(read_back, original);
    }

    #[test]
    fn into_iter_yields_in_order(values in proptest::collection::vec(any::<i64>(), 0..64)) {
        let arr = DynArray::from(values.as_slice());
        let collected: Vec<i64> = arr.into_iter().collect();
        prop_assert_eq!(collected, values);
    }
}
