use bst_set::{Set, SetError};

use std::collections::HashSet;

use crate::{init_tracing, Op};

/// Applies a set of operations to a `Set` and a `HashSet`.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], set: &mut Set<T>, model: &mut HashSet<T>)
where
    T: std::hash::Hash + Eq + Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                let added = set.add(x.clone()).is_ok();
                assert_eq!(added, model.insert(x.clone()));
            }
            Op::Remove(x) => {
                let removed = set.remove(x).ok();
                assert_eq!(removed, model.take(x));
            }
            Op::RemoveAny => match set.remove_any() {
                Ok(x) => assert!(model.remove(&x)),
                Err(e) => {
                    assert_eq!(e, SetError::Empty);
                    assert!(model.is_empty());
                }
            },
            Op::Transfer => {
                let mut other = Set::new();
                other.transfer_from(set);
                assert!(set.is_empty());
                set.transfer_from(&mut other);
                assert!(other.is_empty());
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        init_tracing();
        let mut set = Set::new();
        let mut model = HashSet::new();

        do_ops(&ops, &mut set, &mut model);

        let mut expected: Vec<_> = model.into_iter().collect();
        expected.sort_unstable();
        set.len() == expected.len() && set.iter().eq(expected.iter())
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut set = Set::new();
        for x in &xs {
            let _ = set.add(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !set.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut set = Set::new();
        for x in &xs {
            let _ = set.add(*x);
        }
        for remove in &removes {
            let _ = set.remove(remove);
        }

        let mut still_present = xs;
        // We may have added the same value multiple times - drop each one.
        still_present.retain(|x| !removes.contains(x));

        removes.iter().all(|x| !set.contains(x))
            && still_present.iter().all(|x| set.contains(x))
    }
}

quickcheck::quickcheck! {
    fn remove_any_until_empty(xs: Vec<i16>) -> bool {
        let mut set = Set::new();
        for x in &xs {
            let _ = set.add(*x);
        }

        let mut drained = Vec::new();
        while let Ok(x) = set.remove_any() {
            drained.push(x);
        }

        let expected: HashSet<_> = xs.into_iter().collect();
        drained.len() == expected.len()
            && drained.into_iter().collect::<HashSet<_>>() == expected
    }
}

quickcheck::quickcheck! {
    fn into_iter_is_sorted_and_unique(xs: Vec<i16>) -> bool {
        let mut set = Set::new();
        for x in &xs {
            let _ = set.add(*x);
        }

        let mut expected = xs;
        expected.sort_unstable();
        expected.dedup();

        set.into_iter().collect::<Vec<_>>() == expected
    }
}

#[test]
fn scenario_remove_with_two_children() {
    init_tracing();
    let mut set = Set::new();
    for x in [5, 2, 8, 1] {
        set.add(x).unwrap();
    }
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 5, 8]);
    assert_eq!(set.len(), 4);

    assert_eq!(set.remove(&5), Ok(5));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 8]);
    assert_eq!(set.len(), 3);
}

#[test]
fn scenario_transfer() {
    let mut a = Set::new();
    let mut b = Set::new();
    for x in [1, 2, 3] {
        a.add(x).unwrap();
    }
    for x in [4, 5] {
        b.add(x).unwrap();
    }

    a.transfer_from(&mut b);

    assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![4, 5]);
    assert!(b.is_empty());
}

#[test]
fn errors_render_as_messages() {
    let mut set = Set::new();
    set.add("zero").unwrap();

    let err = set.add("zero").unwrap_err();
    assert_eq!(err.to_string(), "element is already in the set");
    assert_eq!(err.into_element(), Some("zero"));

    let err: Box<dyn std::error::Error> = Box::new(set.remove(&"one").unwrap_err());
    assert_eq!(err.to_string(), "element is not in the set");
}
