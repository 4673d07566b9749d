use quickcheck::{Arbitrary, Gen};

mod set;

/// An enum for the various kinds of "things" to do to
/// sets in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Add the T to the set
    Add(T),
    /// Remove the T from the set
    Remove(T),
    /// Remove whichever element the set picks
    RemoveAny,
    /// Move the set's elements into a fresh set and back
    Transfer,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::RemoveAny,
            3 => Op::Transfer,
            _ => unreachable!(),
        }
    }
}

/// Installs a subscriber so `RUST_LOG=bst_set=trace cargo test` shows what the set did.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
