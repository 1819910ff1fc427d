/// A KZG commitment to a blob, carried opaquely: the core only counts
/// commitments against the per-block limit and folds them into block roots.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KzgCommitment(pub [u8; 48]);

impl_fixed_len_bytes!(KzgCommitment, 48);
