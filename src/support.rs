use std::hash::Hash;

/// marker trait for any type that can
/// serve as the outcome set of a probability mass function.
///
/// outcomes only ever need to be stored, compared, and looked up,
/// so any hashable value qualifies. a total order over PMFs is
/// additionally available whenever the outcome type is Ord.
pub trait Outcome: Clone + Eq + Hash {}

impl<T> Outcome for T where T: Clone + Eq + Hash {}
