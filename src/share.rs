use crate::Int;
use crate::Ratio;
use crate::error::Error;
use crate::weight::Weight;
use std::cmp::Ordering;

/// one raw entry of a weight mapping. Fixed carries a literal
/// non-negative weight; Remainder carries a strictly positive magnitude
/// claiming a proportional cut of whatever mass normalization leaves
/// over. the legacy encoding packed both into one signed number, with
/// negative values meaning remainder; the sign-folding From impls below
/// keep that convention at the input boundary while the engine itself
/// works on the explicit variants. equality and ordering go through the
/// signed value, so a hand-built zero-magnitude Remainder still equals
/// a zero Fixed weight and claims nothing.
#[derive(Debug, Clone)]
pub enum Share {
    Fixed(Weight),
    Remainder(Weight),
}

impl Share {
    /// the literal weight, if this entry has one.
    pub fn weight(&self) -> Option<&Weight> {
        match self {
            Self::Fixed(w) => Some(w),
            Self::Remainder(_) => None,
        }
    }
    /// the remainder magnitude, if this entry claims leftover mass.
    pub fn magnitude(&self) -> Option<&Weight> {
        match self {
            Self::Fixed(_) => None,
            Self::Remainder(m) => Some(m),
        }
    }
    /// the legacy signed encoding: Fixed(w) is w, Remainder(m) is -m.
    pub fn signed(&self) -> Weight {
        match self {
            Self::Fixed(w) => w.clone(),
            Self::Remainder(m) => -m.clone(),
        }
    }
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Fixed(w) => w.is_zero(),
            Self::Remainder(m) => m.is_zero(),
        }
    }
    pub fn is_remainder(&self) -> bool {
        matches!(self, Self::Remainder(_))
    }
    /// repeated outcomes accumulate by signed addition, exactly as the
    /// signed encoding would have added the raw numbers.
    pub(crate) fn merge(&self, other: &Self) -> Self {
        Self::from(self.signed() + other.signed())
    }
}

/// sign folding: negative weights become remainder claims.
impl From<Weight> for Share {
    fn from(w: Weight) -> Self {
        match w.is_negative() {
            true => Self::Remainder(-w),
            false => Self::Fixed(w),
        }
    }
}
impl From<i64> for Share {
    fn from(n: i64) -> Self {
        Self::from(Weight::from(n))
    }
}
impl From<i32> for Share {
    fn from(n: i32) -> Self {
        Self::from(Weight::from(n))
    }
}
impl From<usize> for Share {
    fn from(n: usize) -> Self {
        Self::from(Weight::from(n))
    }
}
impl From<Int> for Share {
    fn from(i: Int) -> Self {
        Self::from(Weight::from(i))
    }
}
impl From<Ratio> for Share {
    fn from(r: Ratio) -> Self {
        Self::from(Weight::from(r))
    }
}
impl TryFrom<f64> for Share {
    type Error = Error;
    fn try_from(f: f64) -> Result<Self, Error> {
        Weight::try_from(f).map(Self::from)
    }
}

/// total order by signed value, matching the legacy numeric order.
impl Ord for Share {
    fn cmp(&self, other: &Self) -> Ordering {
        self.signed().cmp(&other.signed())
    }
}
impl PartialOrd for Share {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
/// signed-value equality, consistent with Ord.
impl PartialEq for Share {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Share {}
