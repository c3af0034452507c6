use crate::Int;
use crate::Ratio;
use crate::error::Error;
use num::FromPrimitive;
use num::One;
use num::Signed;
use num::Zero;
use std::cmp::Ordering;
use std::str::FromStr;

/// an exact signed number, stored as a plain integer whenever the value
/// is integral and as a reduced rational otherwise. every constructor
/// on this type keeps that form canonical, so downstream code can match
/// on the variant to learn whether a weight came out integral. equality,
/// ordering, hashing, and the is_* predicates all compare by value, so
/// a Ratio built by hand around a whole number still behaves like the
/// Int it denotes.
#[derive(Debug, Clone)]
pub enum Weight {
    Int(Int),
    Ratio(Ratio),
}

impl Weight {
    pub fn zero() -> Self {
        Self::Int(Int::zero())
    }
    pub fn one() -> Self {
        Self::Int(Int::one())
    }
    /// n / d in canonical form. panics if d is zero.
    pub fn ratio(n: i64, d: i64) -> Self {
        Self::from(Ratio::new(Int::from(n), Int::from(d)))
    }
    pub fn as_ratio(&self) -> Ratio {
        match self {
            Self::Int(i) => Ratio::from_integer(i.clone()),
            Self::Ratio(r) => r.clone(),
        }
    }
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(i) => i.is_zero(),
            Self::Ratio(r) => r.is_zero(),
        }
    }
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Int(i) => i.is_negative(),
            Self::Ratio(r) => r.is_negative(),
        }
    }
    pub fn is_integer(&self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Ratio(r) => r.is_integer(),
        }
    }
    /// self * num / den, performed exactly. panics if den is zero.
    pub(crate) fn scale(&self, num: &Self, den: &Self) -> Self {
        Self::from(self.as_ratio() * num.as_ratio() / den.as_ratio())
    }
}

/// canonicalizing constructor: whole-number rationals collapse to Int.
impl From<Ratio> for Weight {
    fn from(r: Ratio) -> Self {
        match r.is_integer() {
            true => Self::Int(r.to_integer()),
            false => Self::Ratio(r),
        }
    }
}
impl From<Int> for Weight {
    fn from(i: Int) -> Self {
        Self::Int(i)
    }
}
impl From<i64> for Weight {
    fn from(n: i64) -> Self {
        Self::Int(Int::from(n))
    }
}
impl From<i32> for Weight {
    fn from(n: i32) -> Self {
        Self::Int(Int::from(n))
    }
}
impl From<usize> for Weight {
    fn from(n: usize) -> Self {
        Self::Int(Int::from(n))
    }
}

/// floats are not exact weights. the only accepted ones are those that
/// already denote an integer; anything with a fractional part must be
/// rewritten as an explicit rational by the caller.
impl TryFrom<f64> for Weight {
    type Error = Error;
    fn try_from(f: f64) -> Result<Self, Error> {
        if f.is_finite() && f.fract() == 0. {
            Int::from_f64(f).map(Self::Int).ok_or(Error::Inexact(f))
        } else {
            Err(Error::Inexact(f))
        }
    }
}

/// accepts integer literals and n/d rationals. no other shape of text
/// is ever read as a number.
impl FromStr for Weight {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        let malformed = || Error::Malformed(s.to_string());
        match s.split_once('/') {
            None => s
                .trim()
                .parse::<Int>()
                .map(Self::Int)
                .map_err(|_| malformed()),
            Some((n, d)) => {
                let n = n.trim().parse::<Int>().map_err(|_| malformed())?;
                let d = d.trim().parse::<Int>().map_err(|_| malformed())?;
                if d.is_zero() {
                    Err(malformed())
                } else {
                    Ok(Self::from(Ratio::new(n, d)))
                }
            }
        }
    }
}

impl std::ops::Add for Weight {
    type Output = Weight;
    fn add(self, rhs: Weight) -> Weight {
        match (self, rhs) {
            (Weight::Int(a), Weight::Int(b)) => Weight::Int(a + b),
            (a, b) => Weight::from(a.as_ratio() + b.as_ratio()),
        }
    }
}
impl std::ops::Sub for Weight {
    type Output = Weight;
    fn sub(self, rhs: Weight) -> Weight {
        match (self, rhs) {
            (Weight::Int(a), Weight::Int(b)) => Weight::Int(a - b),
            (a, b) => Weight::from(a.as_ratio() - b.as_ratio()),
        }
    }
}
impl std::ops::Mul for Weight {
    type Output = Weight;
    fn mul(self, rhs: Weight) -> Weight {
        match (self, rhs) {
            (Weight::Int(a), Weight::Int(b)) => Weight::Int(a * b),
            (a, b) => Weight::from(a.as_ratio() * b.as_ratio()),
        }
    }
}
/// exact division. panics if rhs is zero.
impl std::ops::Div for Weight {
    type Output = Weight;
    fn div(self, rhs: Weight) -> Weight {
        Weight::from(self.as_ratio() / rhs.as_ratio())
    }
}
impl std::ops::Neg for Weight {
    type Output = Weight;
    fn neg(self) -> Weight {
        match self {
            Weight::Int(i) => Weight::Int(-i),
            Weight::Ratio(r) => Weight::Ratio(-r),
        }
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Weight::Int(a), Weight::Int(b)) => a.cmp(b),
            (a, b) => a.as_ratio().cmp(&b.as_ratio()),
        }
    }
}
impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
/// value equality across representations, consistent with Ord.
impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Weight {}
impl std::hash::Hash for Weight {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.as_ratio(), state)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Weight::Int(i) => write!(f, "{}", i),
            Weight::Ratio(r) => write!(f, "{}/{}", r.numer(), r.denom()),
        }
    }
}
