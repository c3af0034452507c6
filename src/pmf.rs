use crate::Int;
use crate::error::Error;
use crate::pairs::Pairs;
use crate::share::Share;
use crate::support::Outcome;
use crate::weight::Weight;
use num::Integer;
use num::One;
use num::Zero;
use std::cmp::Ordering;
use std::sync::Arc;

/// an immutable probability mass function: an insertion-ordered mapping
/// from outcome to share plus the total the mapping is declared to sum
/// to. raw construction stores the mapping verbatim under a nominal
/// total of 1; normalization produces a new snapshot whose fixed
/// weights sum to the declared total exactly.
///
/// snapshots never mutate, so copies share the mapping behind an Arc
/// and concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct Pmf<K: Outcome> {
    pairs: Arc<Pairs<K>>,
    total: Weight,
}

impl<K: Outcome> Pmf<K> {
    pub fn new() -> Self {
        Self {
            pairs: Arc::new(Pairs::new()),
            total: Weight::one(),
        }
    }

    /// raw mapping from (outcome, weight) pairs. repeated outcomes
    /// accumulate; negative inputs fold into remainder claims.
    pub fn from_pairs<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        S: Into<Share>,
    {
        let pairs = items
            .into_iter()
            .map(|(outcome, share)| (outcome, share.into()))
            .collect::<Pairs<K>>();
        Self {
            pairs: Arc::new(pairs),
            total: Weight::one(),
        }
    }

    /// multiset construction: each outcome weighs its multiplicity.
    pub fn from_counts<I>(items: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self::from_pairs(items.into_iter().map(|outcome| (outcome, 1i64)))
    }

    /// construction-time normalization of a pair source.
    pub fn normalized_from_pairs<I, S>(items: I, target: impl Into<Weight>) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, S)>,
        S: Into<Share>,
    {
        Self::from_pairs(items).normalized_to(target)
    }

    /// construction-time normalization of a multiset source.
    pub fn normalized_from_counts<I>(items: I, target: impl Into<Weight>) -> Result<Self, Error>
    where
        I: IntoIterator<Item = K>,
    {
        Self::from_counts(items).normalized_to(target)
    }

    /// empty mapping with a declared total. fails on a negative total.
    pub fn with_total(target: impl Into<Weight>) -> Result<Self, Error> {
        Self::new().normalized_to(target)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
    pub fn get(&self, outcome: &K) -> Option<&Share> {
        self.pairs.get(outcome)
    }
    pub fn pairs(&self) -> &Pairs<K> {
        &self.pairs
    }
    pub fn outcomes(&self) -> impl Iterator<Item = &K> {
        self.pairs.iter().map(|(outcome, _)| outcome)
    }
    pub fn values(&self) -> impl Iterator<Item = &Share> {
        self.pairs.iter().map(|(_, share)| share)
    }
    /// outcomes carrying non-zero mass, in mapping order. zero-weight
    /// entries stay in the mapping but fall out of the support.
    pub fn support(&self) -> impl Iterator<Item = &K> {
        self.pairs
            .iter()
            .filter(|(_, share)| !share.is_zero())
            .map(|(outcome, _)| outcome)
    }
    /// the declared total: any non-negative exact value, rational
    /// targets included. only canonical totals from normalized() are
    /// guaranteed integral.
    pub fn total_weight(&self) -> &Weight {
        &self.total
    }

    /// the smallest non-negative integer total at which every weight of
    /// this distribution is simultaneously integral with no common
    /// factor. remainder claims carry no weight and are ignored. an
    /// empty or all-zero distribution has no meaningful scale and
    /// reduces to 1.
    pub fn int_weight(&self) -> Int {
        let weights = self
            .pairs
            .iter()
            .filter_map(|(_, share)| share.weight())
            .map(Weight::as_ratio)
            .collect::<Vec<_>>();
        let lcd = weights.iter().fold(Int::one(), |d, w| d.lcm(w.denom()));
        let numerators = weights
            .iter()
            .map(|w| w.numer() * (&lcd / w.denom()))
            .collect::<Vec<Int>>();
        let gcd = numerators.iter().fold(Int::zero(), |g, n| g.gcd(n));
        if gcd.is_zero() {
            Int::one()
        } else {
            numerators.iter().fold(Int::zero(), |s, n| s + n) / gcd
        }
    }

    /// a new snapshot rescaled to the canonical minimal integer total.
    pub fn normalized(&self) -> Result<Self, Error> {
        self.normalized_to(Weight::from(self.int_weight()))
    }

    /// a new snapshot rescaled to an explicit total. the result's
    /// declared total is exactly the target, never re-derived from the
    /// rescaled weights.
    pub fn normalized_to(&self, target: impl Into<Weight>) -> Result<Self, Error> {
        let target = target.into();
        if target.is_negative() {
            return Err(Error::NegativeTarget);
        }
        let pairs = self.rescale(&target)?;
        Ok(Self {
            pairs: Arc::new(pairs),
            total: target,
        })
    }

    /// the rescaling core. with no remainder claims, every weight is
    /// scaled proportionally so the mapping sums to the target. with
    /// remainder claims, fixed weights are kept verbatim and the claims
    /// split the leftover pool in proportion to their magnitudes. key
    /// order survives either way.
    fn rescale(&self, target: &Weight) -> Result<Pairs<K>, Error> {
        log::trace!("rescaling {} outcomes to total {}", self.len(), target);
        let fixed = self
            .pairs
            .iter()
            .filter_map(|(_, share)| share.weight())
            .fold(Weight::zero(), |sum, w| sum + w.clone());
        let magnitudes = self
            .pairs
            .iter()
            .filter_map(|(_, share)| share.magnitude())
            .fold(Weight::zero(), |sum, m| sum + m.clone());
        if magnitudes.is_zero() {
            if fixed.is_zero() {
                // nothing to spread proportionally. an empty mapping or
                // a zero target keeps every weight at zero; a positive
                // target over non-empty zero weights is unsatisfiable.
                if self.pairs.is_empty() || target.is_zero() {
                    Ok(self
                        .pairs
                        .iter()
                        .map(|(outcome, _)| (outcome.clone(), Share::Fixed(Weight::zero())))
                        .collect())
                } else {
                    Err(Error::ZeroScale)
                }
            } else {
                Ok(self
                    .pairs
                    .iter()
                    .map(|(outcome, share)| (outcome.clone(), share.signed()))
                    .map(|(outcome, w)| (outcome, Share::Fixed(w.scale(target, &fixed))))
                    .collect())
            }
        } else {
            let pool = target.clone() - fixed.clone();
            if pool.is_negative() {
                return Err(Error::Overdrawn);
            }
            Ok(self
                .pairs
                .iter()
                .map(|(outcome, share)| {
                    let share = match share {
                        Share::Fixed(w) => Share::Fixed(w.clone()),
                        Share::Remainder(m) => Share::Fixed(m.scale(&pool, &magnitudes)),
                    };
                    (outcome.clone(), share)
                })
                .collect())
        }
    }
}

impl<K: Outcome> Default for Pmf<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// copy construction shares the mapping by reference.
impl<K: Outcome> From<&Pmf<K>> for Pmf<K> {
    fn from(pmf: &Pmf<K>) -> Self {
        pmf.clone()
    }
}

/// equality over (mapping, total), independent of construction shape.
impl<K: Outcome> PartialEq for Pmf<K> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.pairs == other.pairs
    }
}
impl<K: Outcome> Eq for Pmf<K> {}

impl<K: Outcome + Ord> Ord for Pmf<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pairs
            .cmp(&other.pairs)
            .then_with(|| self.total.cmp(&other.total))
    }
}
impl<K: Outcome + Ord> PartialOrd for Pmf<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, K: Outcome> std::ops::Index<&'a K> for Pmf<K> {
    type Output = Share;
    fn index(&self, outcome: &'a K) -> &Share {
        self.get(outcome).expect("no weight stored for outcome")
    }
}
