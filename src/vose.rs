//! Vose's alias method for O(1) sampling from a discrete distribution.

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};
use rand::Rng;

use crate::error::ProbError;

/// Default allowed distance between the sum of the probabilities and 1.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Builds [`AliasTable`]s from distributions.
///
/// The only knob is the tolerance used when checking that the probabilities
/// sum to 1. Probabilities are scaled by `n` as given; they are not
/// renormalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableBuilder {
    tolerance: f64,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    /// Builder using [`DEFAULT_TOLERANCE`].
    pub const fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Builder accepting sums within `tolerance` of 1.
    ///
    /// # Errors
    /// [`ProbError::BadTolerance`] if `tolerance` is NaN, infinite or negative.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, ProbError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ProbError::BadTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Build from a map of outcome to probability.
    ///
    /// The entries are copied; the table keeps no reference to `dist`. The
    /// outcome order of the table is the iteration order of `dist` at the time
    /// of the call.
    ///
    /// # Errors
    /// See [`build_from_pairs`](Self::build_from_pairs).
    pub fn build<T>(&self, dist: &HashMap<T, f64>) -> Result<AliasTable<T>, ProbError>
    where
        T: Eq + Hash + Clone,
    {
        self.build_from_pairs(dist.iter().map(|(o, &p)| (o.clone(), p)))
    }

    /// Build from any `(outcome, probability)` iterator. Outcome order is kept.
    ///
    /// # Errors
    /// * [`ProbError::Empty`] if there are no outcomes.
    /// * [`ProbError::Duplicate`] if an outcome appears twice.
    /// * [`ProbError::NotFinite`] if a probability is NaN or infinite.
    /// * [`ProbError::Negative`] if a probability is negative.
    /// * [`ProbError::BadSum`] if the probabilities do not sum to 1 within
    ///   the tolerance.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn build_from_pairs<T, I>(&self, pairs: I) -> Result<AliasTable<T>, ProbError>
    where
        T: Eq + Hash + Clone,
        I: IntoIterator<Item = (T, f64)>,
    {
        let pairs = pairs.into_iter();
        let (hint, _) = pairs.size_hint();
        let mut outcomes = Vec::with_capacity(hint);
        let mut dist = Vec::with_capacity(hint);
        let mut index = HashMap::with_capacity(hint);

        for (i, (o, p)) in pairs.enumerate() {
            if index.insert(o.clone(), i).is_some() {
                return Err(ProbError::Duplicate { index: i });
            }
            outcomes.push(o);
            dist.push(p);
        }

        let (prob, alias) = vose(&dist, self.tolerance)?;
        Ok(AliasTable {
            outcomes,
            index,
            dist,
            prob,
            alias,
        })
    }
}

fn validate(dist: &[f64], tolerance: f64) -> Result<(), ProbError> {
    if dist.is_empty() {
        return Err(ProbError::Empty);
    }

    let mut sum = 0.0f64;
    for (index, &value) in dist.iter().enumerate() {
        if !value.is_finite() {
            return Err(ProbError::NotFinite { index, value });
        }
        if value < 0.0 {
            return Err(ProbError::Negative { index, value });
        }
        sum += value;
    }
    if (sum - 1.0).abs() > tolerance {
        return Err(ProbError::BadSum { sum, tolerance });
    }
    Ok(())
}

/// Probability and alias columns for `dist`. A column that needs no alias
/// points at itself.
fn vose(dist: &[f64], tolerance: f64) -> Result<(Vec<f64>, Vec<usize>), ProbError> {
    validate(dist, tolerance)?;

    let n = dist.len();
    let mut scaled: Vec<f64> = dist.iter().map(|&p| p * n as f64).collect();

    let mut prob = vec![0.0f64; n];
    let mut alias = (0..n).collect::<Vec<_>>();

    let mut small = Vec::with_capacity(n);
    let mut large = Vec::with_capacity(n);

    for (i, &p) in scaled.iter().enumerate() {
        if p < 1.0 {
            small.push(i);
        } else {
            large.push(i);
        }
    }
    debug!(
        "building alias table: n={n} small={} large={}",
        small.len(),
        large.len()
    );

    while let (Some(&s), Some(&l)) = (small.last(), large.last()) {
        small.pop();
        large.pop();

        prob[s] = scaled[s]; // in [0,1)
        alias[s] = l;

        // Drift can push a donor a hair below zero.
        scaled[l] = ((scaled[l] + scaled[s]) - 1.0).max(0.0);
        trace!("column {s} aliased to {l}, donor left with {}", scaled[l]);

        if scaled[l] < 1.0 {
            small.push(l);
        } else {
            large.push(l);
        }
    }

    // Whatever is left is 1 up to rounding, whichever stack it sits on.
    let forced = small.len() + large.len();
    for i in small.into_iter().chain(large) {
        prob[i] = 1.0;
        alias[i] = i;
    }
    debug!("alias table built: {forced} columns set to probability 1");

    Ok((prob, alias))
}

/// Immutable probability/alias tables over a fixed sequence of outcomes.
///
/// Cheap to share: sampling only reads, so `&AliasTable<T>` can be handed to
/// any number of threads, each with its own RNG.
#[derive(Debug, Clone)]
pub struct AliasTable<T> {
    outcomes: Vec<T>,
    index: HashMap<T, usize>,
    dist: Vec<f64>,
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl<T> AliasTable<T>
where
    T: Eq + Hash + Clone,
{
    /// Build with the default [`TableBuilder`].
    pub fn new(dist: &HashMap<T, f64>) -> Result<Self, ProbError> {
        TableBuilder::new().build(dist)
    }

    /// Build from `(outcome, probability)` pairs with the default [`TableBuilder`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ProbError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        TableBuilder::new().build_from_pairs(pairs)
    }
}

impl<T> AliasTable<T>
where
    T: Eq + Hash,
{
    /// Cutoff probability of `outcome`'s column, or `None` for an unknown outcome.
    pub fn probability(&self, outcome: &T) -> Option<f64> {
        self.index.get(outcome).map(|&i| self.prob[i])
    }

    /// Alias of `outcome`'s column; `None` for unknown outcomes and for
    /// columns with probability 1.
    pub fn alias(&self, outcome: &T) -> Option<&T> {
        self.index
            .get(outcome)
            .and_then(|&i| self.alias_of(i))
    }

    /// The probability `outcome` was given at build time.
    pub fn weight(&self, outcome: &T) -> Option<f64> {
        self.index.get(outcome).map(|&i| self.dist[i])
    }
}

impl<T> AliasTable<T> {
    fn alias_of(&self, i: usize) -> Option<&T> {
        let a = self.alias[i];
        (a != i).then(|| &self.outcomes[a])
    }

    /// Draw a column index in O(1).
    #[inline]
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let i = rng.random_range(0..self.prob.len());
        let u: f64 = rng.random();
        if u < self.prob[i] { i } else { self.alias[i] }
    }

    /// Sample an outcome **by reference**.
    pub fn sample<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a T {
        &self.outcomes[self.sample_index(rng)]
    }

    /// Sample an outcome **by value** (clones the chosen element).
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Clone,
    {
        self.outcomes[self.sample_index(rng)].clone()
    }

    /// Outcomes in column order, fixed at build time.
    pub fn outcomes(&self) -> &[T] {
        &self.outcomes
    }

    /// `(outcome, probability, alias)` for every column, in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&T, f64, Option<&T>)> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .map(|(i, o)| (o, self.prob[i], self.alias_of(i)))
    }

    /// The distribution the table was built from, in column order.
    pub fn distribution(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        self.outcomes.iter().zip(self.dist.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.prob.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }
}
