use rand::Rng;

use crate::{error::ProbError, vose::AliasTable};

/// Draws outcomes from a borrowed [`AliasTable`] with an injected RNG.
///
/// The RNG is owned by the sampler; pass `&mut rng` to keep using it
/// afterwards. Several samplers may borrow the same table at once.
#[derive(Debug)]
pub struct Sampler<'a, T, R> {
    table: &'a AliasTable<T>,
    rng: R,
}

impl<'a, T, R: Rng> Sampler<'a, T, R> {
    pub fn new(table: &'a AliasTable<T>, rng: R) -> Self {
        Self { table, rng }
    }

    pub fn table(&self) -> &'a AliasTable<T> {
        self.table
    }

    /// Give the RNG back.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// One draw: a uniform column, then a biased coin between the column's
    /// own outcome and its alias.
    #[inline]
    pub fn sample_one(&mut self) -> &'a T {
        self.table.sample(&mut self.rng)
    }

    /// `count` independent draws in generation order.
    ///
    /// # Errors
    /// * [`ProbError::InvalidCount`] if `count` is negative. Zero yields an
    ///   empty vector.
    /// * [`ProbError::CountTooLarge`] if `count` draws cannot be allocated.
    pub fn sample_n(&mut self, count: i64) -> Result<Vec<T>, ProbError>
    where
        T: Clone,
    {
        if count < 0 {
            return Err(ProbError::InvalidCount(count));
        }
        let n = usize::try_from(count).map_err(|_| ProbError::CountTooLarge(count))?;

        let mut draws = Vec::new();
        draws
            .try_reserve_exact(n)
            .map_err(|_| ProbError::CountTooLarge(count))?;
        draws.extend((0..n).map(|_| self.sample_one().clone()));
        Ok(draws)
    }

    /// Endless stream of draws.
    pub fn sample_iter(self) -> SampleIter<'a, T, R> {
        SampleIter { sampler: self }
    }
}

/// Iterator returned by [`Sampler::sample_iter`]. Never ends.
#[derive(Debug)]
pub struct SampleIter<'a, T, R> {
    sampler: Sampler<'a, T, R>,
}

impl<'a, T, R: Rng> Iterator for SampleIter<'a, T, R> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.sampler.sample_one())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
