//! # vose_sampler
//!
//! Sampling from a fixed discrete distribution in O(1) per draw.
//!
//! This crate implements
//! [Vose's Alias Method](https://www.keithschwarz.com/darts-dice-coins/):
//! an O(n) pass turns a distribution into a probability table and an alias
//! table, after which every draw costs one uniform column pick and one
//! biased coin flip.
//!
//! ## Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_pcg::Pcg32;
//! use vose_sampler::{AliasTable, Sampler};
//!
//! # fn main() -> Result<(), vose_sampler::ProbError> {
//! let table = AliasTable::from_pairs([("H", 0.2), ("T", 0.8)])?;
//!
//! let mut sampler = Sampler::new(&table, Pcg32::seed_from_u64(7));
//! let flip = sampler.sample_one();      // &&str
//! let flips = sampler.sample_n(10)?;    // Vec<&str>
//! assert_eq!(flips.len(), 10);
//! # let _ = flip;
//! # Ok(()) }
//! ```
//!
//! ## From a corpus
//!
//! ```rust,no_run
//! use vose_sampler::{AliasTable, Sampler, corpus};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let words = corpus::get_words("alice.txt")?;
//! let table = AliasTable::new(&corpus::sample_to_dist(words))?;
//! let mut sampler = Sampler::new(&table, rand::rng());
//! println!("{}", sampler.sample_one());
//! # Ok(()) }
//! ```
//!
//! ## Performance
//! * **Build**: O(n) time and space.
//! * **Sample**: O(1) per draw (2 random numbers, 1 branch).
//!
//! ## Gotchas
//! * Probabilities must be finite, non-negative, and sum to 1 within
//!   [`DEFAULT_TOLERANCE`] (see [`TableBuilder::with_tolerance`]). They are not
//!   renormalized.
//! * Randomness is always passed in. Seed a `rand_pcg` generator for
//!   reproducible draws.
//! * This is for *fixed* distributions. If the distribution changes, rebuild.

mod error;
mod sampler;
mod vose;

pub mod corpus;

pub use error::{CorpusError, ProbError};
pub use sampler::{SampleIter, Sampler};
pub use vose::{AliasTable, DEFAULT_TOLERANCE, TableBuilder};
