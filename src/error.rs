use std::path::PathBuf;

/// Errors raised while building an [`AliasTable`](crate::AliasTable) or
/// drawing from a [`Sampler`](crate::Sampler).
///
/// `InvalidCount` and `CountTooLarge` reject a sample size, `BadTolerance` a
/// builder setting; the rest describe an invalid distribution (see
/// [`ProbError::is_invalid_distribution`]).
#[derive(Debug, Clone, PartialEq)]
pub enum ProbError {
    Empty,
    Negative { index: usize, value: f64 },
    NotFinite { index: usize, value: f64 },
    Duplicate { index: usize },
    BadSum { sum: f64, tolerance: f64 },
    InvalidCount(i64),
    CountTooLarge(i64),
    BadTolerance(f64),
}

impl ProbError {
    /// `true` for every variant that rejects the distribution itself.
    pub fn is_invalid_distribution(&self) -> bool {
        !matches!(
            self,
            ProbError::InvalidCount(_) | ProbError::CountTooLarge(_) | ProbError::BadTolerance(_)
        )
    }
}

impl std::fmt::Display for ProbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbError::Empty => write!(f, "distribution is empty"),
            ProbError::Negative { index, value } => {
                write!(
                    f,
                    "distribution contains a negative probability at index {index}: {value}"
                )
            }
            ProbError::NotFinite { index, value } => {
                write!(
                    f,
                    "distribution contains a non-finite probability at index {index}: {value}"
                )
            }
            ProbError::Duplicate { index } => {
                write!(f, "distribution repeats an outcome at index {index}")
            }
            ProbError::BadSum { sum, tolerance } => {
                write!(
                    f,
                    "probabilities sum to {sum}, expected 1 (tolerance {tolerance})"
                )
            }
            ProbError::InvalidCount(count) => write!(
                f,
                "please enter a non-negative integer for the number of samples desired. size={count}"
            ),
            ProbError::CountTooLarge(count) => {
                write!(f, "cannot hold {count} samples in memory")
            }
            ProbError::BadTolerance(tolerance) => write!(
                f,
                "tolerance must be finite and non-negative, got {tolerance}"
            ),
        }
    }
}

impl std::error::Error for ProbError {}

/// Errors raised while reading a corpus with [`get_words`](crate::corpus::get_words).
#[derive(Debug)]
pub enum CorpusError {
    Empty { path: PathBuf },
    Binary { path: PathBuf },
    Io { path: PathBuf, source: std::io::Error },
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::Empty { path } => write!(
                f,
                "please provide a file containing a corpus (not an empty file): {}",
                path.display()
            ),
            CorpusError::Binary { path } => write!(
                f,
                "please provide a file containing text-based data: {}",
                path.display()
            ),
            CorpusError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
