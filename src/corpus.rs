//! Turning text corpora and observed samples into distributions.

use std::collections::HashMap;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use log::debug;

use crate::error::CorpusError;

/// How many leading bytes are inspected when deciding whether a file is text.
pub const TEXT_PROBE_LEN: usize = 2048;

/// Same byte set as `file(1)` treats as text.
fn is_text_byte(b: u8) -> bool {
    matches!(b, 7 | 8 | 9 | 10 | 12 | 13 | 27 | 0x20..=0xff)
}

/// `true` if the first [`TEXT_PROBE_LEN`] bytes contain only text bytes.
pub fn looks_like_text(bytes: &[u8]) -> bool {
    bytes.iter().take(TEXT_PROBE_LEN).copied().all(is_text_byte)
}

/// Read `path` and split it into whitespace-separated words.
///
/// # Errors
/// * [`CorpusError::Empty`] if the file has zero bytes.
/// * [`CorpusError::Binary`] if the start of the file is not text.
/// * [`CorpusError::Io`] if the file cannot be read.
pub fn get_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();
    let io = |source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    };

    if fs::metadata(path).map_err(io)?.len() == 0 {
        return Err(CorpusError::Empty {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(io)?;
    if !looks_like_text(&bytes) {
        return Err(CorpusError::Binary {
            path: path.to_path_buf(),
        });
    }

    let words: Vec<String> = String::from_utf8_lossy(&bytes)
        .split_whitespace()
        .map(str::to_owned)
        .collect();
    debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Empirical distribution of an observed sample: each distinct value maps to
/// its count divided by the sample size. An empty sample gives an empty map.
pub fn sample_to_dist<T, I>(sample: I) -> HashMap<T, f64>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, u64> = HashMap::new();
    let mut total = 0u64;
    for o in sample {
        *counts.entry(o).or_default() += 1;
        total += 1;
    }

    let total = total as f64;
    counts
        .into_iter()
        .map(|(o, c)| (o, c as f64 / total))
        .collect()
}
