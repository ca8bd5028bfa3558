//! In-Memory Indexed Store
//!
//! `ReaderIndices` parses one integer per line from any `Read` source and keeps
//! them in a boxed slice that is never mutated afterwards. Lookups are an
//! iterative binary search with a tolerance fallback on a miss.

use super::cancel::{CancelSignal, CancelToken};
use super::error::{IndexError, Result};
use super::repository::Indices;
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Divisor for the maximal allowed deviation of a tolerance match.
///
/// A neighbour is accepted when `|value - neighbour| <= value / MAX_DEVIATION_DIVISOR`.
/// For small or negative values this tolerance is zero or negative, so only
/// exact matches are found there.
pub const MAX_DEVIATION_DIVISOR: i64 = 10;

/// Sorted integers parsed from a line-oriented source.
///
/// Ascending order is assumed, not checked.
#[derive(Debug, Clone, Default)]
pub struct ReaderIndices {
    values: Box<[i64]>,
}

impl ReaderIndices {
    /// Parses one base-10 `i64` per line.
    ///
    /// Empty lines are skipped and a trailing `\r` is stripped. The first line
    /// that does not parse aborts the whole load with `InvalidFormat`; a failing
    /// reader aborts it with `SourceRead`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        tracing::debug!("Start parsing indices from reader");

        let mut values = Vec::new();
        for (line_no, line) in BufReader::new(reader).split(b'\n').enumerate() {
            let mut line = line.map_err(|e| {
                tracing::error!("Error while reading indices source: {}", e);
                IndexError::SourceRead(e)
            })?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if line.is_empty() {
                continue;
            }

            let text = String::from_utf8_lossy(&line);
            let value = text.parse::<i64>().map_err(|source| {
                tracing::error!(
                    "Error while parsing line {} to int: {:?} ({})",
                    line_no + 1,
                    text,
                    source
                );
                IndexError::InvalidFormat {
                    line: line_no + 1,
                    content: text.to_string(),
                    source,
                }
            })?;
            values.push(value);
        }

        tracing::debug!("End parsing indices from reader, parsed {} values", values.len());
        Ok(Self::from_values(values))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            tracing::error!("Failed to open indices file {}: {}", path.display(), e);
            IndexError::SourceRead(e)
        })?;
        Self::from_reader(file)
    }

    /// Wraps an already sorted sequence.
    pub fn from_values(values: Vec<i64>) -> Self {
        Self {
            values: values.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The lookup behind `Indices::search`, generic over the cancellation source.
    ///
    /// `cancel` is polled once before every comparison.
    pub fn search_with<S: CancelSignal + ?Sized>(&self, value: i64, cancel: &S) -> Result<usize> {
        tracing::debug!("Start searching index for value {}", value);

        if self.values.is_empty() {
            tracing::error!("Values slice is empty");
            return Err(IndexError::NotFound { value });
        }

        let last = (self.values.len() - 1) as isize;
        let (mut l, mut r) = (0isize, last);
        while l <= r {
            if let Some(cause) = cancel.cause() {
                tracing::error!("Search for value {} stopped: {}", value, cause);
                return Err(IndexError::Canceled(cause));
            }

            let mid = l + (r - l) / 2;
            match self.values[mid as usize].cmp(&value) {
                Ordering::Equal => {
                    tracing::debug!("Found exact index {} for value {}", mid, value);
                    return Ok(mid as usize);
                }
                Ordering::Greater => r = mid - 1,
                Ordering::Less => l = mid + 1,
            }
        }

        tracing::debug!("No exact match for {}, trying closest neighbours", value);

        // l and r have crossed: l may sit one past the end, r one before the start.
        let l = l.clamp(0, last) as usize;
        let r = r.clamp(0, last) as usize;
        let max_deviation = value / MAX_DEVIATION_DIVISOR;

        if within_deviation(value, self.values[r], max_deviation) {
            tracing::debug!("Right neighbour {} chosen for value {}", r, value);
            return Ok(r);
        }
        if within_deviation(value, self.values[l], max_deviation) {
            tracing::debug!("Left neighbour {} chosen for value {}", l, value);
            return Ok(l);
        }

        tracing::error!(
            "Couldn't find closest value for {} (left={}, right={})",
            value,
            l,
            r
        );
        Err(IndexError::NotFound { value })
    }
}

impl Indices for ReaderIndices {
    fn search(&self, value: i64, cancel: &CancelToken) -> Result<usize> {
        self.search_with(value, cancel)
    }
}

fn within_deviation(value: i64, candidate: i64, max_deviation: i64) -> bool {
    max_deviation >= 0 && value.abs_diff(candidate) <= max_deviation as u64
}
