use super::cache::{read_cache, write_cache};
use super::fallback::pseudo_vector;
use crate::errors::{OracleError, Result};

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

const PROGRESS_EVERY: usize = 100_000;

/// Where the table contents came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconSource {
    /// Parsed from the whitespace-delimited text file.
    Text,
    /// Read back from the binary cache.
    Cache,
    /// Source file absent; every lookup falls back to pseudo-vectors.
    Missing,
    /// Built in memory (tests, toy lexicons).
    Memory,
}

/// Counters collected while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub source: LexiconSource,
    pub entries: usize,
    pub malformed_lines: usize,
}

/// Immutable word -> vector table with deterministic fallback for unknown words.
#[derive(Debug)]
pub struct LexiconStore {
    dimension: usize,
    vectors: HashMap<String, Vec<f32>>,
    stats: LoadStats,
}

impl LexiconStore {
    /// A store with no entries. Every lookup returns a fallback vector.
    pub fn empty(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: HashMap::new(),
            stats: LoadStats {
                source: LexiconSource::Memory,
                entries: 0,
                malformed_lines: 0,
            },
        }
    }

    /// Builds a store from in-memory pairs. Words are case-folded; the first
    /// occurrence of a folded word wins.
    pub fn from_entries<I, S>(dimension: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: AsRef<str>,
    {
        let mut vectors = HashMap::new();
        for (word, vector) in entries {
            if vector.len() != dimension {
                return Err(OracleError::Dimension {
                    expected: dimension,
                    actual: vector.len(),
                });
            }
            vectors.entry(word.as_ref().to_lowercase()).or_insert(vector);
        }

        let entries = vectors.len();
        Ok(Self {
            dimension,
            vectors,
            stats: LoadStats {
                source: LexiconSource::Memory,
                entries,
                malformed_lines: 0,
            },
        })
    }

    /// Parses `<word> <v1> ... <vD>` lines. Lines with the wrong token count or an
    /// unparsable float are skipped and counted.
    pub fn parse<R: BufRead>(reader: R, dimension: usize) -> Result<Self> {
        let started = Instant::now();
        let mut vectors: HashMap<String, Vec<f32>> = HashMap::new();
        let mut malformed_lines = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    malformed_lines += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match parse_line(&line, dimension) {
                Some((word, vector)) => {
                    vectors.entry(word.to_lowercase()).or_insert(vector);
                }
                None => malformed_lines += 1,
            }

            if (line_no + 1) % PROGRESS_EVERY == 0 {
                tracing::debug!("Lexicon load: {} lines read", line_no + 1);
            }
        }

        let entries = vectors.len();
        tracing::info!(
            "Parsed lexicon: {} entries, {} malformed lines skipped, {:?} elapsed",
            entries,
            malformed_lines,
            started.elapsed()
        );

        Ok(Self {
            dimension,
            vectors,
            stats: LoadStats {
                source: LexiconSource::Text,
                entries,
                malformed_lines,
            },
        })
    }

    /// Loads the text table at `path`. A missing file yields an empty store and a
    /// single warning; it is not an error.
    pub fn load(path: &Path, dimension: usize) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                "Lexicon file not found at {}. Using fallback vectors for every word.",
                path.display()
            );
            let mut store = Self::empty(dimension);
            store.stats.source = LexiconSource::Missing;
            return Ok(store);
        }

        tracing::info!("Loading lexicon from {}", path.display());
        let file = File::open(path)?;
        Self::parse(BufReader::new(file), dimension)
    }

    /// Loads through the binary cache at `cache_path`. A cache that cannot be
    /// read or has the wrong dimensionality is discarded and rebuilt from `path`.
    pub fn load_cached(path: &Path, cache_path: &Path, dimension: usize) -> Result<Self> {
        if cache_path.exists() {
            match read_cache(cache_path, dimension) {
                Ok(vectors) => {
                    let entries = vectors.len();
                    tracing::info!(
                        "Loaded cached lexicon from {} ({} entries)",
                        cache_path.display(),
                        entries
                    );
                    return Ok(Self {
                        dimension,
                        vectors,
                        stats: LoadStats {
                            source: LexiconSource::Cache,
                            entries,
                            malformed_lines: 0,
                        },
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        "Discarding lexicon cache {}: {}",
                        cache_path.display(),
                        e
                    );
                }
            }
        }

        let store = Self::load(path, dimension)?;

        if store.stats.source == LexiconSource::Text && !store.is_empty() {
            match write_cache(cache_path, dimension, &store.vectors) {
                Ok(()) => tracing::info!("Wrote lexicon cache to {}", cache_path.display()),
                Err(e) => tracing::warn!(
                    "Failed to write lexicon cache {}: {}",
                    cache_path.display(),
                    e
                ),
            }
        }

        Ok(store)
    }

    /// Vector for `word` after case folding, or its deterministic fallback.
    pub fn lookup(&self, word: &str) -> Cow<'_, [f32]> {
        let folded = word.to_lowercase();
        match self.vectors.get(&folded) {
            Some(vector) => Cow::Borrowed(vector.as_slice()),
            None => Cow::Owned(pseudo_vector(&folded, self.dimension)),
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(&word.to_lowercase())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }
}

fn parse_line(line: &str, dimension: usize) -> Option<(&str, Vec<f32>)> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?;

    let mut vector = Vec::with_capacity(dimension);
    for token in tokens {
        if vector.len() == dimension {
            return None;
        }
        let value = token.parse::<f32>().ok().filter(|v| v.is_finite())?;
        vector.push(value);
    }

    (vector.len() == dimension).then_some((word, vector))
}
