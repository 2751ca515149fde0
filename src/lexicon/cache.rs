//! Binary Lexicon Cache
//!
//! Parsing a full GloVe table takes minutes; the parsed table is written once to a
//! bincode file and read back on later startups.
//!
//! ## Layout
//! `magic (4 bytes) | version (u32) | dimension (u32) | entries`, where `entries` is a
//! length-prefixed sequence of `(word, [f32; dimension])` records. bincode writes
//! every string and float array with a `u64` length prefix, little-endian.

use crate::errors::{OracleError, Result};

use bincode::Options;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub const CACHE_MAGIC: [u8; 4] = *b"ICLX";
pub const CACHE_VERSION: u32 = 1;

#[derive(Serialize)]
struct CacheWrite<'a> {
    magic: [u8; 4],
    version: u32,
    dimension: u32,
    entries: Vec<(&'a str, &'a [f32])>,
}

#[derive(Deserialize)]
struct CacheHeader {
    magic: [u8; 4],
    version: u32,
    dimension: u32,
}

/// Fixed-width little-endian encoding, matching `bincode::serialize_into`, with every
/// length prefix bounded by the size of the file being read.
fn decode_options(limit: u64) -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(limit)
}

/// Writes `vectors` to `path`, sorted by word so identical tables give identical files.
pub fn write_cache(
    path: &Path,
    dimension: usize,
    vectors: &HashMap<String, Vec<f32>>,
) -> Result<()> {
    let dimension_tag = u32::try_from(dimension)
        .map_err(|_| OracleError::Cache(format!("dimension {} does not fit u32", dimension)))?;

    let mut entries: Vec<(&str, &[f32])> = vectors
        .iter()
        .map(|(word, vector)| (word.as_str(), vector.as_slice()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let record = CacheWrite {
        magic: CACHE_MAGIC,
        version: CACHE_VERSION,
        dimension: dimension_tag,
        entries,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, &record)?;
    writer.flush()?;

    Ok(())
}

/// Reads a cache file, rejecting it if the header or any entry disagrees with
/// `expected_dimension`. The header is checked before any entry is decoded.
pub fn read_cache(path: &Path, expected_dimension: usize) -> Result<HashMap<String, Vec<f32>>> {
    let file = File::open(path)?;
    let file_len = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    let header: CacheHeader = decode_options(file_len).deserialize_from(&mut reader)?;

    if header.magic != CACHE_MAGIC {
        return Err(OracleError::Cache("bad magic".to_string()));
    }
    if header.version != CACHE_VERSION {
        return Err(OracleError::Cache(format!(
            "unsupported version {} (expected {})",
            header.version, CACHE_VERSION
        )));
    }
    if header.dimension as usize != expected_dimension {
        return Err(OracleError::Dimension {
            expected: expected_dimension,
            actual: header.dimension as usize,
        });
    }

    let entries: Vec<(String, Vec<f32>)> =
        decode_options(file_len).deserialize_from(&mut reader)?;

    let mut vectors = HashMap::with_capacity(entries.len());
    for (word, vector) in entries {
        if vector.len() != expected_dimension {
            return Err(OracleError::Dimension {
                expected: expected_dimension,
                actual: vector.len(),
            });
        }
        vectors.insert(word, vector);
    }

    Ok(vectors)
}
