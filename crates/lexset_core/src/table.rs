use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::consts::{BUCKET_COUNT, MAX_WORD_LEN};
use crate::errors::{LexError, Result};
use crate::hash::bucket_index;

/// A single stored word. Immutable once inserted; removed only in bulk by
/// [`WordTable::unload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
}

impl Entry {
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Summary of one load pass over a token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Tokens inserted into the table.
    pub inserted: usize,
    /// Tokens rejected for exceeding [`MAX_WORD_LEN`].
    pub skipped: usize,
}

/// Bucket occupancy snapshot, for tuning the bucket count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    pub entries: usize,
    pub used_buckets: usize,
    pub longest_chain: usize,
    /// Entries divided by bucket count, i.e. the average chain length.
    pub load_factor: f64,
}

/// Chained hash table over words with case-insensitive membership queries.
///
/// Duplicates are kept: inserting the same word twice yields two entries,
/// and the entry counter counts both. Chain order is an implementation
/// detail; callers must not depend on it.
pub struct WordTable {
    buckets: Vec<Vec<Entry>>,
    entries: usize,
    loaded: bool,
}

impl Default for WordTable {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTable {
    /// Create an empty table with [`BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKET_COUNT],
            entries: 0,
            loaded: false,
        }
    }

    /// Insert one word into its bucket's chain.
    ///
    /// Words longer than [`MAX_WORD_LEN`] bytes are rejected with
    /// [`LexError::WordTooLong`]. Allocation failure surfaces as
    /// [`LexError::OutOfMemory`] and leaves the table unchanged.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        if word.len() > MAX_WORD_LEN {
            return Err(LexError::WordTooLong {
                len: word.len(),
                max: MAX_WORD_LEN,
            });
        }
        let bucket = &mut self.buckets[bucket_index(word)];
        bucket.try_reserve(1)?;
        let mut owned = String::new();
        owned.try_reserve_exact(word.len())?;
        owned.push_str(word);
        bucket.push(Entry { word: owned });
        self.entries += 1;
        Ok(())
    }

    /// Load whitespace-delimited tokens from a reader.
    ///
    /// Overlong tokens are skipped and counted in the outcome; the load
    /// continues with the remaining tokens. Read and allocation errors
    /// abort the load, leaving every token inserted so far in place —
    /// callers that need a clean table after a failed load call
    /// [`unload`](Self::unload) and retry.
    ///
    /// Loads accumulate: calling this twice without an intervening
    /// `unload` keeps the entries of both passes.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<LoadOutcome> {
        let mut outcome = LoadOutcome::default();
        for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                match self.insert(token) {
                    Ok(()) => outcome.inserted += 1,
                    Err(LexError::WordTooLong { .. }) => outcome.skipped += 1,
                    Err(e) => return Err(e),
                }
            }
        }
        self.loaded = true;
        Ok(outcome)
    }

    /// Load a word-list file, one or more tokens per line.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome> {
        let f = File::open(path)?;
        self.load_from_reader(BufReader::new(f))
    }

    /// Case-insensitive membership query. Scans exactly one bucket.
    ///
    /// Never allocates; a word longer than [`MAX_WORD_LEN`] cannot have
    /// been stored and returns `false` without hashing.
    pub fn check(&self, word: &str) -> bool {
        if word.len() > MAX_WORD_LEN {
            return false;
        }
        self.buckets[bucket_index(word)]
            .iter()
            .any(|e| e.word.eq_ignore_ascii_case(word))
    }

    /// Number of entries inserted since the table was last emptied.
    /// Duplicates count individually.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Whether any load has completed since construction or the last
    /// `unload`. Distinguishes a never-loaded table from one that loaded
    /// zero tokens.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Drop every entry and reset the counter. Idempotent; safe on an
    /// already-empty table.
    pub fn unload(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.entries = 0;
        self.loaded = false;
    }

    /// Walk the buckets and report occupancy.
    pub fn stats(&self) -> TableStats {
        let mut used_buckets = 0;
        let mut longest_chain = 0;
        for bucket in &self.buckets {
            if !bucket.is_empty() {
                used_buckets += 1;
            }
            longest_chain = longest_chain.max(bucket.len());
        }
        TableStats {
            entries: self.entries,
            used_buckets,
            longest_chain,
            load_factor: self.entries as f64 / BUCKET_COUNT as f64,
        }
    }
}
