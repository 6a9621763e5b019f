// crates/lexset_core/src/consts.rs

/// Number of buckets in the table. Chosen empirically for short average
/// chains on word-list sized inputs.
pub const BUCKET_COUNT: usize = 10_000;

/// Longest accepted word, in bytes.
pub const MAX_WORD_LEN: usize = 45;

const _: () = { assert!(BUCKET_COUNT > 0 && MAX_WORD_LEN > 0); };
