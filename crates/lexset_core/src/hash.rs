use crate::consts::BUCKET_COUNT;

/// Maps a word to its bucket: sum of the ASCII-lowercased bytes, reduced
/// modulo the bucket count. Case-insensitive by construction, so
/// `"Apple"` and `"apple"` land in the same bucket. Anagrams collide as
/// well; chains absorb that.
#[inline]
pub fn bucket_index(word: &str) -> usize {
    let total: u64 = word.bytes().map(|b| b.to_ascii_lowercase() as u64).sum();
    (total % BUCKET_COUNT as u64) as usize
}
