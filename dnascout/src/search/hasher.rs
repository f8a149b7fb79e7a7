//! Base-2 polynomial rolling hash over raw nucleotide character codes.
//!
//! A window `w` of length `m` hashes to
//!
//! ```text
//! hash(w) = (w[0]·2^(m-1) + w[1]·2^(m-2) + ... + w[m-1]·2^0) mod MOD
//! ```
//!
//! where the symbols are the ASCII codes themselves (`b'A'` is 65), not a
//! compact 0–3 encoding. Keeping the raw codes makes hash values comparable
//! with other implementations of the same scheme.
//!
//! # Sign correction
//!
//! Sliding the window subtracts the leaving symbol's contribution before
//! doubling. Because the stored hash is already reduced mod `MOD`, that
//! subtraction can go below zero. The intermediate is held in an `i64` and
//! `MOD` is added back whenever it is negative, so the result never depends on
//! how a remainder of a negative number is signed.

/// Hash of one window, always in `[0, MOD)`.
pub type HashValue = u64;

/// Hash modulus, `2^31 - 1` (the largest signed 32-bit integer).
pub const MOD: u64 = i32::MAX as u64;

/// Hashes `window` from its least significant symbol upwards.
///
/// The power of two is doubled only before moving to the next, more
/// significant position, never after the leading symbol.
pub fn hash(window: &[u8]) -> HashValue {
    let mut acc = 0;
    let mut power = 1;

    for (i, &symbol) in window.iter().enumerate().rev() {
        acc = (acc + (u64::from(symbol) * power) % MOD) % MOD;
        if i > 0 {
            power = (power * 2) % MOD;
        }
    }

    acc
}

/// Returns `2^(window_len - 1) mod MOD`, the weight of a window's first symbol.
///
/// A zero-length window has no first symbol; its weight is taken as 1.
pub fn high_order_weight(window_len: usize) -> u64 {
    (1..window_len).fold(1, |weight, _| (weight * 2) % MOD)
}

/// Advances `old_hash` by one position: `old` leaves on the left, `new` enters
/// on the right.
///
/// The high-order weight is recomputed on every call. Use [`RollingHasher`]
/// to pay for it once per search.
pub fn slide(old: u8, old_hash: HashValue, new: u8, window_len: usize) -> HashValue {
    slide_with_weight(old, old_hash, new, high_order_weight(window_len))
}

#[inline]
fn slide_with_weight(old: u8, old_hash: HashValue, new: u8, weight: u64) -> HashValue {
    let removed = (u64::from(old) * weight) % MOD;

    // Both operands are below MOD < 2^31, so the i64 cannot overflow.
    let mut trimmed = old_hash as i64 - removed as i64;
    if trimmed < 0 {
        trimmed += MOD as i64;
    }

    (trimmed as u64 * 2 + u64::from(new)) % MOD
}

/// Rolling hasher bound to one window length.
///
/// The high-order weight is constant for a given window length, so it is
/// computed once here instead of on every [`slide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHasher {
    window_len: usize,
    high_order_weight: u64,
}

impl RollingHasher {
    /// Creates a hasher for windows of `window_len` symbols
    pub fn new(window_len: usize) -> Self {
        Self {
            window_len,
            high_order_weight: high_order_weight(window_len),
        }
    }

    /// Hashes a full window. `window` should be exactly `window_len` long.
    pub fn hash(&self, window: &[u8]) -> HashValue {
        debug_assert_eq!(window.len(), self.window_len);
        hash(window)
    }

    /// Same as the free [`slide`] but with the cached weight.
    #[inline]
    pub fn slide(&self, old: u8, old_hash: HashValue, new: u8) -> HashValue {
        slide_with_weight(old, old_hash, new, self.high_order_weight)
    }

    /// Iterates over the hash of every window of `text`, in offset order.
    pub fn windows<'a>(&self, text: &'a [u8]) -> WindowHashes<'a> {
        WindowHashes {
            hasher: *self,
            text,
            offset: 0,
            current: None,
        }
    }
}

/// Iterator returned by [`RollingHasher::windows`].
#[derive(Debug, Clone)]
pub struct WindowHashes<'a> {
    hasher: RollingHasher,
    text: &'a [u8],
    offset: usize,
    current: Option<HashValue>,
}

impl Iterator for WindowHashes<'_> {
    type Item = HashValue;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.hasher.window_len;
        if m == 0 || self.offset + m > self.text.len() {
            return None;
        }

        let next = match self.current {
            None => self.hasher.hash(&self.text[..m]),
            Some(prev) => self.hasher.slide(
                self.text[self.offset - 1],
                prev,
                self.text[self.offset + m - 1],
            ),
        };

        self.current = Some(next);
        self.offset += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let m = self.hasher.window_len;
        let remaining = if m == 0 {
            0
        } else {
            (self.text.len() + 1).saturating_sub(m + self.offset)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowHashes<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic pseudo-random nucleotide text.
    fn pseudo_random_dna(len: usize, seed: u64) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                b"ACGT"[(state >> 62) as usize]
            })
            .collect()
    }

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash(b""), 0);
        assert_eq!(hash(b"A"), 65);
        // 65*2 + 67
        assert_eq!(hash(b"AC"), 197);
        // 71*8 + 65*4 + 67*2 + 84
        assert_eq!(hash(b"GACT"), 1046);
    }

    #[test]
    fn test_hash_is_deterministic() {
        let pattern = pseudo_random_dna(1000, 7);
        assert_eq!(hash(&pattern), hash(&pattern));
        assert!(hash(&pattern) < MOD);
    }

    #[test]
    fn test_high_order_weight() {
        assert_eq!(high_order_weight(0), 1);
        assert_eq!(high_order_weight(1), 1);
        assert_eq!(high_order_weight(4), 8);
        assert_eq!(high_order_weight(31), 1 << 30);
        // 2^31 is congruent to 1 modulo 2^31 - 1
        assert_eq!(high_order_weight(32), 1);
        assert_eq!(high_order_weight(33), 2);
    }

    #[test]
    fn test_slide_matches_recompute_on_short_window() {
        let text = b"GATTACA";
        let m = 3;
        let mut h = hash(&text[..m]);
        for offset in 1..=text.len() - m {
            h = slide(text[offset - 1], h, text[offset + m - 1], m);
            assert_eq!(h, hash(&text[offset..offset + m]), "offset {offset}");
        }
    }

    #[test]
    fn test_slide_corrects_negative_intermediate() {
        // 0 - 65*4 goes negative and must be lifted by MOD before doubling:
        // ((MOD - 260) * 2 + 67) mod MOD == MOD - 453
        assert_eq!(slide(b'A', 0, b'C', 3), MOD - 453);
    }

    #[test]
    fn test_negative_branch_taken_on_real_windows() {
        // With 31-symbol windows the leading weight is 2^30, so a large share
        // of windows hash below the contribution being removed.
        let m = 31;
        let text = pseudo_random_dna(200, 42);
        let hasher = RollingHasher::new(m);

        let mut h = hasher.hash(&text[..m]);
        let mut corrected = 0;
        for offset in 1..=text.len() - m {
            let leaving = text[offset - 1];
            if h < (u64::from(leaving) * high_order_weight(m)) % MOD {
                corrected += 1;
            }
            h = hasher.slide(leaving, h, text[offset + m - 1]);
            assert_eq!(h, hash(&text[offset..offset + m]), "offset {offset}");
        }
        assert!(corrected > 0, "sign correction was never exercised");
    }

    #[test]
    fn test_cached_weight_matches_free_slide() {
        let text = pseudo_random_dna(300, 3);
        for m in [1, 2, 16, 31, 32, 33, 64] {
            let hasher = RollingHasher::new(m);
            let h = hasher.hash(&text[..m]);
            assert_eq!(
                hasher.slide(text[0], h, text[m]),
                slide(text[0], h, text[m], m),
                "window {m}"
            );
        }
    }

    #[test]
    fn test_window_hashes_reproduce_recompute() {
        let text = pseudo_random_dna(500, 11);
        for m in [1, 5, 31, 32, 100, 500] {
            let hasher = RollingHasher::new(m);
            let rolled: Vec<_> = hasher.windows(&text).collect();
            let recomputed: Vec<_> = text.windows(m).map(hash).collect();
            assert_eq!(rolled, recomputed, "window {m}");
        }
    }

    #[test]
    fn test_window_hashes_len() {
        let hasher = RollingHasher::new(3);
        assert_eq!(hasher.windows(b"ACGTA").len(), 3);
        assert_eq!(hasher.windows(b"AC").len(), 0);
        assert_eq!(hasher.windows(b"AC").next(), None);
        assert_eq!(RollingHasher::new(0).windows(b"ACGT").next(), None);
    }
}
