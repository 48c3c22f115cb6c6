//! Byte-string ordering shared by every ordered structure in the store.
//!
//! Keys are compared byte-by-byte as unsigned values. When one key is a prefix of
//! the other, the longer key only sorts after the shorter one if its extra tail
//! contains a non-zero byte; a tail made entirely of zero bytes compares equal.
//! `[1]` and `[1, 0]` are therefore the same key, while `[1] < [1, 1]`.

use std::cmp::Ordering;

/// Compare two byte strings.
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    let shared = a.len().min(b.len());

    for (x, y) in a[..shared].iter().zip(&b[..shared]) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }

    if a[shared..].iter().any(|&byte| byte != 0) {
        return Ordering::Greater;
    }
    if b[shared..].iter().any(|&byte| byte != 0) {
        return Ordering::Less;
    }

    Ordering::Equal
}

/// Compare two possibly-absent byte strings. An absent string sorts before
/// every present one, including the empty string.
pub fn compare_opt(a: Option<&[u8]>, b: Option<&[u8]>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare(a, b),
    }
}

/// Equality under [`compare`].
pub fn equivalent(a: &[u8], b: &[u8]) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Index of the first element of `sorted` that is not less than `key`, or
/// `sorted.len()` if every element is less.
pub fn lower_bound<T: AsRef<[u8]>>(sorted: &[T], key: &[u8]) -> usize {
    sorted.partition_point(|probe| compare(probe.as_ref(), key) == Ordering::Less)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_unsigned_bytes() {
        assert_eq!(compare(&[0x7f], &[0x80]), Ordering::Less);
        assert_eq!(compare(&[0xff], &[0x00]), Ordering::Greater);
        assert_eq!(compare(&[1, 2, 3], &[1, 2, 4]), Ordering::Less);
        assert_eq!(compare(b"abc", b"abc"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_ordering() {
        assert_eq!(compare(&[1], &[1, 1]), Ordering::Less);
        assert_eq!(compare(&[1, 1], &[1]), Ordering::Greater);
        assert_eq!(compare(b"", &[0, 0, 1]), Ordering::Less);
    }

    #[test]
    fn test_trailing_zero_bytes_compare_equal() {
        // Compatibility quirk: a zero-filled tail does not make a key larger.
        assert_eq!(compare(&[1], &[1, 0]), Ordering::Equal);
        assert_eq!(compare(&[1, 0, 0], &[1]), Ordering::Equal);
        assert_eq!(compare(b"", &[0]), Ordering::Equal);
        assert!(equivalent(&[0, 0, 1, 0], &[0, 0, 1]));
        assert!(!equivalent(&[0, 0, 1, 0, 2], &[0, 0, 1]));
    }

    #[test]
    fn test_absent_sorts_first() {
        let empty: &[u8] = b"";
        assert_eq!(compare_opt(None, Some(empty)), Ordering::Less);
        assert_eq!(compare_opt(Some(empty), None), Ordering::Greater);
        assert_eq!(compare_opt(None, None), Ordering::Equal);
        assert_eq!(compare_opt(Some(&[2][..]), Some(&[1][..])), Ordering::Greater);
    }

    #[test]
    fn test_lower_bound() {
        let keys: Vec<Vec<u8>> = vec![vec![0, 0, 1], vec![0, 0, 2], vec![0, 0, 3], vec![0, 0, 10]];
        assert_eq!(lower_bound(&keys, &[0, 0, 0]), 0);
        assert_eq!(lower_bound(&keys, &[0, 0, 2]), 1);
        assert_eq!(lower_bound(&keys, &[0, 0, 4]), 3);
        assert_eq!(lower_bound(&keys, &[0, 0, 11]), 4);
        assert_eq!(lower_bound(&keys, &[0, 0, 2, 0]), 1);
    }

    #[test]
    fn test_order_is_consistent_on_random_input() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let samples: Vec<Vec<u8>> = (0..200)
            .map(|_| {
                let len = rng.gen_range(0..5);
                // Small alphabet so prefixes and zero tails show up often.
                (0..len).map(|_| rng.gen_range(0..3u8)).collect()
            })
            .collect();

        for a in &samples {
            assert_eq!(compare(a, a), Ordering::Equal);
            for b in &samples {
                assert_eq!(compare(a, b), compare(b, a).reverse());
                for c in samples.iter().step_by(7) {
                    if compare(a, b) != Ordering::Greater && compare(b, c) != Ordering::Greater {
                        assert_ne!(compare(a, c), Ordering::Greater, "{:?} {:?} {:?}", a, b, c);
                    }
                }
            }
        }

        let mut sorted = samples.clone();
        sorted.sort_by(|a, b| compare(a, b));
        for pair in sorted.windows(2) {
            assert_ne!(compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }
}
