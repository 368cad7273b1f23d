//! Multiplicative hashing of numeric keys onto a fixed number of buckets

/// Fractional part of the golden ratio, the multiplier of the hash function
pub const GOLDEN_RATIO_FRACTION: f64 = 0.618_033_988_7;

/// A key that can be placed by the multiplicative hash.
///
/// The hash only needs the key's numeric value, so any type that can present
/// itself as an `f64` and compare for equality qualifies. Implemented for all
/// primitive integer types. Values above 2^53 lose precision in the
/// conversion, which only affects their bucket placement, never correctness.
pub trait MultiplicativeKey: Eq {
    /// Returns the numeric value fed into the hash
    fn to_f64(&self) -> f64;
}

/// Implements `MultiplicativeKey` for primitive integers
macro_rules! impl_multiplicative_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MultiplicativeKey for $ty {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_multiplicative_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Maps `key` to a bucket in `[0, bucket_count)`.
///
/// The fractional part of `key * A` is taken as `product - trunc(product)`, so it is
/// negative for negative keys, and the scaled result is truncated toward zero. A
/// negative raw index is wrapped with a Euclidean remainder; non-negative keys never
/// need the wrap. A `bucket_count` of zero yields 0.
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
pub fn bucket_index<K: MultiplicativeKey + ?Sized>(key: &K, bucket_count: usize) -> usize {
    let Ok(count) = i64::try_from(bucket_count) else {
        return 0;
    };
    if count == 0 {
        return 0;
    }

    let product = key.to_f64() * GOLDEN_RATIO_FRACTION;
    let fractional = product - product.trunc();
    let raw = (bucket_count as f64 * fractional) as i64;

    usize::try_from(raw.rem_euclid(count)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_indices_for_ten_buckets() {
        let expected = [6, 2, 8, 4, 0, 7, 3, 9, 5, 1, 7, 4, 0, 6, 2, 8, 5, 1, 7, 3];
        for (key, &index) in (1..=20).zip(expected.iter()) {
            assert_eq!(bucket_index(&key, 10), index, "key {key}");
        }
    }

    #[test]
    fn test_zero_key_lands_in_first_bucket() {
        assert_eq!(bucket_index(&0_i32, 10), 0);
    }

    #[test]
    fn test_negative_keys_are_wrapped() {
        // -1 * A = -0.618.., scaled and truncated to -6, wrapped to 4
        assert_eq!(bucket_index(&-1_i32, 10), 4);
        assert_eq!(bucket_index(&-7_i64, 10), 7);
        assert_eq!(bucket_index(&-5_i16, 10), 0);
    }

    #[test]
    fn test_integer_widths_agree() {
        assert_eq!(bucket_index(&9_u8, 10), bucket_index(&9_u64, 10));
        assert_eq!(bucket_index(&9_i16, 10), bucket_index(&9_usize, 10));
    }

    #[test]
    fn test_single_bucket() {
        assert_eq!(bucket_index(&12345_u32, 1), 0);
    }

    proptest! {
        #[test]
        fn prop_index_in_range(key in any::<i32>(), buckets in 1_usize..512) {
            prop_assert!(bucket_index(&key, buckets) < buckets);
        }

        #[test]
        fn prop_index_is_deterministic(key in any::<i64>(), buckets in 1_usize..64) {
            prop_assert_eq!(bucket_index(&key, buckets), bucket_index(&key, buckets));
        }
    }
}
