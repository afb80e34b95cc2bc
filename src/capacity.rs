//! Power-of-two helpers and the capacity policy shared by every ring buffer.
//!
//! A circular buffer addresses its slots with `index & (capacity - 1)`, which is
//! only a valid modulo when the capacity is zero or an exact power of two. All
//! allocation sizes in this crate go through [`buffer_capacity`] and
//! [`grown_capacity`] so that property holds everywhere.

use num_traits::PrimInt;

/// Returns `true` if `value` is a power of two.
///
/// Zero and negative values are never powers of two.
///
/// ```
/// use cyclic::capacity::is_power_of_two;
///
/// assert!(is_power_of_two(64u32));
/// assert!(!is_power_of_two(0i8));
/// assert!(!is_power_of_two(-4i64));
/// ```
#[inline]
pub fn is_power_of_two<N: PrimInt>(value: N) -> bool {
    value > N::zero() && (value & (value - N::one())) == N::zero()
}

/// Returns the smallest power of two greater than or equal to `value`.
///
/// Values at or below one round to one.
///
/// # Panics
///
/// Panics if the result does not fit in `N`.
///
/// ```
/// use cyclic::capacity::nearest_power_of_two;
///
/// assert_eq!(nearest_power_of_two(5usize), 8);
/// assert_eq!(nearest_power_of_two(16u16), 16);
/// assert_eq!(nearest_power_of_two(-3i32), 1);
/// ```
pub fn nearest_power_of_two<N: PrimInt>(value: N) -> N {
    let mut power = N::one();
    while power < value {
        power = power
            .checked_mul(&(N::one() + N::one()))
            .expect("power of two overflows the integer type");
    }
    power
}

/// Number of slots to allocate for a buffer that must hold at least `minimum`.
///
/// Zero stays zero (no allocation); anything else is rounded up to a power of
/// two no smaller than two.
#[inline]
pub fn buffer_capacity(minimum: usize) -> usize {
    if minimum == 0 {
        0
    } else {
        nearest_power_of_two(minimum.max(2))
    }
}

/// Capacity a full buffer grows to: double the current one, at least two.
#[inline]
pub fn grown_capacity(capacity: usize) -> usize {
    capacity.checked_mul(2).expect("capacity overflow").max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_two_are_recognised() {
        for shift in 0..63 {
            assert!(is_power_of_two(1u64 << shift));
        }
        for value in [0usize, 3, 5, 6, 7, 9, 12, 100, 1023] {
            assert!(!is_power_of_two(value), "{value} is not a power of two");
        }
        assert!(!is_power_of_two(i32::MIN));
    }

    #[test]
    fn nearest_power_rounds_up() {
        assert_eq!(nearest_power_of_two(0usize), 1);
        assert_eq!(nearest_power_of_two(1usize), 1);
        assert_eq!(nearest_power_of_two(2usize), 2);
        assert_eq!(nearest_power_of_two(3usize), 4);
        assert_eq!(nearest_power_of_two(1000usize), 1024);
        assert_eq!(nearest_power_of_two(1024usize), 1024);
        assert_eq!(nearest_power_of_two(100u8), 128);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn nearest_power_overflow_panics() {
        let _ = nearest_power_of_two(200u8);
    }

    #[test]
    fn buffer_capacity_policy() {
        assert_eq!(buffer_capacity(0), 0);
        assert_eq!(buffer_capacity(1), 2);
        assert_eq!(buffer_capacity(2), 2);
        assert_eq!(buffer_capacity(5), 8);
        assert_eq!(buffer_capacity(8), 8);
        assert_eq!(buffer_capacity(9), 16);
    }

    #[test]
    fn growth_doubles() {
        assert_eq!(grown_capacity(0), 2);
        assert_eq!(grown_capacity(2), 4);
        assert_eq!(grown_capacity(64), 128);
    }
}
