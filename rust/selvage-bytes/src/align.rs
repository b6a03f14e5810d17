/// Aligns a value up to the next multiple of the specified alignment.
///
/// Returns the smallest multiple of `alignment` that is greater than or
/// equal to `n`. An already-aligned value is returned unchanged.
///
/// # Examples
///
/// ```
/// use selvage_bytes::align::align_up;
///
/// assert_eq!(align_up(0, 8), 0);
/// assert_eq!(align_up(1, 8), 8);
/// assert_eq!(align_up(8, 8), 8);
/// assert_eq!(align_up(9, 8), 16);
/// ```
///
/// # Panics
///
/// Panics in debug builds if `alignment` is zero or not a power of two.
#[inline]
pub fn align_up(n: usize, alignment: usize) -> usize {
    debug_assert_ne!(alignment, 0);
    debug_assert!(alignment.is_power_of_two());
    (n + alignment - 1) & !(alignment - 1)
}

/// Aligns a value down to the previous multiple of the specified alignment.
///
/// Returns the largest multiple of `alignment` that is less than or equal
/// to `n`. An already-aligned value is returned unchanged.
///
/// # Examples
///
/// ```
/// use selvage_bytes::align::align_down;
///
/// assert_eq!(align_down(0, 8), 0);
/// assert_eq!(align_down(7, 8), 0);
/// assert_eq!(align_down(8, 8), 8);
/// assert_eq!(align_down(15, 8), 8);
/// ```
///
/// # Panics
///
/// Panics in debug builds if `alignment` is zero or not a power of two.
#[inline]
pub fn align_down(n: usize, alignment: usize) -> usize {
    debug_assert_ne!(alignment, 0);
    debug_assert!(alignment.is_power_of_two());
    n & !(alignment - 1)
}

/// Returns `true` if `n` is a multiple of the specified alignment.
///
/// # Examples
///
/// ```
/// use selvage_bytes::align::is_aligned;
///
/// assert!(is_aligned(0, 256));
/// assert!(is_aligned(512, 256));
/// assert!(!is_aligned(513, 256));
/// ```
#[inline]
pub fn is_aligned(n: usize, alignment: usize) -> bool {
    debug_assert_ne!(alignment, 0);
    debug_assert!(alignment.is_power_of_two());
    n & (alignment - 1) == 0
}
