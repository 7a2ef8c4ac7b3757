//! Integer ranges in the manner of GNU `seq`.

/// Largest sequence `seq` will build.
pub const MAX_LEN: i64 = 2000;

/// Smallest last value `seq` accepts.
pub const MIN_LAST: i64 = -100_000;

/// `seq LAST`, `seq FIRST LAST` or `seq FIRST INCREMENT LAST`.
///
/// `seq 3` is `1 2 3`, `seq -3` is `-1 -2 -3`, `seq 1 -2` counts down and
/// `seq 1 2 4` is `1 3`. Anything it cannot satisfy, including more than
/// [`MAX_LEN`] items, yields an empty list.
///
/// # Example
///
/// ```
/// use stencil::functions::seq::seq;
///
/// assert_eq!(seq(&[0, 3]), vec![0, 1, 2, 3]);
/// assert_eq!(seq(&[4, -2, 0]), vec![4, 2, 0]);
/// assert!(seq(&[1, 0, 5]).is_empty());
/// ```
pub fn seq(args: &[i64]) -> Vec<i64> {
    let (first, step, last) = match *args {
        [0] => return Vec::new(),
        [last] if last > 0 => (1, 1, last),
        [last] => (-1, -1, last),
        [first, last] => (first, if last < first { -1 } else { 1 }, last),
        [first, step, last] => {
            if step == 0 || (first < last && step < 0) || (first > last && step > 0) {
                return Vec::new();
            }
            (first, step, last)
        }
        _ => return Vec::new(),
    };
    if last < MIN_LAST {
        return Vec::new();
    }

    let size = last
        .checked_sub(first)
        .and_then(|span| span.checked_div(step))
        .and_then(|count| count.checked_add(1));
    let Some(size) = size.filter(|size| (1..=MAX_LEN).contains(size)) else {
        return Vec::new();
    };

    (0..size).map(|i| first + i * step).collect()
}
