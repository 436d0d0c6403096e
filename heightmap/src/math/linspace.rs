use num_traits::{Float, FromPrimitive};

/// Returns `n` evenly spaced values over `[start, end]`.
///
/// Both endpoints are included exactly. A single value yields
/// `start`, zero values yields nothing.
pub fn linspace<T>(start: T, end: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float + FromPrimitive,
{
    let dx = if n > 1 {
        (end - start) / T::from_usize(n - 1).unwrap()
    } else {
        T::zero()
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            end
        } else {
            start + T::from_usize(i).unwrap() * dx
        }
    })
}
