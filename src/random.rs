//! Square grids of uniform random numbers.
//!
//! [`gen_random_values`] draws from the thread-local generator.
//! [`gen_random_values_with`] accepts any [`rand::Rng`], so a seeded
//! [`rand::rngs::StdRng`] gives reproducible grids.

use crate::error::Error;
use rand::Rng;

/// A `size × size` grid of `f64`, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    size: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.values.get(row * self.size + col).copied()
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.size)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Generate a `size × size` grid where every cell is uniform in `[base, base + 1)`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `size` is zero, `base` is not finite,
/// `base` is too large for `base + 1` to be a distinct `f64`, or the grid
/// cannot be allocated.
pub fn gen_random_values(size: usize, base: f64) -> Result<Matrix, Error> {
    gen_random_values_with(&mut rand::rng(), size, base)
}

/// Like [`gen_random_values`], drawing from the given generator.
pub fn gen_random_values_with<R: Rng>(
    rng: &mut R,
    size: usize,
    base: f64,
) -> Result<Matrix, Error> {
    if size == 0 {
        return Err(Error::InvalidArgument("size must be positive".into()));
    }
    let cells = size
        .checked_mul(size)
        .ok_or_else(|| Error::InvalidArgument(format!("size {size} overflows the grid")))?;
    if !base.is_finite() {
        return Err(Error::InvalidArgument(format!("base {base} is not finite")));
    }
    let upper = base + 1.0;
    if upper <= base {
        return Err(Error::InvalidArgument(format!("base {base} leaves no room for a unit interval")));
    }
    // base + u can round up to `upper` for large bases; keep the bound exclusive.
    let below_upper = upper.next_down();

    let mut values: Vec<f64> = Vec::new();
    values
        .try_reserve_exact(cells)
        .map_err(|e| Error::InvalidArgument(format!("size {size} is too large: {e}")))?;
    values.extend((0..cells).map(|_| {
        let v = base + rng.random::<f64>();
        if v < upper { v } else { below_upper }
    }));

    Ok(Matrix { size, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};

    fn assert_in_unit_interval(m: &Matrix, base: f64) {
        for &v in m.as_slice() {
            assert!(base <= v && v < base + 1.0, "{v} outside [{base}, {})", base + 1.0);
        }
    }

    #[test]
    fn grid_is_square_and_bounded() {
        for (size, base) in [(1, 0.0), (3, -5.0), (16, 42.5), (7, -0.5)] {
            let m = gen_random_values(size, base).unwrap();
            assert_eq!(m.size(), size);
            assert_eq!(m.as_slice().len(), size * size);
            assert_eq!(m.rows().count(), size);
            assert!(m.rows().all(|row| row.len() == size));
            assert_in_unit_interval(&m, base);
        }
    }

    #[test]
    fn single_cell_from_zero() {
        let m = gen_random_values(1, 0.0).unwrap();
        let v = m.get(0, 0).unwrap();
        assert!((0.0..1.0).contains(&v));
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.get(1, 0), None);
    }

    #[test]
    fn repeated_calls_differ() {
        let a = gen_random_values(8, 1.0).unwrap();
        let b = gen_random_values(8, 1.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_same_grid() {
        let a = gen_random_values_with(&mut StdRng::seed_from_u64(42), 5, 3.0).unwrap();
        let b = gen_random_values_with(&mut StdRng::seed_from_u64(42), 5, 3.0).unwrap();
        assert_eq!(a, b);
        assert_in_unit_interval(&a, 3.0);
    }

    #[test]
    fn large_base_keeps_upper_bound_exclusive() {
        let base = 2f64.powi(52) - 4.0;
        let m = gen_random_values_with(&mut StdRng::seed_from_u64(7), 10, base).unwrap();
        assert_in_unit_interval(&m, base);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(gen_random_values(0, 0.0), Err(Error::InvalidArgument(_))));
        assert!(matches!(gen_random_values(2, f64::NAN), Err(Error::InvalidArgument(_))));
        assert!(matches!(gen_random_values(2, f64::INFINITY), Err(Error::InvalidArgument(_))));
        assert!(matches!(gen_random_values(2, 1e300), Err(Error::InvalidArgument(_))));
        assert!(matches!(gen_random_values(usize::MAX, 0.0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn grid_too_large_to_allocate_is_an_error() {
        // 2^62 cells fit in usize, their bytes do not.
        assert!(matches!(gen_random_values(1 << 31, 0.0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn min_max_cover_the_values() {
        let m = gen_random_values_with(&mut StdRng::seed_from_u64(1), 4, 10.0).unwrap();
        let min = m.min();
        let max = m.max();
        assert!(10.0 <= min && min <= max && max < 11.0);
        assert!(m.as_slice().contains(&min));
        assert!(m.as_slice().contains(&max));
    }
}
