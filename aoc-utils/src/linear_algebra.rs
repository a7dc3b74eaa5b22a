//! Exact Gauss-Jordan elimination of linear systems.
//!
//! A system `A x = b` is given as the augmented matrix `[A | b]`: every column but the last holds
//! the coefficients of one variable and the last column holds the right hand side.

use nalgebra::DMatrix;
use num_traits::Zero;
use thiserror::Error;

use crate::fraction::Fraction;
use crate::math::IntegerIterator;

/// The system has no solution.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("linear system is inconsistent: row {row} reduces to 0 = non-zero")]
pub struct InconsistentSystem {
    pub row: usize,
}

/// The shape of a system after elimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// The variable columns holding a leading one, in row order.
    pub pivot_columns: Vec<usize>,
    /// The number of variables (coefficient columns).
    pub variables: usize,
}

impl Reduction {
    /// Variables that can take any value, the columns without a pivot.
    pub fn free_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.variables).filter(|column| !self.pivot_columns.contains(column))
    }

    /// Whether the system has exactly one solution.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.pivot_columns.len() == self.variables
    }
}

/// Reduce an augmented matrix to reduced row echelon form, in place.
///
/// Rows are swapped to bring a pivot up, preferring a row whose leading value is already one.
///
/// # Errors
///
/// Returns [`InconsistentSystem`] if some row reduces to all zero coefficients with a non-zero
/// right hand side. The matrix is left fully reduced either way.
pub fn reduce(matrix: &mut DMatrix<Fraction>) -> Result<Reduction, InconsistentSystem> {
    let rows = matrix.nrows();
    let variables = matrix.ncols().saturating_sub(1);
    let mut pivot_columns = Vec::new();

    for column in 0..variables {
        let pivot_row = pivot_columns.len();
        if pivot_row == rows {
            break;
        }

        let candidates = (pivot_row..rows).filter(|&row| !matrix[(row, column)].is_zero());
        let Some(row) = candidates
            .clone()
            .find(|&row| matrix[(row, column)] == Fraction::ONE)
            .or_else(|| candidates.clone().next())
        else {
            continue;
        };
        matrix.swap_rows(pivot_row, row);

        let scale = matrix[(pivot_row, column)];
        for x in column..matrix.ncols() {
            matrix[(pivot_row, x)] = matrix[(pivot_row, x)] / scale;
        }

        for other in (0..rows).filter(|&other| other != pivot_row) {
            let factor = matrix[(other, column)];
            if factor.is_zero() {
                continue;
            }
            for x in column..matrix.ncols() {
                let delta = factor * matrix[(pivot_row, x)];
                matrix[(other, x)] -= delta;
            }
        }

        pivot_columns.push(column);
    }

    log::trace!("reduced {rows}x{variables} system with pivots {pivot_columns:?}");

    let rhs = variables;
    if matrix.ncols() > 0
        && let Some(row) = (pivot_columns.len()..rows).find(|&row| !matrix[(row, rhs)].is_zero())
    {
        return Err(InconsistentSystem { row });
    }

    Ok(Reduction {
        pivot_columns,
        variables,
    })
}

/// Reduce an integer augmented matrix, then scale every row by the least common multiple of its
/// denominators so the result stays integral.
///
/// # Errors
///
/// Returns [`InconsistentSystem`] as [`reduce`] does. The matrix is left untouched in that case.
///
/// # Panics
///
/// Panics if a scaled row overflows `i64`.
pub fn reduce_integer(matrix: &mut DMatrix<i64>) -> Result<Reduction, InconsistentSystem> {
    let mut fractions = matrix.map(Fraction::from);
    let reduction = reduce(&mut fractions)?;

    for row in 0..matrix.nrows() {
        let scale = fractions
            .row(row)
            .iter()
            .map(|fraction| fraction.denominator())
            .checked_lcm_all()
            .expect("row scale overflowed i64");
        for column in 0..matrix.ncols() {
            let fraction = fractions[(row, column)];
            matrix[(row, column)] = fraction
                .numerator()
                .checked_mul(scale / fraction.denominator())
                .expect("row scale overflowed i64");
        }
    }

    Ok(reduction)
}

/// Read the solution off a reduced matrix, if it is unique.
#[must_use]
pub fn unique_solution(matrix: &DMatrix<Fraction>, reduction: &Reduction) -> Option<Vec<Fraction>> {
    if !reduction.is_unique() {
        return None;
    }
    let rhs = reduction.variables;
    Some((0..reduction.variables).map(|row| matrix[(row, rhs)]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fractions(rows: usize, cols: usize, values: &[i64]) -> DMatrix<Fraction> {
        DMatrix::from_row_iterator(rows, cols, values.iter().copied().map(Fraction::from))
    }

    #[test]
    fn solves_unique_system() -> Result<(), InconsistentSystem> {
        // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
        let mut matrix = fractions(3, 4, &[2, 1, -1, 8, -3, -1, 2, -11, -2, 1, 2, -3]);
        let reduction = reduce(&mut matrix)?;
        assert!(reduction.is_unique());
        assert_eq!(
            unique_solution(&matrix, &reduction),
            Some(vec![Fraction::from(2), Fraction::from(3), Fraction::from(-1)])
        );
        Ok(())
    }

    #[test]
    fn reports_free_variables() -> Result<(), InconsistentSystem> {
        // x + y = 3, 2x + 2y = 6
        let mut matrix = fractions(2, 3, &[1, 1, 3, 2, 2, 6]);
        let reduction = reduce(&mut matrix)?;
        assert_eq!(reduction.pivot_columns, vec![0]);
        assert_eq!(reduction.free_columns().collect::<Vec<_>>(), vec![1]);
        assert_eq!(unique_solution(&matrix, &reduction), None);
        Ok(())
    }

    #[test]
    fn skips_zero_columns() -> Result<(), InconsistentSystem> {
        // 0x + y = 4, 0x + 2y + z = 9
        let mut matrix = fractions(2, 4, &[0, 1, 0, 4, 0, 2, 1, 9]);
        let reduction = reduce(&mut matrix)?;
        assert_eq!(reduction.pivot_columns, vec![1, 2]);
        assert_eq!(matrix, fractions(2, 4, &[0, 1, 0, 4, 0, 0, 1, 1]));
        Ok(())
    }

    #[test]
    fn detects_inconsistency() {
        // x + y = 1, x + y = 2
        let mut matrix = fractions(2, 3, &[1, 1, 1, 1, 1, 2]);
        assert_eq!(reduce(&mut matrix), Err(InconsistentSystem { row: 1 }));
    }

    #[test]
    #[should_panic(expected = "row scale overflowed i64")]
    fn integer_scaling_overflow_panics() {
        // 2x + y = i64::MAX, 3y + z = 0 reduces to x - z/6 = i64::MAX/2, scaled by 6
        let mut matrix = DMatrix::from_row_slice(2, 4, &[2, 1, 0, i64::MAX, 0, 3, 1, 0]);
        let _ = reduce_integer(&mut matrix);
    }

    #[test]
    fn integer_rows_are_scaled() -> Result<(), InconsistentSystem> {
        // 2x + 4y = 3, 3x + 3y = 3
        let mut matrix = DMatrix::from_row_slice(2, 3, &[2, 4, 3, 3, 3, 3]);
        let reduction = reduce_integer(&mut matrix)?;
        assert!(reduction.is_unique());
        // x = 1/2, y = 1/2
        assert_eq!(matrix, DMatrix::from_row_slice(2, 3, &[2, 0, 1, 0, 2, 1]));
        Ok(())
    }
}
