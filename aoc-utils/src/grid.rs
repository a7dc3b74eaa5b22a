//! Rectangular grids addressed by [`Coordinate`].
//!
//! A [`Grid`] wraps a [`DMatrix`], storing row `y` and column `x` of the puzzle text at matrix
//! index `(y, x)`.

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};
use std::ops::{Index, IndexMut};

use nalgebra::{DMatrix, Scalar};
use num_traits::{PrimInt, Signed};
use thiserror::Error;

use crate::coordinate::Coordinate;
use crate::direction::Direction;

/// A rectangular grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Scalar>(DMatrix<T>);

/// An error building a [`Grid`] from lines of text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseGridError<E = Infallible> {
    #[error("grid input has no rows")]
    Empty,

    #[error("expected grid width to be {expected} across rows, but row {row} has width {found}")]
    UnequalWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell at row {row}, column {col}")]
    InvalidCell {
        row: usize,
        col: usize,
        #[source]
        source: E,
    },
}

/// A grid character is not a decimal digit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid digit character: {0:?}")]
pub struct InvalidDigit(pub char);

/// Convert a matrix index into a coordinate.
fn coordinate_at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(
        i32::try_from(col).expect("grid width fits in i32"),
        i32::try_from(row).expect("grid height fits in i32"),
    )
}

impl<T: Scalar> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    #[must_use]
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self(DMatrix::from_element(height, width, fill))
    }

    #[must_use]
    pub fn from_matrix(matrix: DMatrix<T>) -> Self {
        Self(matrix)
    }

    /// Build a grid from lines of text, mapping every character to a cell.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseGridError`] if there are no lines or the lines differ in width.
    pub fn from_lines(input: &str, mut f: impl FnMut(char) -> T) -> Result<Self, ParseGridError> {
        Self::build(input, |_, ch| Ok(f(ch)))
    }

    /// Build a grid from lines of text, mapping every character and its coordinate to a cell.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseGridError`] if there are no lines or the lines differ in width.
    pub fn from_lines_with_coordinate(
        input: &str,
        mut f: impl FnMut(Coordinate, char) -> T,
    ) -> Result<Self, ParseGridError> {
        Self::build(input, |coordinate, ch| Ok(f(coordinate, ch)))
    }

    /// Build a grid from lines of text with a fallible cell mapping.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseGridError`] if there are no lines, the lines differ in width, or `f` fails
    /// for some character.
    pub fn try_from_lines<E>(
        input: &str,
        mut f: impl FnMut(char) -> Result<T, E>,
    ) -> Result<Self, ParseGridError<E>> {
        Self::build(input, |_, ch| f(ch))
    }

    fn build<E>(
        input: &str,
        mut f: impl FnMut(Coordinate, char) -> Result<T, E>,
    ) -> Result<Self, ParseGridError<E>> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;

        for (row, line) in input.lines().enumerate() {
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let cell = f(coordinate_at(row, col), ch)
                    .map_err(|source| ParseGridError::InvalidCell { row, col, source })?;
                cells.push(cell);
                found += 1;
            }

            match width {
                Some(expected) if expected != found => {
                    return Err(ParseGridError::UnequalWidth {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
                None => width = Some(found),
            }
            height += 1;
        }

        let width = width.ok_or(ParseGridError::Empty)?;
        Ok(Self(DMatrix::from_row_iterator(height, width, cells)))
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.0.ncols()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.0.nrows()
    }

    #[must_use]
    pub fn as_matrix(&self) -> &DMatrix<T> {
        &self.0
    }

    #[must_use]
    pub fn into_matrix(self) -> DMatrix<T> {
        self.0
    }

    /// Get the matrix index `(row, col)` of a coordinate, if it lies inside the grid.
    fn index_of<C: PrimInt + Signed>(&self, coordinate: Coordinate<C>) -> Option<(usize, usize)> {
        let row = coordinate.y.to_usize()?;
        let col = coordinate.x.to_usize()?;
        (row < self.height() && col < self.width()).then_some((row, col))
    }

    /// Check a coordinate lies inside the grid.
    #[must_use]
    pub fn contains<C: PrimInt + Signed>(&self, coordinate: Coordinate<C>) -> bool {
        self.index_of(coordinate).is_some()
    }

    #[must_use]
    pub fn get<C: PrimInt + Signed>(&self, coordinate: Coordinate<C>) -> Option<&T> {
        self.index_of(coordinate).map(|index| &self.0[index])
    }

    pub fn get_mut<C: PrimInt + Signed>(&mut self, coordinate: Coordinate<C>) -> Option<&mut T> {
        self.index_of(coordinate).map(|index| &mut self.0[index])
    }

    /// Replace the cell at `coordinate`, returning the previous value. Returns `None` and leaves
    /// the grid untouched if the coordinate is out of bounds.
    pub fn set<C: PrimInt + Signed>(&mut self, coordinate: Coordinate<C>, value: T) -> Option<T> {
        self.get_mut(coordinate)
            .map(|cell| std::mem::replace(cell, value))
    }

    fn neighbors_in<C: PrimInt + Signed>(
        &self,
        coordinate: Coordinate<C>,
        directions: &'static [Direction],
    ) -> impl Iterator<Item = (Direction, Coordinate<C>)> {
        directions.iter().filter_map(move |&direction| {
            let next = coordinate + direction;
            self.contains(next).then_some((direction, next))
        })
    }

    /// Iterate the in-bounds neighbors north, east, south and west of a coordinate.
    pub fn cardinal_neighbors<C: PrimInt + Signed>(
        &self,
        coordinate: Coordinate<C>,
    ) -> impl Iterator<Item = (Direction, Coordinate<C>)> {
        self.neighbors_in(coordinate, &Direction::CARDINAL)
    }

    /// Iterate the in-bounds diagonal neighbors of a coordinate.
    pub fn ordinal_neighbors<C: PrimInt + Signed>(
        &self,
        coordinate: Coordinate<C>,
    ) -> impl Iterator<Item = (Direction, Coordinate<C>)> {
        self.neighbors_in(coordinate, &Direction::ORDINAL)
    }

    /// Iterate all eight in-bounds neighbors of a coordinate, cardinals first.
    pub fn all_neighbors<C: PrimInt + Signed>(
        &self,
        coordinate: Coordinate<C>,
    ) -> impl Iterator<Item = (Direction, Coordinate<C>)> {
        self.neighbors_in(coordinate, &Direction::ALL)
    }

    /// Iterate every coordinate of the grid, row by row.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<T> {
        let width = self.width();
        (0..self.height()).flat_map(move |row| (0..width).map(move |col| coordinate_at(row, col)))
    }

    /// Iterate every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> + '_ {
        self.coordinates().map(|coordinate| (coordinate, &self[coordinate]))
    }

    /// Map every cell into a new grid of the same size.
    #[must_use]
    pub fn map<U: Scalar>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid(self.0.map(|cell| f(&cell)))
    }

    pub fn count_where(&self, mut predicate: impl FnMut(Coordinate, &T) -> bool) -> usize {
        self.iter()
            .filter(|&(coordinate, cell)| predicate(coordinate, cell))
            .count()
    }

    /// Find the first coordinate, row by row, holding `value`.
    #[must_use]
    pub fn find_first(&self, value: &T) -> Option<Coordinate> {
        self.iter()
            .find_map(|(coordinate, cell)| (cell == value).then_some(coordinate))
    }

    /// Find all coordinates holding `value`.
    #[must_use]
    pub fn find_all(&self, value: &T) -> HashSet<Coordinate> {
        self.iter()
            .filter_map(|(coordinate, cell)| (cell == value).then_some(coordinate))
            .collect()
    }

    /// Render the grid as text, one line per row, mapping every cell to a character.
    pub fn render_with(&self, mut f: impl FnMut(&T) -> char) -> String {
        let mut rendered = String::with_capacity(self.height() * (self.width() + 1));
        for row in 0..self.height() {
            if row > 0 {
                rendered.push('\n');
            }
            for col in 0..self.width() {
                rendered.push(f(&self.0[(row, col)]));
            }
        }
        rendered
    }
}

impl Grid<char> {
    /// Build a grid of the characters in the input.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseGridError`] if there are no lines or the lines differ in width.
    pub fn chars(input: &str) -> Result<Self, ParseGridError> {
        Self::from_lines(input, |ch| ch)
    }
}

impl Grid<u8> {
    /// Build a grid of single decimal digits.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseGridError`] if there are no lines, the lines differ in width, or a
    /// character is not a digit.
    pub fn digits(input: &str) -> Result<Self, ParseGridError<InvalidDigit>> {
        Self::try_from_lines(input, |ch| {
            ch.to_digit(10)
                .and_then(|digit| u8::try_from(digit).ok())
                .ok_or(InvalidDigit(ch))
        })
    }
}

impl<T: Scalar, C: PrimInt + Signed + Display> Index<Coordinate<C>> for Grid<T> {
    type Output = T;

    fn index(&self, coordinate: Coordinate<C>) -> &Self::Output {
        let index = self.index_of(coordinate).unwrap_or_else(|| {
            panic!(
                "coordinate {coordinate} is outside the {}x{} grid",
                self.width(),
                self.height()
            )
        });
        &self.0[index]
    }
}

impl<T: Scalar, C: PrimInt + Signed + Display> IndexMut<Coordinate<C>> for Grid<T> {
    fn index_mut(&mut self, coordinate: Coordinate<C>) -> &mut Self::Output {
        let (width, height) = (self.width(), self.height());
        let index = self.index_of(coordinate).unwrap_or_else(|| {
            panic!("coordinate {coordinate} is outside the {width}x{height} grid")
        });
        &mut self.0[index]
    }
}

/// Displays every cell with its own `Display`, one line per row.
impl<T: Scalar + Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width() {
                write!(f, "{}", self.0[(row, col)])?;
            }
        }
        Ok(())
    }
}

/// Render a set of points over its bounding box, `#` for points in the set and `.` otherwise.
#[must_use]
pub fn render_points<C, S>(points: &HashSet<Coordinate<C>, S>) -> String
where
    C: PrimInt + Signed + Hash,
    S: BuildHasher,
{
    render_points_with(points, |contains, _| if contains { '#' } else { '.' })
}

/// Render the bounding box of a set of points, mapping each position to a character by whether
/// the set contains it. An empty set renders as an empty string.
pub fn render_points_with<C, S>(
    points: &HashSet<Coordinate<C>, S>,
    mut f: impl FnMut(bool, Coordinate<C>) -> char,
) -> String
where
    C: PrimInt + Signed + Hash,
    S: BuildHasher,
{
    let Some(&first) = points.iter().next() else {
        return String::new();
    };
    let (min, max) = points.iter().fold((first, first), |(min, max), point| {
        (
            Coordinate::new(min.x.min(point.x), min.y.min(point.y)),
            Coordinate::new(max.x.max(point.x), max.y.max(point.y)),
        )
    });

    let mut rendered = String::new();
    for point in min.between_inclusive(max) {
        if point.x == min.x && point.y != min.y {
            rendered.push('\n');
        }
        rendered.push(f(points.contains(&point), point));
    }
    rendered
}

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasherDefault, DefaultHasher};

    use pretty_assertions::assert_eq;

    use super::*;

    const MAZE: &str = "#.##\n..#.\n#...\n";

    #[test]
    fn parses_rows_and_columns() -> Result<(), ParseGridError> {
        let grid = Grid::chars(MAZE)?;
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid[Coordinate::new(3, 1)], '.');
        assert_eq!(grid.get(Coordinate::new(2, 1)), Some(&'#'));
        assert_eq!(grid.get(Coordinate::new(4, 0)), None);
        assert_eq!(grid.get(Coordinate::new(-1, 0)), None);
        Ok(())
    }

    #[test]
    fn rejects_ragged_and_empty_input() {
        assert_eq!(
            Grid::chars("##\n#\n"),
            Err(ParseGridError::UnequalWidth {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(Grid::chars(""), Err(ParseGridError::Empty));
        assert_eq!(
            Grid::digits("12\n3x\n"),
            Err(ParseGridError::InvalidCell {
                row: 1,
                col: 1,
                source: InvalidDigit('x')
            })
        );
    }

    #[test]
    fn neighbors_stay_in_bounds() -> Result<(), ParseGridError<InvalidDigit>> {
        let grid = Grid::digits("123\n456\n789\n")?;
        let corner = grid
            .cardinal_neighbors(Coordinate::new(0, 0))
            .collect::<Vec<_>>();
        assert_eq!(
            corner,
            vec![
                (Direction::East, Coordinate::new(1, 0)),
                (Direction::South, Coordinate::new(0, 1)),
            ]
        );
        assert_eq!(grid.all_neighbors(Coordinate::new(1, 1)).count(), 8);
        assert_eq!(grid.ordinal_neighbors(Coordinate::new(2, 0)).count(), 1);

        let sum: u32 = grid
            .all_neighbors(Coordinate::new(0, 1))
            .map(|(_, neighbor)| u32::from(grid[neighbor]))
            .sum();
        assert_eq!(sum, 1 + 2 + 5 + 7 + 8);
        Ok(())
    }

    #[test]
    fn iterates_row_major() -> Result<(), ParseGridError> {
        let grid = Grid::from_lines_with_coordinate("ab\ncd\n", |coordinate, ch| {
            (ch, coordinate.x + coordinate.y)
        })?;
        let cells = grid.iter().map(|(_, &cell)| cell).collect::<Vec<_>>();
        assert_eq!(cells, vec![('a', 0), ('b', 1), ('c', 1), ('d', 2)]);
        Ok(())
    }

    #[test]
    fn finds_and_counts_cells() -> Result<(), ParseGridError> {
        let grid = Grid::chars(MAZE)?;
        assert_eq!(grid.find_first(&'.'), Some(Coordinate::new(1, 0)));
        assert_eq!(grid.find_all(&'#').len(), 5);
        assert_eq!(grid.count_where(|coordinate, &ch| ch == '.' && coordinate.y > 0), 6);
        assert_eq!(grid.find_first(&'x'), None);
        Ok(())
    }

    #[test]
    fn mutation_and_mapping() -> Result<(), ParseGridError> {
        let mut grid = Grid::chars(MAZE)?;
        assert_eq!(grid.set(Coordinate::new(0, 0), 'S'), Some('#'));
        assert_eq!(grid.set(Coordinate::new(9, 9), 'S'), None);
        grid[Coordinate::new(3, 2)] = 'E';

        let walls = grid.map(|&ch| ch == '#');
        assert_eq!(
            walls.render_with(|&wall| if wall { '#' } else { ' ' }),
            "  ##\n  # \n#   "
        );
        assert_eq!(grid.to_string(), "S.##\n..#.\n#..E");
        Ok(())
    }

    #[test]
    fn renders_point_sets_over_bounding_box() {
        let points = [(-1, 0), (1, 0), (0, 1)]
            .into_iter()
            .map(Coordinate::from)
            .collect::<HashSet<_>>();
        assert_eq!(render_points(&points), "#.#\n.#.");

        let hashed: HashSet<Coordinate, BuildHasherDefault<DefaultHasher>> =
            points.iter().copied().collect();
        assert_eq!(render_points(&hashed), "#.#\n.#.");
        assert_eq!(render_points(&HashSet::<Coordinate>::new()), "");
    }

    #[test]
    fn new_grid_is_filled() {
        let grid = Grid::new(3, 2, 0_u8);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.iter().all(|(_, &cell)| cell == 0));
        assert_eq!(grid.coordinates().last(), Some(Coordinate::new(2, 1)));
    }
}
