use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};
use crate::error::DataError;

/// Dense real payoff matrix of a bimatrix game, indexed `[(row, column)]` by
/// (evaluated agent's action index, opponent's action index).
///
/// Built fresh for every backup call and discarded afterwards; row-major
/// storage.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "speedy", derive(speedy::Writable, speedy::Readable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffMatrix{
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl PayoffMatrix{

    pub fn zeroed(rows: usize, cols: usize) -> Self{
        Self{
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from row vectors; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DataError>{
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate(){
            if row.len() != cols{
                return Err(DataError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self{
            rows: rows.len(),
            cols,
            values,
        })
    }

    pub fn rows(&self) -> usize{
        self.rows
    }
    pub fn cols(&self) -> usize{
        self.cols
    }
    /// Shape as (rows, columns).
    pub fn shape(&self) -> (usize, usize){
        (self.rows, self.cols)
    }
    /// True if some player has no action.
    pub fn is_degenerate(&self) -> bool{
        self.rows == 0 || self.cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64>{
        if row < self.rows && col < self.cols{
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterates cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_{
        self.values.iter().copied()
    }
}

impl Index<(usize, usize)> for PayoffMatrix{
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &self.values[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for PayoffMatrix{
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.values[row * self.cols + col]
    }
}

impl Display for PayoffMatrix{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows{
            write!(f, "[")?;
            for col in 0..self.cols{
                if col > 0{
                    write!(f, ", ")?;
                }
                write!(f, "{}", self[(row, col)])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
