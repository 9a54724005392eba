use std::alloc::Layout;

use crate::error::ArrayError;

/// A 2D buffer kept as a list of separately allocated rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGrid {
    rows: Vec<Box<[f64]>>,
    cols: usize,
}

impl RowGrid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, ArrayError> {
        if rows == 0 || cols == 0 {
            return Err(ArrayError::ZeroDimension { rows, cols });
        }
        let row_layout = Layout::array::<f64>(cols)
            .map_err(|_| ArrayError::CapacityOverflow { rows, cols })?;

        let mut grid: Vec<Box<[f64]>> = Vec::new();
        grid.try_reserve_exact(rows)
            .map_err(|_| ArrayError::CapacityOverflow { rows, cols })?;
        for _ in 0..rows {
            let mut row: Vec<f64> = Vec::new();
            row.try_reserve_exact(cols).map_err(|_| ArrayError::AllocFailed {
                bytes: row_layout.size(),
            })?;
            row.resize(cols, 0.0);
            grid.push(row.into_boxed_slice());
        }
        Ok(RowGrid { rows: grid, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64, ArrayError> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or_else(|| ArrayError::cell_out_of_bounds(row, col, self.rows(), self.cols))
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), ArrayError> {
        let (rows, cols) = (self.rows(), self.cols);
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| ArrayError::cell_out_of_bounds(row, col, rows, cols))?;
        *cell = value;
        Ok(())
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut [f64]> {
        self.rows.get_mut(row).map(|r| &mut r[..])
    }
}
