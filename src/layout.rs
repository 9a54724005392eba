use crate::error::ArrayError;

/// How a 2D index maps onto a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linearization {
    /// `(i, j) -> i * cols + j`
    RowMajor,
    /// `(i, j) -> j * rows + i`
    ColumnMajor,
}

impl Linearization {
    /// Unchecked offset; callers must keep `i < rows` and `j < cols`.
    pub fn offset(self, i: usize, j: usize, rows: usize, cols: usize) -> usize {
        match self {
            Linearization::RowMajor => i * cols + j,
            Linearization::ColumnMajor => j * rows + i,
        }
    }

    pub fn checked_offset(
        self,
        i: usize,
        j: usize,
        rows: usize,
        cols: usize,
    ) -> Result<usize, ArrayError> {
        if i >= rows || j >= cols {
            return Err(ArrayError::cell_out_of_bounds(i, j, rows, cols));
        }
        Ok(self.offset(i, j, rows, cols))
    }

    /// The formula as printed in the lesson, e.g. `b[j*N+i]`.
    pub fn formula(self, name: &str) -> String {
        match self {
            Linearization::RowMajor => format!("{name}[i*M+j]"),
            Linearization::ColumnMajor => format!("{name}[j*N+i]"),
        }
    }
}

/// Number of elements in a `rows x cols` shape.
pub fn element_count(rows: usize, cols: usize) -> Result<usize, ArrayError> {
    rows.checked_mul(cols)
        .ok_or(ArrayError::CapacityOverflow { rows, cols })
}

/// A flat slice read as a `rows x cols` array.
#[derive(Debug, Clone, Copy)]
pub struct FlatView<'a> {
    data: &'a [f64],
    rows: usize,
    cols: usize,
    order: Linearization,
}

impl<'a> FlatView<'a> {
    pub fn new(
        data: &'a [f64],
        rows: usize,
        cols: usize,
        order: Linearization,
    ) -> Result<Self, ArrayError> {
        if element_count(rows, cols)? != data.len() {
            return Err(ArrayError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(FlatView {
            data,
            rows,
            cols,
            order,
        })
    }

    pub fn get(&self, i: usize, j: usize) -> Result<f64, ArrayError> {
        let offset = self.order.checked_offset(i, j, self.rows, self.cols)?;
        Ok(self.data[offset])
    }
}
