use itertools::iproduct;
use rayon::prelude::*;
use std::io::Write;

use crate::error::{ArrayError, LessonError};
use crate::grid::RowGrid;
use crate::layout::{element_count, Linearization};
use crate::numfmt;
use crate::transcript::Transcript;

/// The constant written by [`initialize_1d_array`].
pub const ONE_D_FILL: f64 = 4.0;

/// Resets every element of `b` to [`ONE_D_FILL`].
pub fn initialize_1d_array(b: &mut [f64]) {
    for value in b.iter_mut() {
        *value = ONE_D_FILL;
    }
}

/// Prints the last cell of the `s1 x s2` region, then sets every cell in it
/// to `init_value`.
pub fn initialize_2d_array<W: Write>(
    t: &mut RowGrid,
    s1: usize,
    s2: usize,
    init_value: f64,
    out: &mut Transcript<W>,
) -> Result<(), LessonError> {
    if s1 == 0 || s2 == 0 {
        return Err(ArrayError::ZeroDimension { rows: s1, cols: s2 }.into());
    }
    if s1 > t.rows() || s2 > t.cols() {
        return Err(ArrayError::cell_out_of_bounds(s1 - 1, s2 - 1, t.rows(), t.cols()).into());
    }

    let last = t.get(s1 - 1, s2 - 1)?;
    out.line(format_args!(
        "From initialize_2d_array:  T[{}, {}]={}",
        s1 - 1,
        s2 - 1,
        numfmt::general(last)
    ))?;
    out.blank()?;

    for i in 0..s1 {
        if let Some(row) = t.row_mut(i) {
            for cell in row[..s2].iter_mut() {
                *cell = init_value;
            }
        }
    }
    Ok(())
}

/// Fills a flat buffer shaped `s1 x s2` with `init_val`, row-major.
pub fn initialize_array(t: &mut [f64], s1: usize, s2: usize, init_val: f64) -> Result<(), ArrayError> {
    check_shape(t, s1, s2)?;
    for (i, j) in iproduct!(0..s1, 0..s2) {
        t[Linearization::RowMajor.offset(i, j, s1, s2)] = init_val;
    }
    Ok(())
}

/// Same result as [`initialize_array`], one row per rayon task.
pub fn initialize_array_par(
    t: &mut [f64],
    s1: usize,
    s2: usize,
    init_val: f64,
) -> Result<(), ArrayError> {
    check_shape(t, s1, s2)?;
    if s2 == 0 {
        return Ok(());
    }
    t.par_chunks_mut(s2).for_each(|row| row.fill(init_val));
    Ok(())
}

fn check_shape(t: &[f64], s1: usize, s2: usize) -> Result<(), ArrayError> {
    if element_count(s1, s2)? != t.len() {
        return Err(ArrayError::ShapeMismatch {
            rows: s1,
            cols: s2,
            len: t.len(),
        });
    }
    Ok(())
}
