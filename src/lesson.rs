use serde::Serialize;
use std::io::Write;

use crate::buffer::HeapBuffer;
use crate::config::LessonConfig;
use crate::error::LessonError;
use crate::fill::{initialize_1d_array, initialize_2d_array, initialize_array, initialize_array_par};
use crate::grid::RowGrid;
use crate::layout::{element_count, FlatView, Linearization};
use crate::numfmt::general;
use crate::transcript::Transcript;

/// Values the lesson read back along the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonReport {
    pub b_first: f64,
    pub b_first_after_fill: f64,
    pub b_fifth_after_fill: f64,
    pub probe_value: f64,
    pub grid_last_before_fill: f64,
    pub grid_cell: f64,
    pub grid_last_after_fill: f64,
    pub flat_cell: f64,
}

pub struct Lesson {
    config: LessonConfig,
}

impl Lesson {
    pub fn new(config: LessonConfig) -> Result<Self, LessonError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn run<W: Write>(&self, out: &mut Transcript<W>) -> Result<LessonReport, LessonError> {
        let cfg = &self.config;
        let (n, m) = (cfg.rows, cfg.cols);

        // =====================================================================
        // Part 1: Opening comments
        // =====================================================================
        out.heading("Some quick comments:")?;
        out.line("1. You always need to declare the variables that you want to use, BEFORE you use them.")?;
        out.blank()?;
        out.line("2. ALWAYS terminate each line/step with a semicolon. Check the code.")?;

        // =====================================================================
        // Part 2: A 1D buffer on the heap
        // =====================================================================
        out.line("Declaring dynamic arrays with the sizes specified by N and M.")?;
        let mut b = HeapBuffer::zeroed(n)?;
        let mut a = RowGrid::new(n, m)?;

        out.line("!!! The first element of an array starts with index 0 !!!")?;
        b.set(0, cfg.first_value)?;
        let b_first = b.get(0)?;
        out.line(format_args!("b[0]={}", general(b_first)))?;
        out.line("b holds a pointer which tells the computer where to look for the location where the array data is stored.")?;
        out.line("So it is understood as an address.")?;

        initialize_1d_array(b.as_mut_slice());
        out.line("the function initialize_1d_array() resets the values stored in b")?;
        let b_first_after_fill = b.get(0)?;
        let b_fifth_after_fill = b.get(5)?;
        out.line(format_args!(
            "b[0]={}, b[5]={}",
            general(b_first_after_fill),
            general(b_fifth_after_fill)
        ))?;
        out.blank()?;

        // =====================================================================
        // Part 3: Reallocating and reading a flat buffer as 2D
        // =====================================================================
        drop(b);
        let b = HeapBuffer::zeroed(element_count(n, m)?)?;
        out.line("Use the newly allocated 1d array as a 2D array as follows")?;
        out.line(format_args!(
            "b[i][j] will be {}.",
            Linearization::ColumnMajor.formula("b")
        ))?;

        let (pi, pj) = (cfg.probe_row, cfg.probe_col);
        let probe_value =
            FlatView::new(b.as_slice(), n, m, Linearization::ColumnMajor)?.get(pi, pj)?;
        out.line(format_args!(" b[{pi}][{pj}]={}", general(probe_value)))?;
        if cfg.show_addresses {
            out.line(format_args!(" b={:p}", b.as_ptr()))?;
        }

        let mut c = HeapBuffer::zeroed(element_count(n, m)?)?;
        out.line("You can access your 1d array as a 2d array with a different ordering:")?;
        out.line(format_args!(
            "b[i][j] will be {}.",
            Linearization::RowMajor.formula("b")
        ))?;
        out.blank()?;
        out.line("But this will have different implications in nested for-loops: loop over i in the outside and j in the inside??")?;

        // =====================================================================
        // Part 4: The row grid and the fill helpers
        // =====================================================================
        let (last_i, last_j) = (n - 1, m - 1);
        a.set(last_i, last_j, cfg.sentinel)?;
        let grid_last_before_fill = a.get(last_i, last_j)?;
        out.line(format_args!(
            "A[{last_i},{last_j}]={}",
            general(grid_last_before_fill)
        ))?;

        initialize_2d_array(&mut a, n, m, cfg.grid_fill, out)?;

        let (ci, cj) = (cfg.cell_row, cfg.cell_col);
        let grid_cell = a.get(ci, cj)?;
        let grid_last_after_fill = a.get(last_i, last_j)?;
        out.line(format_args!("A[{ci},{cj}]={}", general(grid_cell)))?;
        out.line(format_args!(
            "A[{last_i},{last_j}] is reset by initialize_2d_array() to be {}",
            general(grid_last_after_fill)
        ))?;
        out.blank()?;

        if cfg.parallel_fill {
            initialize_array_par(c.as_mut_slice(), n, m, cfg.flat_fill)?;
        } else {
            initialize_array(c.as_mut_slice(), n, m, cfg.flat_fill)?;
        }
        let flat_cell = FlatView::new(c.as_slice(), n, m, Linearization::RowMajor)?.get(ci, cj)?;
        out.line(format_args!("C[{ci},{cj}]={}", general(flat_cell)))?;
        out.flush()?;

        Ok(LessonReport {
            b_first,
            b_first_after_fill,
            b_fifth_after_fill,
            probe_value,
            grid_last_before_fill,
            grid_cell,
            grid_last_after_fill,
            flat_cell,
        })
    }
}
