//! Dynamic arrays on the heap: a 1D buffer with pointer arithmetic, a 2D
//! grid of separately allocated rows, and flat buffers read as 2D arrays in
//! row-major or column-major order.

pub mod buffer;
pub mod config;
pub mod error;
pub mod fill;
pub mod grid;
pub mod layout;
pub mod lesson;
pub mod numfmt;
pub mod transcript;

pub use buffer::HeapBuffer;
pub use config::LessonConfig;
pub use error::{ArrayError, ConfigError, LessonError};
pub use fill::{initialize_1d_array, initialize_2d_array, initialize_array, initialize_array_par};
pub use grid::RowGrid;
pub use layout::{FlatView, Linearization};
pub use lesson::{Lesson, LessonReport};
pub use transcript::Transcript;
