// Copyright 2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convenience adjustments to common [`ndarray`] operations.
//!
//! Each function here is a thin, stateless wrapper that fixes the calling
//! convention or output shape of a general-purpose `ndarray` routine for a
//! recurring use case in signal and image processing pipelines:
//!
//! - [`rotate`] and [`rotate_stack`]: 180° rotation of an array, or of each
//!   frame in a stack of arrays.
//! - [`pad2d`]: symmetric zero-padding of the first two axes.
//! - [`x_bins`] and [`x_bins_step`]: histogram bin-edge to bin-center
//!   conversion, plain and step-plot aligned.
//! - [`fancy_transpose`] (with shorthands [`ftr`] and [`ftl`]): transposition
//!   by a cyclically rolled axis order.
//!
//! None of the functions mutate their input, and none define their own error
//! type: malformed inputs (rank too low, sequences too short) fail through
//! `ndarray`'s own axis and index bounds checks. The panic conditions are
//! listed on each function.
//!
//! ```
//! use ndarray::array;
//! use ndarray_adjust::rotate;
//!
//! let x = array![[0, 1, 2],
//!                [3, 4, 5],
//!                [6, 7, 8]];
//! assert_eq!(rotate(&x), array![[8, 7, 6],
//!                               [5, 4, 3],
//!                               [2, 1, 0]]);
//! ```

pub use crate::bins::{x_bins, x_bins_step};
pub use crate::pad::{pad2d, Padding};
pub use crate::rotation::{rotate, rotate_stack};
pub use crate::transpose::{fancy_transpose, ftl, ftr};

mod bins;
mod pad;
mod rotation;
mod transpose;
