// Copyright 2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndarray::{Array, ArrayBase, Data, Dimension, Slice};

use num_traits::Zero;

/// Symmetric padding amounts for the first two axes of an array.
///
/// `x` cells are added on each side of `Axis(0)` and `y` cells on each side
/// of `Axis(1)`. Constructed from a single amount applied to both axes, or
/// from an `(x, y)` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Padding
{
    pub x: usize,
    pub y: usize,
}

impl From<usize> for Padding
{
    fn from(pad: usize) -> Self
    {
        Padding { x: pad, y: pad }
    }
}

impl From<(usize, usize)> for Padding
{
    fn from((x, y): (usize, usize)) -> Self
    {
        Padding { x, y }
    }
}

/// Pad the first two axes of an array with zero-valued border cells.
///
/// The output has shape `(rows + 2x, cols + 2y, ...)` with any trailing axes
/// unchanged; the input content sits centered at offset `(x, y)` and every
/// border cell is the element type's zero. `padding` accepts a single amount
/// for both axes or an `(x, y)` pair, and `pad2d(&a, 0)` returns an
/// unpadded copy of `a`.
///
/// ***Panics*** if `data` has fewer than 2 dimensions.
///
/// ```
/// use ndarray::array;
/// use ndarray_adjust::pad2d;
///
/// let x = array![[1, 2],
///                [3, 4]];
/// assert_eq!(pad2d(&x, 1), array![[0, 0, 0, 0],
///                                 [0, 1, 2, 0],
///                                 [0, 3, 4, 0],
///                                 [0, 0, 0, 0]]);
/// ```
#[track_caller]
pub fn pad2d<S, D, P>(data: &ArrayBase<S, D>, padding: P) -> Array<S::Elem, D>
where
    S: Data,
    S::Elem: Zero + Clone,
    D: Dimension,
    P: Into<Padding>,
{
    let Padding { x, y } = padding.into();
    let mut dim = data.raw_dim();
    dim[0] += 2 * x;
    dim[1] += 2 * y;

    let mut padded = Array::zeros(dim);
    padded
        .slice_each_axis_mut(|ax| match ax.axis.index() {
            0 => Slice::from(x as isize..(ax.len - x) as isize),
            1 => Slice::from(y as isize..(ax.len - y) as isize),
            _ => Slice::from(..),
        })
        .assign(data);
    padded
}
