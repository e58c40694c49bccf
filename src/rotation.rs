// Copyright 2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndarray::{Array, ArrayBase, Axis, Data, Dimension};

/// Rotate an array by 180° in its first two axes.
///
/// The output has the same shape as the input, with element `(i, j, ...)`
/// taken from `(rows - 1 - i, cols - 1 - j, ...)`. Axes beyond the first two
/// are left untouched, so a rank-3 image cube is rotated plane by plane in
/// its leading two axes. This is the same result as two successive 90°
/// rotations, also for non-square inputs.
///
/// The rotation itself is a stride inversion of `Axis(0)` and `Axis(1)` on a
/// view; the returned array owns a copy of the data in the rotated order.
///
/// ***Panics*** if `data` has fewer than 2 dimensions.
///
/// ```
/// use ndarray::array;
/// use ndarray_adjust::rotate;
///
/// let x = array![[0, 1, 2],
///                [3, 4, 5],
///                [6, 7, 8]];
/// assert_eq!(rotate(&x), array![[8, 7, 6],
///                               [5, 4, 3],
///                               [2, 1, 0]]);
/// ```
#[track_caller]
pub fn rotate<S, D>(data: &ArrayBase<S, D>) -> Array<S::Elem, D>
where
    S: Data,
    S::Elem: Clone,
    D: Dimension,
{
    let mut view = data.view();
    view.invert_axis(Axis(0));
    view.invert_axis(Axis(1));
    view.to_owned()
}

/// Rotate each frame in a stack of arrays by 180°.
///
/// The input is interpreted as a sequence of frames along `Axis(0)`; every
/// frame is rotated in its own first two axes (the array's `Axis(1)` and
/// `Axis(2)`) exactly as [`rotate`] would, and the frame order is preserved.
/// The output has the same shape as the input.
///
/// ***Panics*** if `data` has fewer than 3 dimensions.
///
/// ```
/// use ndarray::{array, Axis};
/// use ndarray_adjust::{rotate, rotate_stack};
///
/// let stack = array![[[0, 1], [2, 3]],
///                    [[4, 5], [6, 7]]];
/// let rotated = rotate_stack(&stack);
/// assert_eq!(rotated.index_axis(Axis(0), 0), rotate(&stack.index_axis(Axis(0), 0)));
/// assert_eq!(rotated.index_axis(Axis(0), 1), rotate(&stack.index_axis(Axis(0), 1)));
/// ```
#[track_caller]
pub fn rotate_stack<S, D>(data: &ArrayBase<S, D>) -> Array<S::Elem, D>
where
    S: Data,
    S::Elem: Clone,
    D: Dimension,
{
    let mut view = data.view();
    view.invert_axis(Axis(1));
    view.invert_axis(Axis(2));
    view.to_owned()
}
