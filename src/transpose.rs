// Copyright 2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndarray::{ArrayBase, Dimension, RawData};

/// Transpose an array by a cyclically rolled axis order.
///
/// The axis-index sequence `[0, 1, ..., n - 1]` is rolled by `roll`
/// positions and the array's axes are permuted to that order. `roll = 1`
/// moves the last axis to the front, `roll = -1` moves the first axis to the
/// back, and any magnitude of roll is reduced modulo the number of axes.
/// With `roll = 1` on a rank-3 array, output element `(i, j, k)` is input
/// element `(j, k, i)`.
///
/// This only rearranges the dimensions and strides, the same way
/// [`reversed_axes`][ndarray::ArrayBase::reversed_axes] does: no elements
/// are moved or cloned, and the element count is unchanged. It consumes
/// `data` and applies to owned arrays and views alike; pass a view to keep
/// the original binding.
///
/// ```
/// use ndarray::{array, Array3};
/// use ndarray_adjust::fancy_transpose;
///
/// let x: Array3<i32> = array![[[0, 1], [2, 3]],
///                             [[4, 5], [6, 7]]];
/// let t = fancy_transpose(x.view(), 1);
/// assert_eq!(t[[0, 1, 0]], x[[1, 0, 0]]);
///
/// // a roll and its inverse cancel out
/// assert_eq!(fancy_transpose(t, -1), x);
/// ```
pub fn fancy_transpose<S, D>(data: ArrayBase<S, D>, roll: isize) -> ArrayBase<S, D>
where
    S: RawData,
    D: Dimension,
{
    let n = data.ndim() as isize;
    let mut axes = data.raw_dim();
    for i in 0..n {
        axes[i as usize] = (i - roll).rem_euclid(n) as usize;
    }
    data.permuted_axes(axes)
}

/// Transpose with the axis order rolled right: [`fancy_transpose`] with
/// `roll = 1`.
pub fn ftr<S, D>(data: ArrayBase<S, D>) -> ArrayBase<S, D>
where
    S: RawData,
    D: Dimension,
{
    fancy_transpose(data, 1)
}

/// Transpose with the axis order rolled left: [`fancy_transpose`] with
/// `roll = -1`.
pub fn ftl<S, D>(data: ArrayBase<S, D>) -> ArrayBase<S, D>
where
    S: RawData,
    D: Dimension,
{
    fancy_transpose(data, -1)
}
