// Copyright 2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndarray::{s, Array1, ArrayBase, Data, Ix1, NdFloat};

/// Convert histogram bin edges to bin centers.
///
/// Given the N ordered edge values delimiting N - 1 bins, returns the N - 1
/// midpoints `(vals[i] + vals[i + 1]) / 2`. This is the x-coordinate
/// sequence matching a histogram's per-bin counts, for plotting counts
/// against bin centers rather than against the leading edges.
///
/// A single edge yields an empty result.
///
/// ***Panics*** if `vals` is empty.
///
/// ```
/// use ndarray::array;
/// use ndarray_adjust::x_bins;
///
/// let edges = array![1.0, 1.5, 2.0, 2.5];
/// assert_eq!(x_bins(&edges), array![1.25, 1.75, 2.25]);
/// ```
#[track_caller]
pub fn x_bins<S, A>(vals: &ArrayBase<S, Ix1>) -> Array1<A>
where
    S: Data<Elem = A>,
    A: NdFloat,
{
    let two = A::one() + A::one();
    (&vals.slice(s![..-1]) + &vals.slice(s![1..])) / two
}

/// Convert histogram bin edges to step-plot aligned bin centers.
///
/// Returns [`x_bins`] shifted forward by half a bin width, so that a
/// histogram drawn as a step function lines up with its bins. The offset is
/// `(vals[1] - vals[0]) / 2`, computed from the first interval only: the
/// edges are assumed equally spaced, and on variable-width bins the same
/// first-interval offset is still applied to every center.
///
/// ***Panics*** if `vals` has fewer than 2 elements.
///
/// ```
/// use ndarray::array;
/// use ndarray_adjust::x_bins_step;
///
/// let edges = array![0.0, 0.5, 1.0, 1.5];
/// assert_eq!(x_bins_step(&edges), array![0.5, 1.0, 1.5]);
/// ```
#[track_caller]
pub fn x_bins_step<S, A>(vals: &ArrayBase<S, Ix1>) -> Array1<A>
where
    S: Data<Elem = A>,
    A: NdFloat,
{
    let two = A::one() + A::one();
    x_bins(vals) + (vals[1] - vals[0]) / two
}
