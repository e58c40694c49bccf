use ndarray::prelude::*;

use itertools::Itertools;

use ndarray_adjust::{fancy_transpose, ftl, ftr};

fn sequential(dim: (usize, usize, usize)) -> Array3<i32> {
    let len = dim.0 * dim.1 * dim.2;
    Array::from_shape_vec(dim, (0..len as i32).collect()).unwrap()
}

#[test]
fn roll_right_3x3x3() {
    let x = sequential((3, 3, 3));
    let t = fancy_transpose(x.view(), 1);
    assert_eq!(
        t,
        array![
            [[0, 3, 6], [9, 12, 15], [18, 21, 24]],
            [[1, 4, 7], [10, 13, 16], [19, 22, 25]],
            [[2, 5, 8], [11, 14, 17], [20, 23, 26]]
        ]
    );
}

#[test]
fn roll_left_3x3x3() {
    let x = sequential((3, 3, 3));
    let t = fancy_transpose(x.view(), -1);
    assert_eq!(
        t,
        array![
            [[0, 9, 18], [1, 10, 19], [2, 11, 20]],
            [[3, 12, 21], [4, 13, 22], [5, 14, 23]],
            [[6, 15, 24], [7, 16, 25], [8, 17, 26]]
        ]
    );
}

#[test]
fn roll_moves_axes_cyclically() {
    let x = sequential((2, 3, 4));
    assert_eq!(fancy_transpose(x.view(), 1).dim(), (4, 2, 3));
    assert_eq!(fancy_transpose(x.view(), -1).dim(), (3, 4, 2));
    for ((i, j, k), &elt) in fancy_transpose(x.view(), 1).indexed_iter() {
        assert_eq!(elt, x[[j, k, i]]);
    }
}

#[test]
fn roll_and_inverse_roll_cancel() {
    let x = sequential((2, 3, 4));
    assert_eq!(fancy_transpose(fancy_transpose(x.view(), 1), -1), x);
    assert_eq!(fancy_transpose(fancy_transpose(x.view(), -1), 1), x);
}

#[test]
fn roll_wraps_modulo_ndim() {
    let x = sequential((2, 3, 4));
    assert_eq!(fancy_transpose(x.view(), 4), fancy_transpose(x.view(), 1));
    assert_eq!(fancy_transpose(x.view(), -5), fancy_transpose(x.view(), 1));
    assert_eq!(fancy_transpose(x.view(), 3), x);
    assert_eq!(fancy_transpose(x.view(), 0), x);
}

#[test]
fn shorthands_match_fancy_transpose() {
    let x = sequential((2, 3, 4));
    assert_eq!(ftr(x.view()), fancy_transpose(x.view(), 1));
    assert_eq!(ftl(x.view()), fancy_transpose(x.view(), -1));
}

#[test]
fn rank1_is_unchanged() {
    let x = array![1, 2, 3];
    assert_eq!(fancy_transpose(x.view(), 1), x);
    assert_eq!(fancy_transpose(x.view(), -1), x);
}

#[test]
fn transpose_is_a_view() {
    // no elements move: every value of the input appears exactly once
    let x = sequential((2, 3, 4));
    let t = fancy_transpose(x.view(), 1);
    assert_eq!(t.len(), x.len());
    let sorted: Vec<i32> = t.iter().copied().sorted().collect();
    assert_eq!(sorted, (0..24).collect::<Vec<i32>>());
}

#[test]
fn roll_dyn_rank() {
    let x = sequential((2, 3, 4)).into_dyn();
    let t = fancy_transpose(x.view(), 1);
    assert_eq!(t.shape(), &[4, 2, 3]);
}
