//! Unit tests for the rolling mean helper

use rsiscan::common::math::rolling_mean;

fn defined(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(rolling_mean(&[], 3).is_empty());
}

#[test]
fn input_shorter_than_window_is_all_undefined() {
    let out = rolling_mean(&defined(&[1.0, 2.0]), 3);
    assert_eq!(out, vec![None, None]);
}

#[test]
fn window_equal_to_length_defines_only_the_last_entry() {
    let out = rolling_mean(&defined(&[1.0, 2.0, 3.0]), 3);
    assert_eq!(out, vec![None, None, Some(2.0)]);
}

#[test]
fn window_of_one_reproduces_the_input() {
    let out = rolling_mean(&defined(&[5.0, 7.0]), 1);
    assert_eq!(out, vec![Some(5.0), Some(7.0)]);
}

#[test]
fn trailing_means_follow_the_window() {
    let out = rolling_mean(&defined(&[2.0, 4.0, 6.0, 8.0]), 2);
    assert_eq!(out, vec![None, Some(3.0), Some(5.0), Some(7.0)]);
}

#[test]
fn undefined_samples_poison_their_windows() {
    let values = vec![None, Some(2.0), Some(4.0), Some(6.0)];
    let out = rolling_mean(&values, 2);
    assert_eq!(out, vec![None, None, Some(3.0), Some(5.0)]);
}

#[test]
fn output_length_always_matches_input_length() {
    for len in 0..6 {
        let values = vec![Some(1.0); len];
        assert_eq!(rolling_mean(&values, 3).len(), len);
    }
}
