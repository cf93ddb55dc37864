//! Unit tests for the RSI indicator

use rsiscan::indicators::momentum::rsi::{latest_rsi, rsi_series, RsiZone};

#[test]
fn worked_example_with_window_three() {
    // deltas [_, 2, -1, 2, 1] -> gains [_, 2, 0, 2, 1], losses [_, 0, 1, 0, 0]
    // avg_gain[3] = 4/3, avg_loss[3] = 1/3 -> rs = 4 -> rsi = 80
    let closes = [10.0, 12.0, 11.0, 13.0, 14.0];
    let rsi = rsi_series(&closes, 3);

    assert_eq!(rsi.len(), closes.len());
    assert_eq!(&rsi[..3], &[None, None, None]);

    let at_three = rsi[3].expect("full window at index 3");
    assert!((at_three - 80.0).abs() < 1e-9);

    // avg_gain[4] = 1, avg_loss[4] = 1/3 -> rs = 3 -> rsi = 75
    let at_four = rsi[4].expect("full window at index 4");
    assert!((at_four - 75.0).abs() < 1e-9);
}

#[test]
fn strictly_rising_prices_pin_rsi_to_one_hundred() {
    let closes: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let rsi = rsi_series(&closes, 3);
    for value in rsi.into_iter().skip(3) {
        assert_eq!(value, Some(100.0));
    }
}

#[test]
fn flat_prices_leave_rsi_undefined() {
    let closes = [42.0; 8];
    assert!(rsi_series(&closes, 3).iter().all(Option::is_none));
}

#[test]
fn defined_values_stay_within_bounds() {
    let closes = [10.0, 12.0, 9.0, 15.0, 8.0, 11.0, 13.0, 7.0, 14.0];
    for value in rsi_series(&closes, 3).into_iter().flatten() {
        assert!((0.0..=100.0).contains(&value), "rsi out of range: {}", value);
    }
}

#[test]
fn series_shorter_than_window_has_no_latest_value() {
    assert_eq!(latest_rsi(&[10.0, 11.0], 14), None);
    assert_eq!(latest_rsi(&[], 14), None);
}

#[test]
fn latest_value_matches_the_series_tail() {
    let closes = [10.0, 12.0, 11.0, 13.0, 14.0];
    assert_eq!(latest_rsi(&closes, 3), rsi_series(&closes, 3)[4]);
}

#[test]
fn zone_classification_respects_thresholds() {
    assert_eq!(RsiZone::classify(75.0, 70.0, 30.0), RsiZone::Overbought);
    assert_eq!(RsiZone::classify(25.0, 70.0, 30.0), RsiZone::Oversold);
    assert_eq!(RsiZone::classify(50.0, 70.0, 30.0), RsiZone::Neutral);
    // values sitting on a threshold are neutral
    assert_eq!(RsiZone::classify(70.0, 70.0, 30.0), RsiZone::Neutral);
    assert_eq!(RsiZone::classify(30.0, 70.0, 30.0), RsiZone::Neutral);
}
