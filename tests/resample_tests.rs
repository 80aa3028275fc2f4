use candlescope::chart::resample::{bucket_start, resample};
use candlescope::model::candle::{Candle, RawSeries};
use candlescope::model::timeframe::Timeframe;

const MIN_MS: u64 = 60_000;

fn candle(minute: u64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Candle {
    Candle {
        open_time: minute * MIN_MS,
        open,
        high,
        low,
        close,
        volume,
    }
}

/// 120 one-minute bars in a steady uptrend, constant volume.
fn uptrend_120() -> RawSeries {
    RawSeries::new(
        (0..120u64)
            .map(|i| {
                let base = 100.0 + i as f64;
                candle(i, base, base + 0.5, base - 0.5, base + 0.25, 1.0)
            })
            .collect(),
    )
}

#[test]
fn uptrend_aggregates_to_eight_quarter_hours() {
    let raw = uptrend_120();
    let series = resample(&raw, Timeframe::M15).unwrap();
    assert_eq!(series.len(), 8);

    let last = series.candles()[7];
    let raw_last = raw.last().unwrap();
    assert!((last.close - raw_last.close).abs() < f64::EPSILON);

    let first = series.candles()[0];
    assert!((first.open - 100.0).abs() < f64::EPSILON);
    assert!((first.high - 114.5).abs() < f64::EPSILON);
    assert!((first.low - 99.5).abs() < f64::EPSILON);
    assert!((first.close - 114.25).abs() < f64::EPSILON);
    assert!((first.volume - 15.0).abs() < f64::EPSILON);
}

#[test]
fn trading_gap_fills_with_flat_bars() {
    // Ten missing minutes after bar 50.
    let mut candles: Vec<Candle> = (0..=50u64)
        .map(|i| candle(i, 100.0 + i as f64, 101.0 + i as f64, 99.0 + i as f64, 100.5 + i as f64, 1.0))
        .collect();
    candles.extend((61..=70u64).map(|i| {
        candle(i, 100.0 + i as f64, 101.0 + i as f64, 99.0 + i as f64, 100.5 + i as f64, 1.0)
    }));
    let raw = RawSeries::new(candles);

    let series = resample(&raw, Timeframe::M1).unwrap();
    assert_eq!(series.len(), 71);

    let gap_close = 100.5 + 50.0;
    for c in &series.candles()[51..61] {
        assert!((c.close - gap_close).abs() < f64::EPSILON);
        assert!((c.open - gap_close).abs() < f64::EPSILON);
        assert!((c.high - gap_close).abs() < f64::EPSILON);
        assert!((c.low - gap_close).abs() < f64::EPSILON);
        assert!(c.volume.abs() < f64::EPSILON);
        assert!(c.is_bullish());
    }
}

#[test]
fn resampling_is_idempotent() {
    let raw = uptrend_120();
    let a = resample(&raw, Timeframe::M30).unwrap();
    let b = resample(&raw, Timeframe::M30).unwrap();
    assert_eq!(a.candles(), b.candles());
}

#[test]
fn coarser_timeframes_never_grow() {
    let raw = uptrend_120();
    let counts: Vec<usize> = Timeframe::ALL
        .iter()
        .map(|tf| resample(&raw, *tf).unwrap().len())
        .collect();
    assert_eq!(counts[0], 120);
    for pair in counts.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    for count in counts {
        assert!(count <= raw.len());
    }
}

#[test]
fn output_axis_is_gapless() {
    // A raw series with several holes at every scale.
    let minutes = [0u64, 1, 2, 9, 10, 47, 48, 200, 311, 1440, 2881];
    let raw = RawSeries::new(
        minutes
            .iter()
            .map(|&m| candle(m, 10.0, 11.0, 9.0, 10.0, 1.0))
            .collect(),
    );

    for tf in Timeframe::ALL {
        let series = resample(&raw, tf).unwrap();
        assert!(!series.is_empty());
        for pair in series.candles().windows(2) {
            assert_eq!(pair[1].open_time - pair[0].open_time, tf.ms());
        }
    }
}

#[test]
fn buckets_are_epoch_aligned() {
    let raw = RawSeries::new(vec![candle(77, 1.0, 2.0, 0.5, 1.5, 1.0)]);
    let series = resample(&raw, Timeframe::H1).unwrap();
    assert_eq!(series.candles()[0].open_time, 60 * MIN_MS);
    assert_eq!(
        series.candles()[0].open_time,
        bucket_start(77 * MIN_MS, Timeframe::H1.ms())
    );
}

#[test]
fn empty_raw_series_is_not_an_error() {
    let series = resample(&RawSeries::new(Vec::new()), Timeframe::D1).unwrap();
    assert!(series.is_empty());
}
